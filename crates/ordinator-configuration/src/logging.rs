use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfiguration
{
    pub directory: PathBuf,
    pub file_name: String,
    /// `EnvFilter` directive used when `TRACING_LEVEL` is not set.
    pub level: String,
}

impl Default for LoggingConfiguration
{
    fn default() -> Self
    {
        Self {
            directory: PathBuf::from("./logs"),
            file_name: "ordinator-dashboard.log".to_string(),
            level: "info".to_string(),
        }
    }
}
