mod logging;

use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use ordinator_service_orders::Locale;
use ordinator_service_orders::dashboard::DEFAULT_RECENT_ORDERS;
use serde::Deserialize;
use serde::Serialize;

pub use logging::LoggingConfiguration;

pub const DEFAULT_CONFIGURATION_PATH: &str = "./configuration/dashboard.toml";

/// Everything the dashboard reads before it seeds its registry. A missing
/// configuration file is not an error, every field has a default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfiguration
{
    pub locale: Locale,
    pub recent_orders: usize,
    pub logging: LoggingConfiguration,
}

impl Default for DashboardConfiguration
{
    fn default() -> Self
    {
        Self {
            locale: Locale::default(),
            recent_orders: DEFAULT_RECENT_ORDERS,
            logging: LoggingConfiguration::default(),
        }
    }
}

impl DashboardConfiguration
{
    /// Reads the file named by `ORDINATOR_DASHBOARD_CONFIG`, or
    /// [`DEFAULT_CONFIGURATION_PATH`] when the variable is unset.
    pub fn read_config() -> Result<Self>
    {
        let configuration_path = dotenvy::var("ORDINATOR_DASHBOARD_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIGURATION_PATH));

        Self::read_from(&configuration_path)
    }

    pub fn read_from(configuration_path: &Path) -> Result<Self>
    {
        if !configuration_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(configuration_path).with_context(|| {
            format!(
                "could not read dashboard configuration at {}",
                configuration_path.display()
            )
        })?;

        Self::from_toml(&contents).with_context(|| {
            format!(
                "invalid dashboard configuration in {}",
                configuration_path.display()
            )
        })
    }

    pub fn from_toml(contents: &str) -> Result<Self>
    {
        let dashboard_configuration: DashboardConfiguration =
            toml::from_str(contents).context("could not parse dashboard TOML")?;

        Ok(dashboard_configuration)
    }
}
