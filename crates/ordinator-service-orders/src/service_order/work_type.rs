use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::labels::Labelled;
use crate::labels::Locale;

/// Maintenance discipline of a service order or an equipment asset.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType
{
    Electrical,
    Mechanical,
}

impl Labelled for WorkType
{
    fn label(&self, locale: Locale) -> &'static str
    {
        match (self, locale) {
            (WorkType::Electrical, Locale::PtBr) => "Elétrico",
            (WorkType::Electrical, Locale::En) => "Electrical",
            (WorkType::Mechanical, Locale::PtBr) => "Mecânico",
            (WorkType::Mechanical, Locale::En) => "Mechanical",
        }
    }
}

impl fmt::Display for WorkType
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.label(Locale::En))
    }
}
