use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::labels::Labelled;
use crate::labels::Locale;
use crate::style::StyleToken;
use crate::style::Styled;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Priority
{
    Critical,
    High,
    Medium,
    Low,
}

impl Priority
{
    /// Sort key of the order listing. Only the first three priorities are
    /// ranked, everything else shares the last rank.
    pub fn rank(&self) -> u8
    {
        match self {
            Priority::Critical => 1,
            Priority::High => 2,
            Priority::Medium => 3,
            Priority::Low => 4,
        }
    }
}

impl Labelled for Priority
{
    fn label(&self, locale: Locale) -> &'static str
    {
        match (self, locale) {
            (Priority::Critical, Locale::PtBr) => "Crítico",
            (Priority::Critical, Locale::En) => "Critical",
            (Priority::High, Locale::PtBr) => "Alto",
            (Priority::High, Locale::En) => "High",
            (Priority::Medium, Locale::PtBr) => "Médio",
            (Priority::Medium, Locale::En) => "Medium",
            (Priority::Low, Locale::PtBr) => "Baixo",
            (Priority::Low, Locale::En) => "Low",
        }
    }
}

impl Styled for Priority
{
    fn style_token(&self) -> StyleToken
    {
        match self {
            Priority::Critical => StyleToken::Critical,
            Priority::High => StyleToken::Maintenance,
            Priority::Medium => StyleToken::Warning,
            Priority::Low => StyleToken::Muted,
        }
    }
}

impl fmt::Display for Priority
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.label(Locale::En))
    }
}
