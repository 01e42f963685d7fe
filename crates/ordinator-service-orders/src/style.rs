use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;

/// Presentation neutral colour role of a badge or a score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum StyleToken
{
    Critical,
    Maintenance,
    Warning,
    Operational,
    Accent,
    Primary,
    Secondary,
    Muted,
}

pub trait Styled
{
    fn style_token(&self) -> StyleToken;
}

impl StyleToken
{
    pub fn badge_classes(&self) -> &'static str
    {
        match self {
            StyleToken::Critical => "bg-status-critical text-status-critical-foreground",
            StyleToken::Maintenance => "bg-status-maintenance text-status-maintenance-foreground",
            StyleToken::Warning => "bg-status-warning text-status-warning-foreground",
            StyleToken::Operational => "bg-status-operational text-status-operational-foreground",
            StyleToken::Accent => "bg-accent text-accent-foreground",
            StyleToken::Primary => "bg-primary text-primary-foreground",
            StyleToken::Secondary => "bg-secondary text-secondary-foreground",
            StyleToken::Muted => "bg-muted text-muted-foreground",
        }
    }

    pub fn text_class(&self) -> &'static str
    {
        match self {
            StyleToken::Critical => "text-status-critical",
            StyleToken::Maintenance => "text-status-maintenance",
            StyleToken::Warning => "text-status-warning",
            StyleToken::Operational => "text-status-operational",
            StyleToken::Accent => "text-accent",
            StyleToken::Primary => "text-primary",
            StyleToken::Secondary => "text-secondary",
            StyleToken::Muted => "text-muted-foreground",
        }
    }
}

/// Colour of an equipment health score, higher is better.
pub fn health_band(score: u8) -> StyleToken
{
    match score {
        80.. => StyleToken::Operational,
        60..=79 => StyleToken::Warning,
        40..=59 => StyleToken::Maintenance,
        _ => StyleToken::Critical,
    }
}

/// Colour of a risk score, higher is worse.
pub fn risk_band(score: u8) -> StyleToken
{
    match score {
        80.. => StyleToken::Critical,
        60..=79 => StyleToken::Maintenance,
        40..=59 => StyleToken::Warning,
        _ => StyleToken::Operational,
    }
}
