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
    Default, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus
{
    #[default]
    Pending,
    Assigned,
    InProgress,
    Completed,
    Planning,
}

impl Labelled for OrderStatus
{
    fn label(&self, locale: Locale) -> &'static str
    {
        match (self, locale) {
            (OrderStatus::Pending, Locale::PtBr) => "Pendente",
            (OrderStatus::Pending, Locale::En) => "Pending",
            (OrderStatus::Assigned, Locale::PtBr) => "Atribuído",
            (OrderStatus::Assigned, Locale::En) => "Assigned",
            (OrderStatus::InProgress, Locale::PtBr) => "Em Andamento",
            (OrderStatus::InProgress, Locale::En) => "In Progress",
            (OrderStatus::Completed, Locale::PtBr) => "Concluído",
            (OrderStatus::Completed, Locale::En) => "Completed",
            (OrderStatus::Planning, Locale::PtBr) => "Planejamento",
            (OrderStatus::Planning, Locale::En) => "Planning",
        }
    }
}

impl Styled for OrderStatus
{
    fn style_token(&self) -> StyleToken
    {
        match self {
            OrderStatus::Completed => StyleToken::Operational,
            OrderStatus::InProgress => StyleToken::Accent,
            OrderStatus::Assigned => StyleToken::Primary,
            OrderStatus::Pending | OrderStatus::Planning => StyleToken::Secondary,
        }
    }
}

impl fmt::Display for OrderStatus
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.label(Locale::En))
    }
}
