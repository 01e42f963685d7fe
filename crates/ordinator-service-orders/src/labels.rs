use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::service_order::ServiceOrderId;

/// Language of every user facing string produced by the crate.
#[derive(
    Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Locale
{
    #[default]
    PtBr,
    En,
}

/// Enums that are shown to the user through a per locale label.
///
/// A value can be recovered from its label in any locale or from its
/// kebab-case identifier (`in-progress`, `critical`, ...), ignoring case.
pub trait Labelled: ValueEnum + IntoEnumIterator + Copy
{
    fn label(&self, locale: Locale) -> &'static str;

    fn from_label(value: &str) -> Option<Self>
    {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        let value_lowercase = value.to_lowercase();
        Self::iter()
            .find(|variant| {
                Locale::iter()
                    .any(|locale| variant.label(locale).to_lowercase() == value_lowercase)
            })
            .or_else(|| <Self as ValueEnum>::from_str(value, true).ok())
    }
}

pub fn creation_notice_title(locale: Locale) -> &'static str
{
    match locale {
        Locale::PtBr => "Ordem criada com sucesso!",
        Locale::En => "Order created successfully!",
    }
}

pub fn creation_notice_description(
    locale: Locale,
    id: &ServiceOrderId,
    assignee: &str,
) -> String
{
    match locale {
        Locale::PtBr => format!("Ordem {id} foi criada e atribuída a {assignee}."),
        Locale::En => format!("Order {id} was created and assigned to {assignee}."),
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::service_order::order_status::OrderStatus;
    use crate::service_order::priority::Priority;
    use crate::service_order::work_type::WorkType;

    #[test]
    fn test_from_label_accepts_every_locale()
    {
        for status in OrderStatus::iter() {
            for locale in Locale::iter() {
                assert_eq!(OrderStatus::from_label(status.label(locale)), Some(status));
            }
        }
        assert_eq!(Priority::from_label("Crítico"), Some(Priority::Critical));
        assert_eq!(WorkType::from_label("Mechanical"), Some(WorkType::Mechanical));
    }

    #[test]
    fn test_from_label_accepts_identifiers()
    {
        assert_eq!(OrderStatus::from_label("in-progress"), Some(OrderStatus::InProgress));
        assert_eq!(Priority::from_label("LOW"), Some(Priority::Low));
    }

    #[test]
    fn test_from_label_ignores_case_of_labels()
    {
        assert_eq!(Priority::from_label("crítico"), Some(Priority::Critical));
        assert_eq!(Priority::from_label("CRÍTICO"), Some(Priority::Critical));
        assert_eq!(OrderStatus::from_label("em andamento"), Some(OrderStatus::InProgress));
        assert_eq!(WorkType::from_label("  mecânico "), Some(WorkType::Mechanical));
        assert_eq!(OrderStatus::from_label("CRITICAL"), None);
    }

    #[test]
    fn test_from_label_rejects_unknown_values()
    {
        assert_eq!(Priority::from_label(""), None);
        assert_eq!(Priority::from_label("Urgente"), None);
        assert_eq!(WorkType::from_label("Hydraulic"), None);
    }

    #[test]
    fn test_creation_notice_description()
    {
        let id = ServiceOrderId::new(2026, 6);
        assert_eq!(
            creation_notice_description(Locale::PtBr, &id, "Ana Souza"),
            "Ordem OS-2026-006 foi criada e atribuída a Ana Souza."
        );
    }
}
