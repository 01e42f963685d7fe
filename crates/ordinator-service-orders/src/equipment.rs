use std::fmt;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::filter::Tab;
use crate::filter::matches_search_term;
use crate::labels::Labelled;
use crate::labels::Locale;
use crate::service_order::work_type::WorkType;
use crate::style;
use crate::style::StyleToken;
use crate::style::Styled;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentStatus
{
    Operational,
    Warning,
    Critical,
    Maintenance,
}

impl Labelled for EquipmentStatus
{
    fn label(&self, locale: Locale) -> &'static str
    {
        match (self, locale) {
            (EquipmentStatus::Operational, Locale::PtBr) => "Operacional",
            (EquipmentStatus::Operational, Locale::En) => "Operational",
            (EquipmentStatus::Warning, Locale::PtBr) => "Atenção",
            (EquipmentStatus::Warning, Locale::En) => "Warning",
            (EquipmentStatus::Critical, Locale::PtBr) => "Crítico",
            (EquipmentStatus::Critical, Locale::En) => "Critical",
            (EquipmentStatus::Maintenance, Locale::PtBr) => "Manutenção",
            (EquipmentStatus::Maintenance, Locale::En) => "Maintenance",
        }
    }
}

impl Styled for EquipmentStatus
{
    fn style_token(&self) -> StyleToken
    {
        match self {
            EquipmentStatus::Operational => StyleToken::Operational,
            EquipmentStatus::Warning => StyleToken::Warning,
            EquipmentStatus::Critical => StyleToken::Critical,
            EquipmentStatus::Maintenance => StyleToken::Maintenance,
        }
    }
}

impl fmt::Display for EquipmentStatus
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.label(Locale::En))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentAsset
{
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub status: EquipmentStatus,
    pub location: String,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
    pub health_score: u8,
    pub manufacturer: String,
    pub model: String,
    pub year_installed: u16,
}

impl EquipmentAsset
{
    pub fn health_band(&self) -> StyleToken
    {
        style::health_band(self.health_score)
    }
}

/// Listing state of the equipment view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentFilter
{
    pub search_term: String,
    pub tab: Tab,
}

impl EquipmentFilter
{
    pub fn matches(&self, asset: &EquipmentAsset) -> bool
    {
        matches_search_term(
            &self.search_term,
            &[
                asset.name.as_str(),
                asset.location.as_str(),
                asset.manufacturer.as_str(),
            ],
        ) && self.tab.matches(asset.work_type)
    }
}

/// Assets matching `filter`, in their original order.
pub fn filter_equipment<'a>(
    assets: &'a [EquipmentAsset],
    filter: &EquipmentFilter,
) -> Vec<&'a EquipmentAsset>
{
    assets.iter().filter(|asset| filter.matches(asset)).collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentStatusCounts
{
    pub operational: usize,
    pub warning: usize,
    pub critical: usize,
    pub maintenance: usize,
}

impl EquipmentStatusCounts
{
    pub fn from_assets(assets: &[EquipmentAsset]) -> Self
    {
        assets
            .iter()
            .fold(Self::default(), |mut counts, asset| {
                match asset.status {
                    EquipmentStatus::Operational => counts.operational += 1,
                    EquipmentStatus::Warning => counts.warning += 1,
                    EquipmentStatus::Critical => counts.critical += 1,
                    EquipmentStatus::Maintenance => counts.maintenance += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::seed;

    #[test]
    fn test_search_over_name_location_and_manufacturer()
    {
        let assets = seed::equipment();

        for (term, expected_id) in [
            ("conveyor", "EQ-002"),
            ("UTILITY ROOM", "EQ-005"),
            ("grundfos", "EQ-005"),
        ] {
            let filter = EquipmentFilter {
                search_term: term.to_string(),
                ..EquipmentFilter::default()
            };
            let matching = filter_equipment(&assets, &filter);
            assert_eq!(matching.len(), 1, "{term}");
            assert_eq!(matching[0].id, expected_id);
        }
    }

    #[test]
    fn test_tab_keeps_original_order()
    {
        let assets = seed::equipment();
        let filter = EquipmentFilter {
            tab: Tab::Electrical,
            ..EquipmentFilter::default()
        };

        let ids: Vec<&str> = filter_equipment(&assets, &filter)
            .iter()
            .map(|asset| asset.id.as_str())
            .collect();

        assert_eq!(ids, vec!["EQ-001", "EQ-004", "EQ-006"]);
    }

    #[test]
    fn test_status_counts()
    {
        let counts = EquipmentStatusCounts::from_assets(&seed::equipment());

        assert_eq!(
            counts,
            EquipmentStatusCounts {
                operational: 3,
                warning: 1,
                critical: 1,
                maintenance: 1
            }
        );
    }

    #[test]
    fn test_health_band_of_seeded_assets()
    {
        let assets = seed::equipment();
        let motor_drive = assets.iter().find(|asset| asset.id == "EQ-004").unwrap();

        assert_eq!(motor_drive.health_band(), StyleToken::Critical);
        assert_eq!(assets[0].health_band(), StyleToken::Operational);
    }
}
