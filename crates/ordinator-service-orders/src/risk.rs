use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::labels::Labelled;
use crate::labels::Locale;
use crate::seed;
use crate::service_order::work_type::WorkType;
use crate::style;
use crate::style::StyleToken;
use crate::style::Styled;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Severity
{
    Critical,
    High,
    Medium,
    Low,
}

impl Labelled for Severity
{
    fn label(&self, locale: Locale) -> &'static str
    {
        match (self, locale) {
            (Severity::Critical, Locale::PtBr) => "Crítico",
            (Severity::Critical, Locale::En) => "Critical",
            (Severity::High, Locale::PtBr) => "Alto",
            (Severity::High, Locale::En) => "High",
            (Severity::Medium, Locale::PtBr) => "Médio",
            (Severity::Medium, Locale::En) => "Medium",
            (Severity::Low, Locale::PtBr) => "Baixo",
            (Severity::Low, Locale::En) => "Low",
        }
    }
}

impl Styled for Severity
{
    fn style_token(&self) -> StyleToken
    {
        match self {
            Severity::Critical => StyleToken::Critical,
            Severity::High => StyleToken::Maintenance,
            Severity::Medium => StyleToken::Warning,
            Severity::Low => StyleToken::Operational,
        }
    }
}

impl fmt::Display for Severity
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.label(Locale::En))
    }
}

/// Predicted failure of a single asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment
{
    pub equipment: String,
    pub risk: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub severity: Severity,
    pub probability: u8,
    pub impact: Severity,
    pub prediction: String,
    pub factors: Vec<String>,
}

impl RiskAssessment
{
    pub fn probability_band(&self) -> StyleToken
    {
        style::risk_band(self.probability)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMetric
{
    pub title: String,
    pub value: String,
    pub score: u8,
}

impl RiskMetric
{
    pub fn score_band(&self) -> StyleToken
    {
        style::risk_band(self.score)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAnalysis
{
    pub metrics: Vec<RiskMetric>,
    pub risks: Vec<RiskAssessment>,
}

impl RiskAnalysis
{
    pub fn seeded() -> Self
    {
        Self {
            metrics: seed::risk_metrics(),
            risks: seed::risk_assessments(),
        }
    }

    pub fn risks_for(&self, work_type: WorkType) -> impl Iterator<Item = &RiskAssessment>
    {
        self.risks
            .iter()
            .filter(move |risk| risk.work_type == work_type)
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_risks_are_grouped_by_work_type()
    {
        let risk_analysis = RiskAnalysis::seeded();

        let electrical: Vec<&str> = risk_analysis
            .risks_for(WorkType::Electrical)
            .map(|risk| risk.equipment.as_str())
            .collect();
        let mechanical = risk_analysis.risks_for(WorkType::Mechanical).count();

        assert_eq!(
            electrical,
            vec![
                "Painel Elétrico A3",
                "Unidade de Acionamento 5",
                "Transformador T2"
            ]
        );
        assert_eq!(mechanical, 3);
    }

    #[test]
    fn test_severity_style_tokens()
    {
        assert_eq!(Severity::Critical.style_token(), StyleToken::Critical);
        assert_eq!(Severity::High.style_token(), StyleToken::Maintenance);
        assert_eq!(Severity::Medium.style_token(), StyleToken::Warning);
        assert_eq!(Severity::Low.style_token(), StyleToken::Operational);
    }

    #[test]
    fn test_metric_score_band()
    {
        let risk_analysis = RiskAnalysis::seeded();
        let bands: Vec<StyleToken> = risk_analysis
            .metrics
            .iter()
            .map(RiskMetric::score_band)
            .collect();

        assert_eq!(
            bands,
            vec![
                StyleToken::Maintenance,
                StyleToken::Maintenance,
                StyleToken::Operational,
                StyleToken::Critical
            ]
        );
    }
}
