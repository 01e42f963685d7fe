//! Text rendering of dashboard responses for a terminal.
use std::fmt;
use std::fmt::Write;

use chrono::NaiveDate;
use colored::ColoredString;
use colored::Colorize;
use ordinator_contracts::DashboardResponse;
use ordinator_contracts::equipment::EquipmentResponse;
use ordinator_contracts::service_orders::ServiceOrderListing;
use ordinator_contracts::service_orders::ServiceOrderResponse;
use ordinator_service_orders::CreationNotice;
use ordinator_service_orders::FieldErrors;
use ordinator_service_orders::Labelled;
use ordinator_service_orders::Locale;
use ordinator_service_orders::ServiceOrder;
use ordinator_service_orders::StyleToken;
use ordinator_service_orders::Styled;
use ordinator_service_orders::Tab;
use ordinator_service_orders::dashboard::DashboardSummary;
use ordinator_service_orders::risk::RiskAnalysis;
use strum::IntoEnumIterator;

pub fn paint(text: &str, style_token: StyleToken) -> ColoredString
{
    match style_token {
        StyleToken::Critical => text.red().bold(),
        StyleToken::Maintenance => text.truecolor(255, 140, 0),
        StyleToken::Warning => text.yellow(),
        StyleToken::Operational => text.green(),
        StyleToken::Accent => text.cyan(),
        StyleToken::Primary => text.blue().bold(),
        StyleToken::Secondary => text.white(),
        StyleToken::Muted => text.dimmed(),
    }
}

fn badge<T: Labelled + Styled>(value: &T, locale: Locale) -> ColoredString
{
    paint(value.label(locale), value.style_token())
}

pub fn format_date(date: NaiveDate, locale: Locale) -> String
{
    match locale {
        Locale::PtBr => date.format("%d/%m/%Y").to_string(),
        Locale::En => date.format("%Y-%m-%d").to_string(),
    }
}

pub fn render_json(dashboard_response: &DashboardResponse) -> serde_json::Result<String>
{
    serde_json::to_string_pretty(dashboard_response)
}

/// Writing into a `String` does not fail in practice, the error only
/// surfaces a failing `Display` implementation.
pub fn render(dashboard_response: &DashboardResponse, locale: Locale) -> Result<String, fmt::Error>
{
    match dashboard_response {
        DashboardResponse::ServiceOrders(ServiceOrderResponse::Listing(listing)) => {
            render_listing(listing, locale)
        }
        DashboardResponse::ServiceOrders(ServiceOrderResponse::Created(creation_notice)) => {
            render_creation_notice(creation_notice)
        }
        DashboardResponse::ServiceOrders(ServiceOrderResponse::ValidationFailed(field_errors)) => {
            render_field_errors(field_errors)
        }
        DashboardResponse::Equipment(equipment_response) => {
            render_equipment(equipment_response, locale)
        }
        DashboardResponse::RiskAnalysis(risk_analysis) => render_risk_analysis(risk_analysis, locale),
        DashboardResponse::Summary(dashboard_summary) => {
            render_summary(dashboard_summary, locale)
        }
    }
}

fn service_order_line(service_order: &ServiceOrder, locale: Locale) -> String
{
    format!(
        "{}  {}  [{}] [{}] [{}]  {} | {} | {} -> {}",
        service_order.id.to_string().bold(),
        service_order.title,
        badge(&service_order.priority, locale),
        badge(&service_order.status, locale),
        service_order.work_type.label(locale),
        service_order.equipment,
        service_order.assignee,
        format_date(service_order.created, locale),
        format_date(service_order.due_date, locale),
    )
}

fn render_listing(listing: &ServiceOrderListing, locale: Locale) -> Result<String, fmt::Error>
{
    let mut out = String::new();

    let tab_headers: Vec<String> = Tab::iter()
        .map(|tab| {
            let count = match tab {
                Tab::All => listing.tab_counts.all,
                Tab::Electrical => listing.tab_counts.electrical,
                Tab::Mechanical => listing.tab_counts.mechanical,
            };
            let header = format!("{} ({count})", tab.label(locale));
            if tab == listing.filter.tab {
                header.underline().to_string()
            } else {
                header
            }
        })
        .collect();
    writeln!(out, "{}", tab_headers.join("  "))?;

    if listing.active_filter_count > 0 {
        let active_filters = match locale {
            Locale::PtBr => "filtros ativos",
            Locale::En => "active filters",
        };
        writeln!(out, "{} {active_filters}", listing.active_filter_count)?;
    }

    for service_order in &listing.service_orders {
        writeln!(out, "{}", service_order_line(service_order, locale))?;
    }
    Ok(out)
}

fn render_creation_notice(creation_notice: &CreationNotice) -> Result<String, fmt::Error>
{
    Ok(format!(
        "{}\n{}\n",
        paint(&creation_notice.title, StyleToken::Operational),
        creation_notice.description
    ))
}

fn render_field_errors(field_errors: &FieldErrors) -> Result<String, fmt::Error>
{
    let mut out = String::new();
    for (draft_field, messages) in field_errors.iter() {
        for message in messages {
            writeln!(
                out,
                "{}: {}",
                draft_field.as_str().bold(),
                paint(message, StyleToken::Critical)
            )?;
        }
    }
    Ok(out)
}

fn render_equipment(equipment_response: &EquipmentResponse, locale: Locale) -> Result<String, fmt::Error>
{
    let mut out = String::new();
    let status_counts = &equipment_response.status_counts;
    writeln!(
        out,
        "{} {}  {} {}  {} {}  {} {}",
        paint("●", StyleToken::Operational),
        status_counts.operational,
        paint("●", StyleToken::Warning),
        status_counts.warning,
        paint("●", StyleToken::Critical),
        status_counts.critical,
        paint("●", StyleToken::Maintenance),
        status_counts.maintenance,
    )?;

    for asset in &equipment_response.assets {
        writeln!(
            out,
            "{}  {}  [{}] [{}]  {} | {} {} ({})  {}%",
            asset.id.bold(),
            asset.name,
            badge(&asset.status, locale),
            asset.work_type.label(locale),
            asset.location,
            asset.manufacturer,
            asset.model,
            asset.year_installed,
            paint(&asset.health_score.to_string(), asset.health_band()),
        )?;
    }
    Ok(out)
}

fn render_risk_analysis(risk_analysis: &RiskAnalysis, locale: Locale) -> Result<String, fmt::Error>
{
    let mut out = String::new();
    for risk_metric in &risk_analysis.metrics {
        writeln!(
            out,
            "{}: {} ({})",
            risk_metric.title,
            risk_metric.value,
            paint(&risk_metric.score.to_string(), risk_metric.score_band())
        )?;
    }

    for work_type in ordinator_service_orders::WorkType::iter() {
        writeln!(out, "\n{}", work_type.label(locale).bold())?;
        for risk in risk_analysis.risks_for(work_type) {
            writeln!(
                out,
                "  {} - {}  [{}]  {}%  {}",
                risk.equipment,
                risk.risk,
                badge(&risk.severity, locale),
                paint(&risk.probability.to_string(), risk.probability_band()),
                risk.prediction,
            )?;
            writeln!(out, "    {}", risk.factors.join(", ").dimmed())?;
        }
    }
    Ok(out)
}

fn render_summary(dashboard_summary: &DashboardSummary, locale: Locale) -> Result<String, fmt::Error>
{
    let mut out = String::new();
    for dashboard_metric in &dashboard_summary.metrics {
        writeln!(
            out,
            "{}: {} ({})",
            dashboard_metric.title,
            paint(&dashboard_metric.value, dashboard_metric.style_token),
            dashboard_metric.change
        )?;
    }

    let active_orders = match locale {
        Locale::PtBr => "Ordens de serviço ativas",
        Locale::En => "Active service orders",
    };
    writeln!(
        out,
        "{active_orders}: {}",
        dashboard_summary.active_service_orders
    )?;

    for critical_alert in &dashboard_summary.critical_alerts {
        writeln!(
            out,
            "[{}] {}: {} ({})",
            badge(&critical_alert.severity, locale),
            critical_alert.equipment,
            critical_alert.issue,
            critical_alert.time_ago
        )?;
    }

    for service_order in &dashboard_summary.recent_service_orders {
        writeln!(out, "{}", service_order_line(service_order, locale))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::DashboardSession;
    use ordinator_contracts::DashboardRequest;

    fn today() -> NaiveDate
    {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_format_date_per_locale()
    {
        let date = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();

        assert_eq!(format_date(date, Locale::PtBr), "18/01/2024");
        assert_eq!(format_date(date, Locale::En), "2024-01-18");
    }

    #[test]
    fn test_listing_shows_every_order()
    {
        colored::control::set_override(false);
        let mut dashboard_session = DashboardSession::default();
        let dashboard_response = dashboard_session
            .handle(
                DashboardRequest::ServiceOrders(
                    ordinator_contracts::service_orders::ServiceOrderRequest::List,
                ),
                today(),
            )
            .unwrap();

        let rendered = render(&dashboard_response, Locale::PtBr).unwrap();

        assert!(rendered.starts_with("Todas (5)  Elétrico (2)  Mecânico (3)"));
        for sequence in 1..=5 {
            assert!(rendered.contains(&format!("OS-2024-00{sequence}")));
        }
        assert!(rendered.contains("[Crítico] [Em Andamento]"));
    }

    #[test]
    fn test_risk_analysis_groups_by_work_type()
    {
        colored::control::set_override(false);
        let rendered = render(
            &DashboardResponse::RiskAnalysis(RiskAnalysis::seeded()),
            Locale::En,
        )
        .unwrap();

        let electrical = rendered.find("Electrical").unwrap();
        let mechanical = rendered.find("Mechanical").unwrap();
        let transformer = rendered.find("Transformador T2").unwrap();
        assert!(electrical < transformer && transformer < mechanical);
    }

    #[test]
    fn test_field_errors_are_listed_one_message_per_line()
    {
        colored::control::set_override(false);
        let field_errors = ordinator_service_orders::ServiceOrderDraft::default()
            .validate_for(Locale::En)
            .unwrap_err();

        let rendered = render(
            &DashboardResponse::ServiceOrders(ServiceOrderResponse::ValidationFailed(
                field_errors.clone(),
            )),
            Locale::En,
        )
        .unwrap();

        assert_eq!(rendered.lines().count(), field_errors.len());
        assert!(rendered.starts_with("title: Title must be at least 5 characters\n"));
        assert!(rendered.contains("dueDate: Select a due date\n"));
    }
}
