use anyhow::Context;
use anyhow::Result;
use chrono::Local;
use clap::Parser;
use ordinator_configuration::DashboardConfiguration;
use ordinator_contracts::DashboardResponse;
use ordinator_contracts::service_orders::ServiceOrderResponse;
use ordinator_dashboard::Cli;
use ordinator_dashboard::DashboardSession;
use ordinator_dashboard::commands;
use ordinator_dashboard::logging;
use ordinator_dashboard::render;
use tracing::Level;
use tracing::event;

fn main() -> Result<()>
{
    let cli = Cli::parse();

    let dashboard_configuration =
        DashboardConfiguration::read_config().context("could not load the dashboard configuration")?;
    let guard = logging::setup_logging(&dashboard_configuration.logging)?;

    let locale = cli.locale.unwrap_or(dashboard_configuration.locale);
    let today = Local::now().date_naive();

    let dashboard_requests = commands::handle_command(&cli.command, today)?;

    let mut dashboard_session =
        DashboardSession::seeded(locale, dashboard_configuration.recent_orders);

    let mut last_response = None;
    for dashboard_request in dashboard_requests {
        last_response = Some(
            dashboard_session
                .handle(dashboard_request, today)
                .context("the dashboard session could not handle the request")?,
        );
    }

    let Some(dashboard_response) = last_response else {
        event!(Level::WARN, "command produced no requests");
        return Ok(());
    };

    if cli.json {
        println!(
            "{}",
            render::render_json(&dashboard_response).context("could not serialize the response")?
        );
    } else {
        print!(
            "{}",
            render::render(&dashboard_response, locale).context("could not render the response")?
        );
    }

    if let DashboardResponse::ServiceOrders(ServiceOrderResponse::ValidationFailed(field_errors)) =
        &dashboard_response
    {
        event!(Level::WARN, invalid_fields = field_errors.len(), "service order not created");
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}
