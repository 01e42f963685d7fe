use chrono::NaiveDate;
use clap::Subcommand;
use ordinator_contracts::DashboardRequest;

pub mod equipment;
pub mod orders;

use self::equipment::EquipmentCommands;
use self::orders::OrderCommands;

#[derive(Subcommand, Debug)]
pub enum Commands
{
    /// List and create service orders
    Orders
    {
        #[clap(subcommand)]
        order_commands: OrderCommands,
    },
    /// Browse the equipment assets
    Equipment
    {
        #[clap(subcommand)]
        equipment_commands: EquipmentCommands,
    },
    /// Show the predictive risk analysis
    Risk,
    /// Show the dashboard overview
    Summary,
}

/// Requests to send to the session, in order. The response to the last one
/// is the one shown to the user.
pub fn handle_command(
    command: &Commands,
    today: NaiveDate,
) -> anyhow::Result<Vec<DashboardRequest>>
{
    match command {
        Commands::Orders { order_commands } => order_commands.execute(today),
        Commands::Equipment { equipment_commands } => Ok(equipment_commands.execute()),
        Commands::Risk => Ok(vec![DashboardRequest::RiskAnalysis]),
        Commands::Summary => Ok(vec![DashboardRequest::Summary]),
    }
}
