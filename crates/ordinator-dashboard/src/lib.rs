pub mod commands;
pub mod logging;
pub mod render;
pub mod session;

use clap::Parser;
use commands::Commands;
use ordinator_service_orders::Locale;

pub use session::DashboardSession;

#[derive(Parser, Debug)]
#[command(name = "ordinator-dashboard", author, version, about, long_about = None)]
pub struct Cli
{
    /// Language of labels and messages, overrides the configured locale
    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,
    /// Print the response as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}
