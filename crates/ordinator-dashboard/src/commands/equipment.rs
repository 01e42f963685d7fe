use clap::Subcommand;
use ordinator_contracts::DashboardRequest;
use ordinator_contracts::equipment::EquipmentRequest;
use ordinator_service_orders::Tab;

#[derive(Subcommand, Debug)]
pub enum EquipmentCommands
{
    /// List assets matching a search term over name, location and manufacturer
    List
    {
        #[arg(long)]
        search: Option<String>,
        #[arg(long, value_enum)]
        tab: Option<Tab>,
    },
}

impl EquipmentCommands
{
    pub fn execute(&self) -> Vec<DashboardRequest>
    {
        match self {
            EquipmentCommands::List { search, tab } => {
                let mut equipment_requests = Vec::new();
                if let Some(search) = search {
                    equipment_requests.push(EquipmentRequest::SetSearchTerm(search.clone()));
                }
                if let Some(tab) = tab {
                    equipment_requests.push(EquipmentRequest::SetTab(*tab));
                }
                equipment_requests.push(EquipmentRequest::List);

                equipment_requests
                    .into_iter()
                    .map(DashboardRequest::Equipment)
                    .collect()
            }
        }
    }
}
