use std::collections::BTreeSet;

use anyhow::bail;
use chrono::NaiveDate;
use clap::Args;
use clap::Subcommand;
use ordinator_contracts::DashboardRequest;
use ordinator_contracts::service_orders::ServiceOrderRequest;
use ordinator_service_orders::OrderStatus;
use ordinator_service_orders::Priority;
use ordinator_service_orders::ServiceOrderDraft;
use ordinator_service_orders::Tab;
use ordinator_service_orders::WorkType;

#[derive(Subcommand, Debug)]
pub enum OrderCommands
{
    /// List service orders, most urgent first
    List(ListArgs),
    /// Create a new service order
    Create(CreateArgs),
}

#[derive(Args, Debug, Default)]
pub struct ListArgs
{
    /// Matched against title, equipment and assignee
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, value_enum)]
    pub tab: Option<Tab>,
    #[arg(long = "status", value_enum)]
    pub statuses: Vec<OrderStatus>,
    #[arg(long = "priority", value_enum)]
    pub priorities: Vec<Priority>,
    #[arg(long = "type", value_enum)]
    pub work_types: Vec<WorkType>,
}

/// The text fields are passed on unchecked, the registry reports every
/// invalid field at once. Enumerated fields accept the label in any locale.
#[derive(Args, Debug, Default)]
pub struct CreateArgs
{
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub equipment: String,
    /// Elétrico, Mecânico, electrical or mechanical
    #[arg(long = "type", default_value = "")]
    pub work_type: String,
    #[arg(long, default_value = "")]
    pub priority: String,
    /// Defaults to pending
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long, default_value = "")]
    pub assignee: String,
    /// YYYY-MM-DD, today or later
    #[arg(long)]
    pub due_date: Option<NaiveDate>,
    #[arg(long, default_value = "")]
    pub description: String,
}

impl OrderCommands
{
    pub fn execute(&self, today: NaiveDate) -> anyhow::Result<Vec<DashboardRequest>>
    {
        let service_order_requests = match self {
            OrderCommands::List(list_args) => list_args.requests(),
            OrderCommands::Create(create_args) => {
                vec![ServiceOrderRequest::Create(create_args.draft(today)?)]
            }
        };

        Ok(service_order_requests
            .into_iter()
            .map(DashboardRequest::ServiceOrders)
            .collect())
    }
}

impl ListArgs
{
    /// Repeating a value selects it once, it does not toggle it back off.
    fn requests(&self) -> Vec<ServiceOrderRequest>
    {
        let mut service_order_requests = Vec::new();
        if let Some(search) = &self.search {
            service_order_requests.push(ServiceOrderRequest::SetSearchTerm(search.clone()));
        }
        if let Some(tab) = self.tab {
            service_order_requests.push(ServiceOrderRequest::SetTab(tab));
        }

        let statuses: BTreeSet<OrderStatus> = self.statuses.iter().copied().collect();
        let priorities: BTreeSet<Priority> = self.priorities.iter().copied().collect();
        let work_types: BTreeSet<WorkType> = self.work_types.iter().copied().collect();

        service_order_requests.extend(statuses.into_iter().map(ServiceOrderRequest::ToggleStatus));
        service_order_requests.extend(
            priorities
                .into_iter()
                .map(ServiceOrderRequest::TogglePriority),
        );
        service_order_requests.extend(
            work_types
                .into_iter()
                .map(ServiceOrderRequest::ToggleWorkType),
        );

        service_order_requests.push(ServiceOrderRequest::List);
        service_order_requests
    }
}

impl CreateArgs
{
    /// The date picker of the form only offers dates from today on, a past
    /// due date never reaches the registry.
    pub fn draft(&self, today: NaiveDate) -> anyhow::Result<ServiceOrderDraft>
    {
        if let Some(due_date) = self.due_date.filter(|due_date| *due_date < today) {
            bail!("the due date {due_date} is before today ({today})");
        }

        let default_draft = ServiceOrderDraft::default();
        Ok(ServiceOrderDraft {
            title: self.title.clone(),
            equipment: self.equipment.clone(),
            work_type: self.work_type.clone(),
            priority: self.priority.clone(),
            status: self.status.clone().unwrap_or(default_draft.status),
            assignee: self.assignee.clone(),
            due_date: self.due_date,
            description: self.description.clone(),
        })
    }
}
