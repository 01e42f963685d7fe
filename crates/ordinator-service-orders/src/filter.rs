use std::collections::BTreeSet;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;
use tracing::instrument;

use crate::labels::Labelled;
use crate::labels::Locale;
use crate::service_order::ServiceOrder;
use crate::service_order::order_status::OrderStatus;
use crate::service_order::priority::Priority;
use crate::service_order::work_type::WorkType;

/// Coarse category of a listing, independent of the multi-select type set.
#[derive(
    Default, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tab
{
    #[default]
    All,
    Electrical,
    Mechanical,
}

impl Tab
{
    pub fn matches(&self, work_type: WorkType) -> bool
    {
        match self {
            Tab::All => true,
            Tab::Electrical => work_type == WorkType::Electrical,
            Tab::Mechanical => work_type == WorkType::Mechanical,
        }
    }
}

impl Labelled for Tab
{
    fn label(&self, locale: Locale) -> &'static str
    {
        match (self, locale) {
            (Tab::All, Locale::PtBr) => "Todas",
            (Tab::All, Locale::En) => "All",
            (Tab::Electrical, Locale::PtBr) => "Elétrico",
            (Tab::Electrical, Locale::En) => "Electrical",
            (Tab::Mechanical, Locale::PtBr) => "Mecânico",
            (Tab::Mechanical, Locale::En) => "Mechanical",
        }
    }
}

/// Case insensitive substring match of `term` against any of `fields`. An
/// empty term matches everything.
pub fn matches_search_term(term: &str, fields: &[&str]) -> bool
{
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}

/// Listing state of the service order view. An empty selection set leaves
/// its dimension unconstrained.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFilter
{
    pub search_term: String,
    pub tab: Tab,
    pub statuses: BTreeSet<OrderStatus>,
    pub priorities: BTreeSet<Priority>,
    pub work_types: BTreeSet<WorkType>,
}

impl OrderFilter
{
    pub fn matches(&self, service_order: &ServiceOrder) -> bool
    {
        let matches_search = matches_search_term(
            &self.search_term,
            &[
                service_order.title.as_str(),
                service_order.equipment.as_str(),
                service_order.assignee.as_str(),
            ],
        );
        let matches_tab = self.tab.matches(service_order.work_type);
        let matches_status = selected(&self.statuses, &service_order.status);
        let matches_priority = selected(&self.priorities, &service_order.priority);
        let matches_type = selected(&self.work_types, &service_order.work_type);

        matches_search && matches_tab && matches_status && matches_priority && matches_type
    }

    pub fn active_filter_count(&self) -> usize
    {
        self.statuses.len() + self.priorities.len() + self.work_types.len()
    }

    /// Empties the three selection sets. The search term and the tab stay.
    pub fn clear_filters(&mut self)
    {
        self.statuses.clear();
        self.priorities.clear();
        self.work_types.clear();
    }

    pub fn toggle_status(&mut self, status: OrderStatus)
    {
        toggle(&mut self.statuses, status);
    }

    pub fn toggle_priority(&mut self, priority: Priority)
    {
        toggle(&mut self.priorities, priority);
    }

    pub fn toggle_work_type(&mut self, work_type: WorkType)
    {
        toggle(&mut self.work_types, work_type);
    }
}

fn selected<T: Ord>(selection: &BTreeSet<T>, value: &T) -> bool
{
    selection.is_empty() || selection.contains(value)
}

fn toggle<T: Ord>(selection: &mut BTreeSet<T>, value: T)
{
    if !selection.remove(&value) {
        selection.insert(value);
    }
}

/// Stable sort on the priority rank, equal ranks keep their relative order.
pub fn sort_by_priority_rank(service_orders: &mut [&ServiceOrder])
{
    service_orders.sort_by_key(|service_order| service_order.priority.rank());
}

/// The service orders matching `filter`, most urgent first.
#[instrument(level = "debug", skip_all, fields(registry_len = service_orders.len()))]
pub fn filter_orders<'a>(
    service_orders: &'a [ServiceOrder],
    filter: &OrderFilter,
) -> Vec<&'a ServiceOrder>
{
    let mut matching: Vec<&ServiceOrder> = service_orders
        .iter()
        .filter(|service_order| filter.matches(service_order))
        .collect();

    sort_by_priority_rank(&mut matching);

    tracing::debug!(
        matching = matching.len(),
        active_filters = filter.active_filter_count(),
        "filtered service orders"
    );
    matching
}

/// Number of service orders shown on each tab header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabCounts
{
    pub all: usize,
    pub electrical: usize,
    pub mechanical: usize,
}

impl TabCounts
{
    pub fn from_orders(service_orders: &[ServiceOrder]) -> Self
    {
        let count = |tab: Tab| {
            service_orders
                .iter()
                .filter(|service_order| tab.matches(service_order.work_type))
                .count()
        };

        TabCounts {
            all: service_orders.len(),
            electrical: count(Tab::Electrical),
            mechanical: count(Tab::Mechanical),
        }
    }
}
