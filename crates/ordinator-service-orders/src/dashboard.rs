use serde::Deserialize;
use serde::Serialize;

use crate::registry::ServiceOrderRegistry;
use crate::risk::Severity;
use crate::service_order::ServiceOrder;
use crate::style::StyleToken;

pub const DEFAULT_RECENT_ORDERS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalAlert
{
    pub equipment: String,
    pub issue: String,
    pub severity: Severity,
    pub time_ago: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetric
{
    pub title: String,
    pub value: String,
    pub change: String,
    pub style_token: StyleToken,
}

/// Landing page of the dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary
{
    pub active_service_orders: usize,
    pub recent_service_orders: Vec<ServiceOrder>,
    pub metrics: Vec<DashboardMetric>,
    pub critical_alerts: Vec<CriticalAlert>,
}

impl DashboardSummary
{
    /// `recent` newest orders are listed, fewer if the registry is smaller.
    pub fn new(
        registry: &ServiceOrderRegistry,
        metrics: Vec<DashboardMetric>,
        critical_alerts: Vec<CriticalAlert>,
        recent: usize,
    ) -> Self
    {
        DashboardSummary {
            active_service_orders: registry.len(),
            recent_service_orders: registry
                .service_orders()
                .iter()
                .take(recent)
                .cloned()
                .collect(),
            metrics,
            critical_alerts,
        }
    }
}
