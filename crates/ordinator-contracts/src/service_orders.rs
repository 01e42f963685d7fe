use ordinator_service_orders::CreationNotice;
use ordinator_service_orders::FieldErrors;
use ordinator_service_orders::OrderFilter;
use ordinator_service_orders::OrderStatus;
use ordinator_service_orders::Priority;
use ordinator_service_orders::ServiceOrder;
use ordinator_service_orders::ServiceOrderDraft;
use ordinator_service_orders::Tab;
use ordinator_service_orders::WorkType;
use ordinator_service_orders::filter::TabCounts;
use serde::Deserialize;
use serde::Serialize;

/// Everything the service order view can ask of the registry. All requests
/// but `Create` only touch the listing state.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "service_order_message_type", content = "value")]
pub enum ServiceOrderRequest
{
    List,
    SetSearchTerm(String),
    SetTab(Tab),
    ToggleStatus(OrderStatus),
    TogglePriority(Priority),
    ToggleWorkType(WorkType),
    ClearFilters,
    Create(ServiceOrderDraft),
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "service_order_message_type", content = "value")]
pub enum ServiceOrderResponse
{
    Listing(ServiceOrderListing),
    Created(CreationNotice),
    ValidationFailed(FieldErrors),
}

/// The filtered and sorted view together with the state it was derived
/// from.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderListing
{
    pub filter: OrderFilter,
    pub active_filter_count: usize,
    pub tab_counts: TabCounts,
    pub service_orders: Vec<ServiceOrder>,
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::DashboardRequest;

    #[test]
    fn test_request_json_shape()
    {
        let request =
            DashboardRequest::ServiceOrders(ServiceOrderRequest::ToggleStatus(OrderStatus::InProgress));

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["message_type"], "ServiceOrders");
        assert_eq!(json["service_order_message_type"], "ToggleStatus");
        assert_eq!(json["value"], "in-progress");

        let parsed: DashboardRequest = serde_json::from_value(json).unwrap();
        assert!(matches!(
            parsed,
            DashboardRequest::ServiceOrders(ServiceOrderRequest::ToggleStatus(
                OrderStatus::InProgress
            ))
        ));
    }
}
