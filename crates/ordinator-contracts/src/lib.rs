//! Messages of the dashboard. A view builds a [`DashboardRequest`], the
//! session that owns the registry answers with a [`DashboardResponse`].
pub mod equipment;
pub mod service_orders;

use ordinator_service_orders::dashboard::DashboardSummary;
use ordinator_service_orders::risk::RiskAnalysis;
use serde::Deserialize;
use serde::Serialize;

use self::equipment::EquipmentRequest;
use self::equipment::EquipmentResponse;
use self::service_orders::ServiceOrderRequest;
use self::service_orders::ServiceOrderResponse;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "message_type")]
pub enum DashboardRequest
{
    ServiceOrders(ServiceOrderRequest),
    Equipment(EquipmentRequest),
    RiskAnalysis,
    Summary,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "message_type")]
#[allow(clippy::large_enum_variant)]
pub enum DashboardResponse
{
    ServiceOrders(ServiceOrderResponse),
    Equipment(EquipmentResponse),
    RiskAnalysis(RiskAnalysis),
    Summary(DashboardSummary),
}
