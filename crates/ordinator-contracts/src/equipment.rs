use ordinator_service_orders::Tab;
use ordinator_service_orders::equipment::EquipmentAsset;
use ordinator_service_orders::equipment::EquipmentFilter;
use ordinator_service_orders::equipment::EquipmentStatusCounts;
use serde::Deserialize;
use serde::Serialize;

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "equipment_message_type", content = "value")]
pub enum EquipmentRequest
{
    List,
    SetSearchTerm(String),
    SetTab(Tab),
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentResponse
{
    pub filter: EquipmentFilter,
    pub assets: Vec<EquipmentAsset>,
    pub status_counts: EquipmentStatusCounts,
}
