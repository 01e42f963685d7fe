pub mod draft;
pub mod order_status;
pub mod priority;
pub mod work_type;

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;

use self::draft::ValidatedServiceOrder;
use self::order_status::OrderStatus;
use self::priority::Priority;
use self::work_type::WorkType;
use crate::error::ServiceOrderError;

const SERVICE_ORDER_PREFIX: &str = "OS";

/// Identifier of a service order, written `OS-<year>-<sequence>` with the
/// sequence zero padded to three digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ServiceOrderId
{
    year: i32,
    sequence: u32,
}

impl ServiceOrderId
{
    pub fn new(year: i32, sequence: u32) -> Self
    {
        Self { year, sequence }
    }

    pub fn year(&self) -> i32
    {
        self.year
    }

    pub fn sequence(&self) -> u32
    {
        self.sequence
    }
}

impl fmt::Display for ServiceOrderId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "{}-{}-{:03}",
            SERVICE_ORDER_PREFIX, self.year, self.sequence
        )
    }
}

impl FromStr for ServiceOrderId
{
    type Err = ServiceOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        let malformed = || ServiceOrderError::MalformedIdentifier(s.to_string());

        let mut parts = s.split('-');
        let (Some(prefix), Some(year), Some(sequence), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        if prefix != SERVICE_ORDER_PREFIX {
            return Err(malformed());
        }

        let year = year.parse::<i32>().map_err(|_| malformed())?;
        let sequence = sequence.parse::<u32>().map_err(|_| malformed())?;
        let service_order_id = Self { year, sequence };

        // Signs and extra zero padding would otherwise be rewritten silently.
        if service_order_id.to_string() != s {
            return Err(malformed());
        }

        Ok(service_order_id)
    }
}

impl TryFrom<String> for ServiceOrderId
{
    type Error = ServiceOrderError;

    fn try_from(value: String) -> Result<Self, Self::Error>
    {
        value.parse()
    }
}

impl From<ServiceOrderId> for String
{
    fn from(value: ServiceOrderId) -> Self
    {
        value.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrder
{
    pub id: ServiceOrderId,
    pub title: String,
    pub equipment: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub priority: Priority,
    pub status: OrderStatus,
    pub assignee: String,
    pub created: NaiveDate,
    pub due_date: NaiveDate,
    pub description: String,
}

impl ServiceOrder
{
    /// Every field except `id` and `created` is copied verbatim from the
    /// validated values.
    pub fn from_validated(
        id: ServiceOrderId,
        created: NaiveDate,
        validated: ValidatedServiceOrder,
    ) -> Self
    {
        ServiceOrder {
            id,
            title: validated.title,
            equipment: validated.equipment,
            work_type: validated.work_type,
            priority: validated.priority,
            status: validated.status,
            assignee: validated.assignee,
            created,
            due_date: validated.due_date,
            description: validated.description,
        }
    }
}

impl fmt::Display for ServiceOrder
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(
            f,
            "{} [{} | {} | {}] {} ({}) -> {}",
            self.id,
            self.priority,
            self.status,
            self.work_type,
            self.title,
            self.equipment,
            self.assignee
        )
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_service_order_id_display_pads_sequence()
    {
        assert_eq!(ServiceOrderId::new(2024, 1).to_string(), "OS-2024-001");
        assert_eq!(ServiceOrderId::new(2026, 42).to_string(), "OS-2026-042");
        assert_eq!(ServiceOrderId::new(2026, 1000).to_string(), "OS-2026-1000");
    }

    #[test]
    fn test_service_order_id_parse()
    {
        let id: ServiceOrderId = "OS-2024-005".parse().unwrap();
        assert_eq!(id.year(), 2024);
        assert_eq!(id.sequence(), 5);

        let large: ServiceOrderId = "OS-2026-1000".parse().unwrap();
        assert_eq!(large.sequence(), 1000);
    }

    #[test]
    fn test_service_order_id_parse_rejects_malformed()
    {
        for malformed in [
            "",
            "OS-2024",
            "WO-2024-001",
            "OS-2024-abc",
            "OS-2024-001-1",
            "OS-2024-5",
            "OS-2024-05",
            "OS-2024-+5",
            "OS-2024-+005",
            "OS-+2024-005",
            "OS-+2024-0005",
            "OS-02024-005",
            "OS-2024-0005",
        ] {
            assert!(
                matches!(
                    malformed.parse::<ServiceOrderId>(),
                    Err(ServiceOrderError::MalformedIdentifier(_))
                ),
                "{malformed} should not parse"
            );
        }
    }

    #[test]
    fn test_service_order_id_serializes_as_string()
    {
        let id = ServiceOrderId::new(2024, 3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"OS-2024-003\"");
        let parsed: ServiceOrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
