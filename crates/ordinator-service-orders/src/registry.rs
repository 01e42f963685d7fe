use chrono::Datelike;
use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use tracing::Level;
use tracing::event;
use tracing::instrument;

use crate::error::ServiceOrderError;
use crate::filter::OrderFilter;
use crate::filter::TabCounts;
use crate::filter::filter_orders;
use crate::labels;
use crate::labels::Locale;
use crate::seed;
use crate::service_order::ServiceOrder;
use crate::service_order::ServiceOrderId;
use crate::service_order::draft::ServiceOrderDraft;
use crate::service_order::draft::ValidatedServiceOrder;

/// Append-only collection of service orders, newest first.
///
/// The identifier of a new order is derived from the order at index 0, so
/// orders must only enter through [`ServiceOrderRegistry::create`] once the
/// registry is built.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServiceOrderRegistry
{
    service_orders: Vec<ServiceOrder>,
}

/// Success signal of the creation workflow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationNotice
{
    pub id: ServiceOrderId,
    pub assignee: String,
    pub title: String,
    pub description: String,
}

impl ServiceOrderRegistry
{
    /// `service_orders` has to be ordered newest first.
    pub fn new(service_orders: Vec<ServiceOrder>) -> Self
    {
        Self { service_orders }
    }

    pub fn seeded() -> Self
    {
        Self::new(seed::service_orders())
    }

    pub fn service_orders(&self) -> &[ServiceOrder]
    {
        &self.service_orders
    }

    pub fn len(&self) -> usize
    {
        self.service_orders.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.service_orders.is_empty()
    }

    pub fn get(&self, id: &ServiceOrderId) -> Option<&ServiceOrder>
    {
        self.service_orders
            .iter()
            .find(|service_order| &service_order.id == id)
    }

    /// Sequence of the newest order plus one, in the year of `today`.
    pub fn next_id(&self, today: NaiveDate) -> Result<ServiceOrderId, ServiceOrderError>
    {
        let Some(newest) = self.service_orders.first() else {
            return Ok(ServiceOrderId::new(today.year(), 1));
        };

        let sequence = newest
            .id
            .sequence()
            .checked_add(1)
            .ok_or(ServiceOrderError::SequenceExhausted(newest.id))?;

        Ok(ServiceOrderId::new(today.year(), sequence))
    }

    /// Builds the new order from already validated values and makes it the
    /// newest entry of the registry. The registry is left untouched when no
    /// identifier can be generated.
    #[instrument(level = "info", skip_all, fields(equipment = %validated.equipment))]
    pub fn create(
        &mut self,
        validated: ValidatedServiceOrder,
        today: NaiveDate,
        locale: Locale,
    ) -> Result<CreationNotice, ServiceOrderError>
    {
        let id = self.next_id(today)?;
        let service_order = ServiceOrder::from_validated(id, today, validated);

        let notice = CreationNotice {
            id,
            assignee: service_order.assignee.clone(),
            title: labels::creation_notice_title(locale).to_string(),
            description: labels::creation_notice_description(
                locale,
                &id,
                &service_order.assignee,
            ),
        };

        self.service_orders.insert(0, service_order);

        event!(
            Level::INFO,
            service_order_id = %id,
            registry_len = self.service_orders.len(),
            "service order created"
        );
        Ok(notice)
    }

    /// Validation followed by creation. Nothing is created when a single
    /// field is invalid.
    pub fn submit(
        &mut self,
        draft: &ServiceOrderDraft,
        today: NaiveDate,
        locale: Locale,
    ) -> Result<CreationNotice, ServiceOrderError>
    {
        match draft.validate_for(locale) {
            Ok(validated) => self.create(validated, today, locale),
            Err(field_errors) => {
                event!(
                    Level::WARN,
                    invalid_fields = field_errors.len(),
                    "service order draft rejected"
                );
                Err(ServiceOrderError::Validation(field_errors))
            }
        }
    }

    pub fn view(&self, filter: &OrderFilter) -> Vec<&ServiceOrder>
    {
        filter_orders(&self.service_orders, filter)
    }

    pub fn tab_counts(&self) -> TabCounts
    {
        TabCounts::from_orders(&self.service_orders)
    }
}
