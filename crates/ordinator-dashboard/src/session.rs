use chrono::NaiveDate;
use ordinator_contracts::DashboardRequest;
use ordinator_contracts::DashboardResponse;
use ordinator_contracts::equipment::EquipmentRequest;
use ordinator_contracts::equipment::EquipmentResponse;
use ordinator_contracts::service_orders::ServiceOrderListing;
use ordinator_contracts::service_orders::ServiceOrderRequest;
use ordinator_contracts::service_orders::ServiceOrderResponse;
use ordinator_service_orders::Locale;
use ordinator_service_orders::OrderFilter;
use ordinator_service_orders::ServiceOrderError;
use ordinator_service_orders::ServiceOrderRegistry;
use ordinator_service_orders::dashboard::CriticalAlert;
use ordinator_service_orders::dashboard::DEFAULT_RECENT_ORDERS;
use ordinator_service_orders::dashboard::DashboardMetric;
use ordinator_service_orders::dashboard::DashboardSummary;
use ordinator_service_orders::equipment::EquipmentAsset;
use ordinator_service_orders::equipment::EquipmentFilter;
use ordinator_service_orders::equipment::EquipmentStatusCounts;
use ordinator_service_orders::equipment::filter_equipment;
use ordinator_service_orders::risk::RiskAnalysis;
use ordinator_service_orders::seed;
use tracing::Level;
use tracing::event;
use tracing::instrument;

/// State of one user of the dashboard: the registry and the listing state
/// of every view. Requests are handled one at a time through `&mut self`.
#[derive(Debug, Clone)]
pub struct DashboardSession
{
    locale: Locale,
    recent_orders: usize,
    service_order_registry: ServiceOrderRegistry,
    order_filter: OrderFilter,
    equipment: Vec<EquipmentAsset>,
    equipment_filter: EquipmentFilter,
    risk_analysis: RiskAnalysis,
    dashboard_metrics: Vec<DashboardMetric>,
    critical_alerts: Vec<CriticalAlert>,
}

impl DashboardSession
{
    pub fn new(
        locale: Locale,
        recent_orders: usize,
        service_order_registry: ServiceOrderRegistry,
        equipment: Vec<EquipmentAsset>,
        risk_analysis: RiskAnalysis,
    ) -> Self
    {
        Self {
            locale,
            recent_orders,
            service_order_registry,
            order_filter: OrderFilter::default(),
            equipment,
            equipment_filter: EquipmentFilter::default(),
            risk_analysis,
            dashboard_metrics: seed::dashboard_metrics(),
            critical_alerts: seed::critical_alerts(),
        }
    }

    pub fn seeded(locale: Locale, recent_orders: usize) -> Self
    {
        Self::new(
            locale,
            recent_orders,
            ServiceOrderRegistry::seeded(),
            seed::equipment(),
            RiskAnalysis::seeded(),
        )
    }

    pub fn locale(&self) -> Locale
    {
        self.locale
    }

    pub fn service_order_registry(&self) -> &ServiceOrderRegistry
    {
        &self.service_order_registry
    }

    pub fn order_filter(&self) -> &OrderFilter
    {
        &self.order_filter
    }

    /// A rejected draft is a regular response. `Err` is reserved for a
    /// registry that cannot take another order, see
    /// [`ServiceOrderError::SequenceExhausted`].
    #[instrument(level = "debug", skip(self))]
    pub fn handle(
        &mut self,
        dashboard_request: DashboardRequest,
        today: NaiveDate,
    ) -> Result<DashboardResponse, ServiceOrderError>
    {
        let dashboard_response = match dashboard_request {
            DashboardRequest::ServiceOrders(service_order_request) => {
                DashboardResponse::ServiceOrders(
                    self.handle_service_order_request(service_order_request, today)?,
                )
            }
            DashboardRequest::Equipment(equipment_request) => {
                DashboardResponse::Equipment(self.handle_equipment_request(equipment_request))
            }
            DashboardRequest::RiskAnalysis => {
                DashboardResponse::RiskAnalysis(self.risk_analysis.clone())
            }
            DashboardRequest::Summary => DashboardResponse::Summary(DashboardSummary::new(
                &self.service_order_registry,
                self.dashboard_metrics.clone(),
                self.critical_alerts.clone(),
                self.recent_orders,
            )),
        };
        Ok(dashboard_response)
    }

    fn handle_service_order_request(
        &mut self,
        service_order_request: ServiceOrderRequest,
        today: NaiveDate,
    ) -> Result<ServiceOrderResponse, ServiceOrderError>
    {
        match service_order_request {
            ServiceOrderRequest::List => (),
            ServiceOrderRequest::SetSearchTerm(search_term) => {
                self.order_filter.search_term = search_term
            }
            ServiceOrderRequest::SetTab(tab) => self.order_filter.tab = tab,
            ServiceOrderRequest::ToggleStatus(status) => self.order_filter.toggle_status(status),
            ServiceOrderRequest::TogglePriority(priority) => {
                self.order_filter.toggle_priority(priority)
            }
            ServiceOrderRequest::ToggleWorkType(work_type) => {
                self.order_filter.toggle_work_type(work_type)
            }
            ServiceOrderRequest::ClearFilters => self.order_filter.clear_filters(),
            ServiceOrderRequest::Create(service_order_draft) => {
                return match self.service_order_registry.submit(
                    &service_order_draft,
                    today,
                    self.locale,
                ) {
                    Ok(creation_notice) => Ok(ServiceOrderResponse::Created(creation_notice)),
                    Err(ServiceOrderError::Validation(field_errors)) => {
                        Ok(ServiceOrderResponse::ValidationFailed(field_errors))
                    }
                    Err(error) => Err(error),
                };
            }
        }

        event!(
            Level::DEBUG,
            active_filter_count = self.order_filter.active_filter_count(),
            "service order listing state updated"
        );
        Ok(ServiceOrderResponse::Listing(self.service_order_listing()))
    }

    fn service_order_listing(&self) -> ServiceOrderListing
    {
        ServiceOrderListing {
            filter: self.order_filter.clone(),
            active_filter_count: self.order_filter.active_filter_count(),
            tab_counts: self.service_order_registry.tab_counts(),
            service_orders: self
                .service_order_registry
                .view(&self.order_filter)
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    fn handle_equipment_request(&mut self, equipment_request: EquipmentRequest)
    -> EquipmentResponse
    {
        match equipment_request {
            EquipmentRequest::List => (),
            EquipmentRequest::SetSearchTerm(search_term) => {
                self.equipment_filter.search_term = search_term
            }
            EquipmentRequest::SetTab(tab) => self.equipment_filter.tab = tab,
        }

        EquipmentResponse {
            filter: self.equipment_filter.clone(),
            assets: filter_equipment(&self.equipment, &self.equipment_filter)
                .into_iter()
                .cloned()
                .collect(),
            status_counts: EquipmentStatusCounts::from_assets(&self.equipment),
        }
    }
}

impl Default for DashboardSession
{
    fn default() -> Self
    {
        Self::seeded(Locale::default(), DEFAULT_RECENT_ORDERS)
    }
}
