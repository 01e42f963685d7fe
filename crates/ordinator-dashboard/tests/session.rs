use chrono::NaiveDate;
use ordinator_contracts::DashboardRequest;
use ordinator_contracts::DashboardResponse;
use ordinator_contracts::equipment::EquipmentRequest;
use ordinator_contracts::equipment::EquipmentResponse;
use ordinator_contracts::service_orders::ServiceOrderListing;
use ordinator_contracts::service_orders::ServiceOrderRequest;
use ordinator_contracts::service_orders::ServiceOrderResponse;
use ordinator_dashboard::DashboardSession;
use ordinator_service_orders::Locale;
use ordinator_service_orders::OrderStatus;
use ordinator_service_orders::Priority;
use ordinator_service_orders::ServiceOrder;
use ordinator_service_orders::ServiceOrderError;
use ordinator_service_orders::ServiceOrderId;
use ordinator_service_orders::ServiceOrderRegistry;
use ordinator_service_orders::ServiceOrderDraft;
use ordinator_service_orders::Tab;
use ordinator_service_orders::WorkType;
use ordinator_service_orders::equipment::EquipmentAsset;
use ordinator_service_orders::risk::RiskAnalysis;
use ordinator_service_orders::service_order::draft::DraftField;
use proptest::prelude::*;

fn today() -> NaiveDate
{
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

fn service_orders(
    dashboard_session: &mut DashboardSession,
    service_order_request: ServiceOrderRequest,
) -> ServiceOrderResponse
{
    match dashboard_session
        .handle(DashboardRequest::ServiceOrders(service_order_request), today())
        .unwrap()
    {
        DashboardResponse::ServiceOrders(service_order_response) => service_order_response,
        other => panic!("expected a service order response, got {other:?}"),
    }
}

fn listing(
    dashboard_session: &mut DashboardSession,
    service_order_request: ServiceOrderRequest,
) -> ServiceOrderListing
{
    match service_orders(dashboard_session, service_order_request) {
        ServiceOrderResponse::Listing(listing) => listing,
        other => panic!("expected a listing, got {other:?}"),
    }
}

fn ids(listing: &ServiceOrderListing) -> Vec<String>
{
    listing
        .service_orders
        .iter()
        .map(|service_order| service_order.id.to_string())
        .collect()
}

fn test_pump_draft() -> ServiceOrderDraft
{
    ServiceOrderDraft {
        title: "Inspeção da bomba de teste".to_string(),
        equipment: "Test Pump".to_string(),
        work_type: "Mecânico".to_string(),
        priority: "Alto".to_string(),
        assignee: "Ana Souza".to_string(),
        due_date: NaiveDate::from_ymd_opt(2026, 10, 25),
        description: "Verificar vibração e vazamentos na bomba".to_string(),
        ..ServiceOrderDraft::default()
    }
}

#[test]
fn test_unfiltered_listing_is_sorted_by_priority_rank()
{
    let mut dashboard_session = DashboardSession::default();

    let listing = listing(&mut dashboard_session, ServiceOrderRequest::List);

    assert_eq!(
        ids(&listing),
        vec![
            "OS-2024-005",
            "OS-2024-001",
            "OS-2024-004",
            "OS-2024-003",
            "OS-2024-002"
        ]
    );
    assert_eq!(listing.active_filter_count, 0);
    assert_eq!(listing.tab_counts.all, 5);
}

#[test]
fn test_search_finds_assignee_silva()
{
    let mut dashboard_session = DashboardSession::default();

    let listing = listing(
        &mut dashboard_session,
        ServiceOrderRequest::SetSearchTerm("silva".to_string()),
    );

    assert_eq!(ids(&listing), vec!["OS-2024-001"]);
    assert_eq!(listing.service_orders[0].assignee, "João Silva");
}

#[test]
fn test_filter_state_accumulates_across_requests()
{
    let mut dashboard_session = DashboardSession::default();

    listing(&mut dashboard_session, ServiceOrderRequest::SetTab(Tab::Mechanical));
    listing(
        &mut dashboard_session,
        ServiceOrderRequest::TogglePriority(Priority::High),
    );
    let filtered = listing(
        &mut dashboard_session,
        ServiceOrderRequest::TogglePriority(Priority::Critical),
    );

    assert_eq!(ids(&filtered), vec!["OS-2024-005", "OS-2024-003"]);
    assert_eq!(filtered.active_filter_count, 2);

    let cleared = listing(&mut dashboard_session, ServiceOrderRequest::ClearFilters);

    assert_eq!(cleared.active_filter_count, 0);
    assert_eq!(cleared.filter.tab, Tab::Mechanical);
    assert_eq!(
        ids(&cleared),
        vec!["OS-2024-005", "OS-2024-003", "OS-2024-002"]
    );
}

#[test]
fn test_toggling_a_status_twice_restores_the_listing()
{
    let mut dashboard_session = DashboardSession::default();
    let before = listing(&mut dashboard_session, ServiceOrderRequest::List);

    let selected = listing(
        &mut dashboard_session,
        ServiceOrderRequest::ToggleStatus(OrderStatus::Completed),
    );
    let restored = listing(
        &mut dashboard_session,
        ServiceOrderRequest::ToggleStatus(OrderStatus::Completed),
    );

    assert_eq!(ids(&selected), vec!["OS-2024-003"]);
    assert_eq!(ids(&restored), ids(&before));
    assert!(restored.filter.statuses.is_empty());
}

#[test]
fn test_create_test_pump_prepends_next_id()
{
    let mut dashboard_session = DashboardSession::default();

    let response = service_orders(
        &mut dashboard_session,
        ServiceOrderRequest::Create(test_pump_draft()),
    );

    let ServiceOrderResponse::Created(creation_notice) = response else {
        panic!("expected the order to be created, got {response:?}");
    };
    assert_eq!(creation_notice.id.to_string(), "OS-2026-006");
    assert_eq!(creation_notice.title, "Ordem criada com sucesso!");

    let service_order_registry = dashboard_session.service_order_registry();
    assert_eq!(service_order_registry.len(), 6);
    let newest = &service_order_registry.service_orders()[0];
    assert_eq!(newest.equipment, "Test Pump");
    assert_eq!(newest.created, today());
    assert_eq!(newest.status, OrderStatus::Pending);
    assert_eq!(newest.work_type, WorkType::Mechanical);

    let after = listing(&mut dashboard_session, ServiceOrderRequest::List);
    assert_eq!(after.tab_counts.mechanical, 4);
    assert_eq!(after.service_orders.len(), 6);
}

#[test]
fn test_invalid_draft_reports_fields_in_session_locale()
{
    let mut dashboard_session = DashboardSession::seeded(Locale::En, 3);
    let service_order_draft = ServiceOrderDraft {
        title: "Pump".to_string(),
        assignee: "Al".to_string(),
        due_date: None,
        ..test_pump_draft()
    };

    let response = service_orders(
        &mut dashboard_session,
        ServiceOrderRequest::Create(service_order_draft),
    );

    let ServiceOrderResponse::ValidationFailed(field_errors) = response else {
        panic!("expected field errors, got {response:?}");
    };
    let fields: Vec<DraftField> = field_errors.fields().collect();
    assert_eq!(
        fields,
        vec![DraftField::Title, DraftField::Assignee, DraftField::DueDate]
    );
    assert_eq!(dashboard_session.service_order_registry().len(), 5);
}

#[test]
fn test_exhausted_registry_is_reported_as_error()
{
    let newest = ServiceOrder {
        id: ServiceOrderId::new(2024, u32::MAX),
        title: "Ordem existente".to_string(),
        equipment: "Painel".to_string(),
        work_type: WorkType::Electrical,
        priority: Priority::Low,
        status: OrderStatus::Pending,
        assignee: "Lisa Chen".to_string(),
        created: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2024, 1, 18).unwrap(),
        description: "Ordem existente no registro".to_string(),
    };
    let mut dashboard_session = DashboardSession::new(
        Locale::PtBr,
        3,
        ServiceOrderRegistry::new(vec![newest]),
        Vec::<EquipmentAsset>::new(),
        RiskAnalysis::default(),
    );

    let result = dashboard_session.handle(
        DashboardRequest::ServiceOrders(ServiceOrderRequest::Create(test_pump_draft())),
        today(),
    );

    assert!(matches!(result, Err(ServiceOrderError::SequenceExhausted(_))));
    assert_eq!(dashboard_session.service_order_registry().len(), 1);
}

#[test]
fn test_equipment_search_and_tab()
{
    let mut dashboard_session = DashboardSession::default();

    let equipment = |dashboard_session: &mut DashboardSession, equipment_request| -> EquipmentResponse {
        match dashboard_session
            .handle(DashboardRequest::Equipment(equipment_request), today())
            .unwrap()
        {
            DashboardResponse::Equipment(equipment_response) => equipment_response,
            other => panic!("expected an equipment response, got {other:?}"),
        }
    };

    let by_manufacturer = equipment(
        &mut dashboard_session,
        EquipmentRequest::SetSearchTerm("abb".to_string()),
    );
    assert_eq!(by_manufacturer.assets.len(), 1);
    assert_eq!(by_manufacturer.assets[0].id, "EQ-004");
    assert_eq!(by_manufacturer.status_counts.operational, 3);

    equipment(&mut dashboard_session, EquipmentRequest::SetSearchTerm(String::new()));
    let mechanical = equipment(&mut dashboard_session, EquipmentRequest::SetTab(Tab::Mechanical));
    let asset_ids: Vec<&str> = mechanical.assets.iter().map(|asset| asset.id.as_str()).collect();
    assert_eq!(asset_ids, vec!["EQ-002", "EQ-003", "EQ-005"]);
}

#[test]
fn test_summary_reflects_new_orders()
{
    let mut dashboard_session = DashboardSession::seeded(Locale::PtBr, 2);
    service_orders(
        &mut dashboard_session,
        ServiceOrderRequest::Create(test_pump_draft()),
    );

    let DashboardResponse::Summary(dashboard_summary) = dashboard_session
        .handle(DashboardRequest::Summary, today())
        .unwrap()
    else {
        panic!("expected a summary");
    };

    assert_eq!(dashboard_summary.active_service_orders, 6);
    assert_eq!(dashboard_summary.recent_service_orders.len(), 2);
    assert_eq!(
        dashboard_summary.recent_service_orders[0].equipment,
        "Test Pump"
    );
}

fn order_status_strategy() -> impl Strategy<Value = OrderStatus>
{
    prop_oneof![
        Just(OrderStatus::Pending),
        Just(OrderStatus::Assigned),
        Just(OrderStatus::InProgress),
        Just(OrderStatus::Completed),
        Just(OrderStatus::Planning),
    ]
}

proptest! {
    #[test]
    fn test_active_filter_count_matches_selected_statuses(toggles in prop::collection::vec(order_status_strategy(), 0..12)) {
        let mut dashboard_session = DashboardSession::default();
        let mut last_listing = None;
        for status in &toggles {
            last_listing = Some(listing(&mut dashboard_session, ServiceOrderRequest::ToggleStatus(*status)));
        }

        let selected = dashboard_session.order_filter().statuses.clone();
        prop_assert_eq!(dashboard_session.order_filter().active_filter_count(), selected.len());
        if let Some(last_listing) = last_listing {
            prop_assert_eq!(last_listing.active_filter_count, selected.len());
            prop_assert!(last_listing
                .service_orders
                .iter()
                .all(|service_order| selected.is_empty() || selected.contains(&service_order.status)));
        }
    }
}
