//! Reference data the dashboard starts from.
use chrono::NaiveDate;

use crate::dashboard::CriticalAlert;
use crate::dashboard::DashboardMetric;
use crate::equipment::EquipmentAsset;
use crate::equipment::EquipmentStatus;
use crate::risk::RiskAssessment;
use crate::risk::RiskMetric;
use crate::risk::Severity;
use crate::service_order::ServiceOrder;
use crate::service_order::ServiceOrderId;
use crate::service_order::order_status::OrderStatus;
use crate::service_order::priority::Priority;
use crate::service_order::work_type::WorkType;
use crate::style::StyleToken;

fn date(year: i32, month: u32, day: u32) -> NaiveDate
{
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn service_order(
    sequence: u32,
    title: &str,
    equipment: &str,
    work_type: WorkType,
    priority: Priority,
    status: OrderStatus,
    assignee: &str,
    created: NaiveDate,
    due_date: NaiveDate,
    description: &str,
) -> ServiceOrder
{
    ServiceOrder {
        id: ServiceOrderId::new(2024, sequence),
        title: title.to_string(),
        equipment: equipment.to_string(),
        work_type,
        priority,
        status,
        assignee: assignee.to_string(),
        created,
        due_date,
        description: description.to_string(),
    }
}

/// Seeded service orders, newest first.
pub fn service_orders() -> Vec<ServiceOrder>
{
    vec![
        service_order(
            5,
            "Revisão Geral do Sistema de Bombeamento",
            "Sistema de Bombeamento 3",
            WorkType::Mechanical,
            Priority::Critical,
            OrderStatus::Planning,
            "David Costa",
            date(2024, 1, 17),
            date(2024, 1, 22),
            "Desmontagem completa da bomba, inspeção e reconstrução",
        ),
        service_order(
            4,
            "Calibração de Acionamento de Motor",
            "Unidade de Acionamento 5",
            WorkType::Electrical,
            Priority::High,
            OrderStatus::Assigned,
            "Lisa Chen",
            date(2024, 1, 17),
            date(2024, 1, 19),
            "Recalibrar parâmetros de controle do motor e testar sistemas de segurança",
        ),
        service_order(
            3,
            "Verificação do Sistema HVAC",
            "Unidade HVAC C1",
            WorkType::Mechanical,
            Priority::High,
            OrderStatus::Completed,
            "Miguel Oliveira",
            date(2024, 1, 14),
            date(2024, 1, 17),
            "Diagnóstico completo do sistema e substituição de filtros",
        ),
        service_order(
            2,
            "Reparo de Esteira Transportadora",
            "Esteira Transportadora B2",
            WorkType::Mechanical,
            Priority::Medium,
            OrderStatus::Pending,
            "Sara Santos",
            date(2024, 1, 16),
            date(2024, 1, 20),
            "Substituir componentes desgastados da esteira e lubrificar rolamentos",
        ),
        service_order(
            1,
            "Manutenção de Painel Elétrico",
            "Painel Elétrico A3",
            WorkType::Electrical,
            Priority::Critical,
            OrderStatus::InProgress,
            "João Silva",
            date(2024, 1, 15),
            date(2024, 1, 18),
            "Manutenção de rotina e inspeção de segurança do painel elétrico principal",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn asset(
    id: &str,
    name: &str,
    work_type: WorkType,
    status: EquipmentStatus,
    location: &str,
    last_maintenance: NaiveDate,
    next_maintenance: NaiveDate,
    health_score: u8,
    manufacturer: &str,
    model: &str,
    year_installed: u16,
) -> EquipmentAsset
{
    EquipmentAsset {
        id: id.to_string(),
        name: name.to_string(),
        work_type,
        status,
        location: location.to_string(),
        last_maintenance,
        next_maintenance,
        health_score,
        manufacturer: manufacturer.to_string(),
        model: model.to_string(),
        year_installed,
    }
}

pub fn equipment() -> Vec<EquipmentAsset>
{
    vec![
        asset(
            "EQ-001",
            "Electrical Panel A3",
            WorkType::Electrical,
            EquipmentStatus::Operational,
            "Building A - Floor 3",
            date(2024, 1, 10),
            date(2024, 4, 10),
            85,
            "Schneider Electric",
            "Prisma Plus P",
            2019,
        ),
        asset(
            "EQ-002",
            "Conveyor Belt B2",
            WorkType::Mechanical,
            EquipmentStatus::Warning,
            "Production Line B",
            date(2024, 1, 5),
            date(2024, 1, 20),
            65,
            "Siemens",
            "SIMATIC Belt System",
            2020,
        ),
        asset(
            "EQ-003",
            "HVAC Unit C1",
            WorkType::Mechanical,
            EquipmentStatus::Operational,
            "Building C - Roof",
            date(2024, 1, 14),
            date(2024, 3, 14),
            92,
            "Carrier",
            "AquaEdge 19XR",
            2018,
        ),
        asset(
            "EQ-004",
            "Motor Drive Unit 5",
            WorkType::Electrical,
            EquipmentStatus::Critical,
            "Machine Shop",
            date(2023, 12, 20),
            date(2024, 1, 18),
            35,
            "ABB",
            "ACS880",
            2017,
        ),
        asset(
            "EQ-005",
            "Pump System 3",
            WorkType::Mechanical,
            EquipmentStatus::Maintenance,
            "Utility Room",
            date(2024, 1, 12),
            date(2024, 2, 12),
            58,
            "Grundfos",
            "CR Series",
            2021,
        ),
        asset(
            "EQ-006",
            "Transformer T2",
            WorkType::Electrical,
            EquipmentStatus::Operational,
            "Substation 2",
            date(2023, 11, 15),
            date(2024, 2, 15),
            78,
            "GE",
            "Prolec GE",
            2016,
        ),
    ]
}

pub fn risk_metrics() -> Vec<RiskMetric>
{
    [
        ("Nível Geral de Risco", "Médio", 65),
        ("Riscos Elétricos", "Alto", 78),
        ("Riscos Mecânicos", "Baixo", 32),
        ("Precisão Preditiva", "94%", 94),
    ]
    .into_iter()
    .map(|(title, value, score)| RiskMetric {
        title: title.to_string(),
        value: value.to_string(),
        score,
    })
    .collect()
}

#[allow(clippy::too_many_arguments)]
fn risk(
    equipment: &str,
    risk: &str,
    work_type: WorkType,
    severity: Severity,
    probability: u8,
    impact: Severity,
    prediction: &str,
    factors: [&str; 3],
) -> RiskAssessment
{
    RiskAssessment {
        equipment: equipment.to_string(),
        risk: risk.to_string(),
        work_type,
        severity,
        probability,
        impact,
        prediction: prediction.to_string(),
        factors: factors.iter().map(|factor| factor.to_string()).collect(),
    }
}

pub fn risk_assessments() -> Vec<RiskAssessment>
{
    vec![
        risk(
            "Painel Elétrico A3",
            "Detecção de Superaquecimento",
            WorkType::Electrical,
            Severity::Critical,
            85,
            Severity::High,
            "48 horas",
            [
                "Temperatura em tendência de alta",
                "Carga acima do normal",
                "Idade dos componentes",
            ],
        ),
        risk(
            "Unidade de Acionamento 5",
            "Instabilidade de Voltagem",
            WorkType::Electrical,
            Severity::High,
            72,
            Severity::Medium,
            "3-5 dias",
            [
                "Flutuações de energia",
                "Instabilidade da rede",
                "Desgaste de componentes",
            ],
        ),
        risk(
            "Transformador T2",
            "Degradação do Isolamento",
            WorkType::Electrical,
            Severity::Medium,
            45,
            Severity::High,
            "2-3 semanas",
            ["Níveis de umidade", "Ciclos de temperatura", "Idade"],
        ),
        risk(
            "Esteira Transportadora B2",
            "Desgaste da Correia",
            WorkType::Mechanical,
            Severity::Medium,
            68,
            Severity::Medium,
            "1-2 semanas",
            [
                "Horas de uso",
                "Padrões de carga",
                "Histórico de manutenção",
            ],
        ),
        risk(
            "Sistema de Bombeamento 3",
            "Falha no Rolamento",
            WorkType::Mechanical,
            Severity::Low,
            25,
            Severity::Low,
            "4-6 semanas",
            [
                "Níveis de vibração",
                "Temperatura",
                "Programação de lubrificação",
            ],
        ),
        risk(
            "Compressor C1",
            "Queda de Pressão",
            WorkType::Mechanical,
            Severity::Medium,
            55,
            Severity::Medium,
            "10-14 dias",
            [
                "Condição do filtro",
                "Integridade do selo",
                "Pressão de operação",
            ],
        ),
    ]
}

pub fn critical_alerts() -> Vec<CriticalAlert>
{
    [
        (
            "Unidade de Acionamento 5",
            "Limite de temperatura excedido",
            Severity::Critical,
            "há 15 min",
        ),
        (
            "Painel Elétrico B7",
            "Irregularidade de voltagem detectada",
            Severity::High,
            "há 1 hora",
        ),
        (
            "Sistema de Bombeamento 3",
            "Queda de pressão detectada",
            Severity::Medium,
            "há 2 horas",
        ),
    ]
    .into_iter()
    .map(|(equipment, issue, severity, time_ago)| CriticalAlert {
        equipment: equipment.to_string(),
        issue: issue.to_string(),
        severity,
        time_ago: time_ago.to_string(),
    })
    .collect()
}

pub fn dashboard_metrics() -> Vec<DashboardMetric>
{
    [
        (
            "Equipamentos Operacionais",
            "156/162",
            "96.3%",
            StyleToken::Operational,
        ),
        ("Alertas Críticos", "3", "-2", StyleToken::Critical),
        ("Eficiência de Manutenção", "94%", "+5%", StyleToken::Accent),
    ]
    .into_iter()
    .map(|(title, value, change, style_token)| DashboardMetric {
        title: title.to_string(),
        value: value.to_string(),
        change: change.to_string(),
        style_token,
    })
    .collect()
}
