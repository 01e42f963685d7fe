use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::Deserialize;
use serde::Serialize;
use strum_macros::EnumIter;
use validator::Validate;
use validator::ValidationError;

use super::order_status::OrderStatus;
use super::priority::Priority;
use super::work_type::WorkType;
use crate::labels::Labelled;
use crate::labels::Locale;

const TITLE_MIN: usize = 5;
const TITLE_MAX: usize = 100;
const DESCRIPTION_MIN: usize = 10;
const DESCRIPTION_MAX: usize = 500;

/// Field values of a service order as they arrive from the creation form.
///
/// The enumerated fields are kept as text so that a missing or unknown
/// selection is reported like every other invalid field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOrderDraft
{
    #[validate(length(min = 5, max = 100, code = "title_length"))]
    pub title: String,
    #[validate(length(min = 3, code = "equipment_length"))]
    pub equipment: String,
    #[serde(rename = "type")]
    #[validate(custom(function = "validate_work_type"))]
    pub work_type: String,
    #[validate(custom(function = "validate_priority"))]
    pub priority: String,
    #[validate(custom(function = "validate_status"))]
    pub status: String,
    #[validate(length(min = 3, code = "assignee_length"))]
    pub assignee: String,
    #[validate(required(code = "due_date_required"))]
    pub due_date: Option<NaiveDate>,
    #[validate(length(min = 10, max = 500, code = "description_length"))]
    pub description: String,
}

impl Default for ServiceOrderDraft
{
    fn default() -> Self
    {
        Self {
            title: String::new(),
            equipment: String::new(),
            work_type: String::new(),
            priority: String::new(),
            status: OrderStatus::default().label(Locale::default()).to_string(),
            assignee: String::new(),
            due_date: None,
            description: String::new(),
        }
    }
}

/// A draft whose every field passed validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedServiceOrder
{
    pub title: String,
    pub equipment: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub priority: Priority,
    pub status: OrderStatus,
    pub assignee: String,
    pub due_date: NaiveDate,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum DraftField
{
    Title,
    Equipment,
    #[serde(rename = "type")]
    WorkType,
    Priority,
    Status,
    Assignee,
    DueDate,
    Description,
}

impl DraftField
{
    pub fn as_str(&self) -> &'static str
    {
        match self {
            DraftField::Title => "title",
            DraftField::Equipment => "equipment",
            DraftField::WorkType => "type",
            DraftField::Priority => "priority",
            DraftField::Status => "status",
            DraftField::Assignee => "assignee",
            DraftField::DueDate => "dueDate",
            DraftField::Description => "description",
        }
    }

    // `validator` reports either the struct field or its serde name.
    fn from_key(key: &str) -> Option<Self>
    {
        match key {
            "title" => Some(DraftField::Title),
            "equipment" => Some(DraftField::Equipment),
            "work_type" | "type" => Some(DraftField::WorkType),
            "priority" => Some(DraftField::Priority),
            "status" => Some(DraftField::Status),
            "assignee" => Some(DraftField::Assignee),
            "due_date" | "dueDate" => Some(DraftField::DueDate),
            "description" => Some(DraftField::Description),
            _ => None,
        }
    }
}

impl fmt::Display for DraftField
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.as_str())
    }
}

/// Every broken rule of a draft, keyed by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<DraftField, Vec<String>>);

impl FieldErrors
{
    pub fn is_empty(&self) -> bool
    {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize
    {
        self.0.len()
    }

    pub fn contains(&self, field: DraftField) -> bool
    {
        self.0.contains_key(&field)
    }

    pub fn messages(&self, field: DraftField) -> &[String]
    {
        self.0.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn fields(&self) -> impl Iterator<Item = DraftField> + '_
    {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DraftField, &[String])>
    {
        self.0
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }

    fn insert(&mut self, field: DraftField, message: String)
    {
        let messages = self.0.entry(field).or_default();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }
}

impl fmt::Display for FieldErrors
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl ServiceOrderDraft
{
    /// Checks every field and either returns the typed values or all the
    /// violated rules at once, with messages in the given locale.
    pub fn validate_for(&self, locale: Locale) -> Result<ValidatedServiceOrder, FieldErrors>
    {
        let mut field_errors = FieldErrors::default();

        if let Err(validation_errors) = self.validate() {
            for key in validation_errors.field_errors().keys() {
                if let Some(field) = DraftField::from_key(key) {
                    field_errors.insert(field, self.violation_message(field, locale));
                }
            }
        }

        let work_type = WorkType::from_label(&self.work_type);
        let priority = Priority::from_label(&self.priority);
        let status = OrderStatus::from_label(&self.status);

        let checks = [
            (DraftField::WorkType, work_type.is_some()),
            (DraftField::Priority, priority.is_some()),
            (DraftField::Status, status.is_some()),
            (DraftField::DueDate, self.due_date.is_some()),
        ];
        for (field, valid) in checks {
            if !valid {
                field_errors.insert(field, self.violation_message(field, locale));
            }
        }

        if !field_errors.is_empty() {
            return Err(field_errors);
        }

        let (Some(work_type), Some(priority), Some(status), Some(due_date)) =
            (work_type, priority, status, self.due_date)
        else {
            return Err(field_errors);
        };

        Ok(ValidatedServiceOrder {
            title: self.title.clone(),
            equipment: self.equipment.clone(),
            work_type,
            priority,
            status,
            assignee: self.assignee.clone(),
            due_date,
            description: self.description.clone(),
        })
    }

    fn violation_message(&self, field: DraftField, locale: Locale) -> String
    {
        let title_too_long = self.title.chars().count() > TITLE_MAX;
        let description_too_long = self.description.chars().count() > DESCRIPTION_MAX;

        match (field, locale) {
            (DraftField::Title, Locale::PtBr) if title_too_long => {
                format!("Título deve ter no máximo {TITLE_MAX} caracteres")
            }
            (DraftField::Title, Locale::En) if title_too_long => {
                format!("Title must be at most {TITLE_MAX} characters")
            }
            (DraftField::Title, Locale::PtBr) => {
                format!("Título deve ter no mínimo {TITLE_MIN} caracteres")
            }
            (DraftField::Title, Locale::En) => {
                format!("Title must be at least {TITLE_MIN} characters")
            }
            (DraftField::Equipment, Locale::PtBr) => {
                "Equipamento deve ter no mínimo 3 caracteres".to_string()
            }
            (DraftField::Equipment, Locale::En) => {
                "Equipment must be at least 3 characters".to_string()
            }
            (DraftField::WorkType, Locale::PtBr) => "Selecione um tipo".to_string(),
            (DraftField::WorkType, Locale::En) => "Select a type".to_string(),
            (DraftField::Priority, Locale::PtBr) => "Selecione uma prioridade".to_string(),
            (DraftField::Priority, Locale::En) => "Select a priority".to_string(),
            (DraftField::Status, Locale::PtBr) => "Selecione um status".to_string(),
            (DraftField::Status, Locale::En) => "Select a status".to_string(),
            (DraftField::Assignee, Locale::PtBr) => {
                "Responsável deve ter no mínimo 3 caracteres".to_string()
            }
            (DraftField::Assignee, Locale::En) => {
                "Assignee must be at least 3 characters".to_string()
            }
            (DraftField::DueDate, Locale::PtBr) => "Selecione uma data de prazo".to_string(),
            (DraftField::DueDate, Locale::En) => "Select a due date".to_string(),
            (DraftField::Description, Locale::PtBr) if description_too_long => {
                format!("Descrição deve ter no máximo {DESCRIPTION_MAX} caracteres")
            }
            (DraftField::Description, Locale::En) if description_too_long => {
                format!("Description must be at most {DESCRIPTION_MAX} characters")
            }
            (DraftField::Description, Locale::PtBr) => {
                format!("Descrição deve ter no mínimo {DESCRIPTION_MIN} caracteres")
            }
            (DraftField::Description, Locale::En) => {
                format!("Description must be at least {DESCRIPTION_MIN} characters")
            }
        }
    }
}

#[allow(clippy::ptr_arg)]
fn validate_work_type(value: &String) -> Result<(), ValidationError>
{
    recognized::<WorkType>(value, "work_type")
}

#[allow(clippy::ptr_arg)]
fn validate_priority(value: &String) -> Result<(), ValidationError>
{
    recognized::<Priority>(value, "priority")
}

#[allow(clippy::ptr_arg)]
fn validate_status(value: &String) -> Result<(), ValidationError>
{
    recognized::<OrderStatus>(value, "status")
}

fn recognized<T: Labelled>(value: &str, code: &'static str) -> Result<(), ValidationError>
{
    match T::from_label(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(code)),
    }
}
