//! In-memory maintenance data for the ordinator dashboard.
//!
//! The central piece is the [`ServiceOrderRegistry`], an append-only
//! sequence of [`ServiceOrder`]s kept newest first, together with the
//! validation and creation workflow for new orders and the pure
//! filter/sort pipeline in [`filter`]. Equipment, risk and dashboard data are
//! read-only reference collections.
pub mod dashboard;
pub mod equipment;
pub mod error;
pub mod filter;
pub mod labels;
pub mod registry;
pub mod risk;
pub mod seed;
pub mod service_order;
pub mod style;

pub use error::ServiceOrderError;
pub use filter::OrderFilter;
pub use filter::Tab;
pub use labels::Labelled;
pub use labels::Locale;
pub use registry::CreationNotice;
pub use registry::ServiceOrderRegistry;
pub use service_order::ServiceOrder;
pub use service_order::ServiceOrderId;
pub use service_order::draft::FieldErrors;
pub use service_order::draft::ServiceOrderDraft;
pub use service_order::draft::ValidatedServiceOrder;
pub use service_order::order_status::OrderStatus;
pub use service_order::priority::Priority;
pub use service_order::work_type::WorkType;
pub use style::StyleToken;
pub use style::Styled;
