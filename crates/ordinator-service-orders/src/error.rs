use thiserror::Error;

use crate::service_order::ServiceOrderId;
use crate::service_order::draft::FieldErrors;

#[derive(Debug, Error)]
pub enum ServiceOrderError
{
    #[error("service order failed validation: {0}")]
    Validation(FieldErrors),
    #[error("malformed service order identifier `{0}`, expected OS-<year>-<sequence>")]
    MalformedIdentifier(String),
    #[error("no sequence number left after {0}")]
    SequenceExhausted(ServiceOrderId),
}
