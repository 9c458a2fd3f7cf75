use thiserror::Error;

use crate::forms::validation::FieldId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiteError {
    #[error("{field}: {message}")]
    FieldInvalid { field: FieldId, message: String },
    #[error("{} field(s) failed validation", .fields.len())]
    FormInvalid {
        fields: Vec<FieldId>,
        amount_invalid: bool,
    },
    #[error("Payment failed: {reason}")]
    PaymentDeclined { code: Option<String>, reason: String },
    #[error("{0} is not available on this page")]
    ConfigurationMissing(&'static str),
}
