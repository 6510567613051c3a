use thiserror::Error;

use crate::payment::PaymentField;

/// Failures of the client-side key/value store
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("client storage is unavailable")]
    Unavailable,
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

/// Reasons a payment submission could not be started
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    #[error("payment form has {} invalid field(s)", .0.len())]
    Validation(Vec<PaymentField>),
    #[error("a payment submission is already in progress")]
    AlreadySubmitting,
    #[error("the payment modal is not open")]
    NotOpen,
}
