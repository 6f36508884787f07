use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<OrderValidationError> for ApiError {
    fn from(value: OrderValidationError) -> Self {
        Self::new(ErrorCode::Validation, value.to_string())
    }
}

/// A required order field was blank after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderValidationError {
    #[error("missing required field: name")]
    MissingName,
    #[error("missing required field: phone")]
    MissingPhone,
    #[error("missing required field: plan")]
    MissingPlan,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code '{0}'")]
pub struct UnknownLanguage(pub String);
