use serde::{Deserialize, Serialize};

use crate::{domain::Step, error::OrderValidationError};

/// Message used when a transport failure carries no description.
pub const UNKNOWN_SUBMISSION_ERROR: &str = "Unknown error occurred";

/// Raw order input as typed into the form or posted to the JSON API.
///
/// Every field may be blank here; [`OrderData::try_from`] enforces the
/// required ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrderDraft {
    pub name: String,
    pub phone: String,
    #[serde(alias = "device_key")]
    pub device_key: String,
    #[serde(alias = "mac_address")]
    pub mac_address: String,
    pub plan: String,
}

/// A validated lead. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrderDraft")]
pub struct OrderData {
    name: String,
    phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mac_address: Option<String>,
    plan: String,
}

impl OrderData {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        device_key: Option<String>,
        mac_address: Option<String>,
        plan: impl Into<String>,
    ) -> Result<Self, OrderValidationError> {
        let name = required(name.into()).ok_or(OrderValidationError::MissingName)?;
        let phone = required(phone.into()).ok_or(OrderValidationError::MissingPhone)?;
        let plan = required(plan.into()).ok_or(OrderValidationError::MissingPlan)?;

        Ok(Self {
            name,
            phone,
            device_key: device_key.and_then(required),
            mac_address: mac_address.and_then(required),
            plan,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn device_key(&self) -> Option<&str> {
        self.device_key.as_deref()
    }

    pub fn mac_address(&self) -> Option<&str> {
        self.mac_address.as_deref()
    }

    pub fn plan(&self) -> &str {
        &self.plan
    }
}

impl TryFrom<OrderDraft> for OrderData {
    type Error = OrderValidationError;

    fn try_from(draft: OrderDraft) -> Result<Self, Self::Error> {
        OrderData::new(
            draft.name,
            draft.phone,
            Some(draft.device_key),
            Some(draft.mac_address),
            draft.plan,
        )
    }
}

fn required(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Outcome of exactly one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNKNOWN_SUBMISSION_ERROR.to_string()
        } else {
            message
        };
        Self {
            success: false,
            error: Some(message),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    pub step: Step,
    pub selected_plan: String,
    pub submitting: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Localized plan card as returned by `GET /api/plans`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanSummary {
    pub id: String,
    pub name: String,
    pub display_name: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    pub devices: String,
    pub features: Vec<String>,
    pub popular: bool,
}
