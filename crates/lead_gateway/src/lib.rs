//! Best-effort delivery of order leads to a spreadsheet collection endpoint.
//!
//! [`OrderGateway::submit`] never fails: every outcome, including transport
//! errors, is folded into a [`SubmissionResult`]. Without a configured
//! endpoint the gateway runs in demo mode and only logs the lead.

use std::{sync::Arc, time::Duration};

use shared::protocol::{OrderData, SubmissionResult};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

pub mod transport;

pub use transport::{HttpTransport, LeadTransport, TransportError};

pub const DEFAULT_DEMO_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayConfigError {
    #[error("invalid collection endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    /// `None` selects demo mode.
    pub endpoint: Option<Url>,
    pub demo_delay: Duration,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            demo_delay: DEFAULT_DEMO_DELAY,
        }
    }
}

impl GatewayConfig {
    /// Parses an optional endpoint; blank input means demo mode.
    pub fn from_endpoint(
        raw: Option<&str>,
        demo_delay: Duration,
    ) -> Result<Self, GatewayConfigError> {
        let endpoint = match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
            None => None,
            Some(raw) => Some(parse_endpoint(raw)?),
        };
        Ok(Self {
            endpoint,
            demo_delay,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, GatewayConfigError> {
    let invalid = |reason: String| GatewayConfigError::InvalidEndpoint {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

/// Form fields in wire order. Optional fields appear only when present.
pub fn encode_order_fields(order: &OrderData) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("name", order.name().to_string()),
        ("phone", order.phone().to_string()),
        ("plan", order.plan().to_string()),
    ];
    if let Some(device_key) = order.device_key() {
        fields.push(("deviceKey", device_key.to_string()));
    }
    if let Some(mac_address) = order.mac_address() {
        fields.push(("macAddress", mac_address.to_string()));
    }
    fields
}

#[derive(Clone)]
pub struct OrderGateway {
    config: GatewayConfig,
    transport: Arc<dyn LeadTransport>,
}

impl OrderGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(config: GatewayConfig, transport: Arc<dyn LeadTransport>) -> Self {
        Self { config, transport }
    }

    pub fn is_demo(&self) -> bool {
        self.config.endpoint.is_none()
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// One delivery attempt. No retry, no idempotency key.
    pub async fn submit(&self, order: &OrderData) -> SubmissionResult {
        let Some(endpoint) = &self.config.endpoint else {
            info!(
                name = order.name(),
                phone = order.phone(),
                plan = order.plan(),
                device_key = order.device_key(),
                mac_address = order.mac_address(),
                "order captured in demo mode; no collection endpoint configured"
            );
            tokio::time::sleep(self.config.demo_delay).await;
            return SubmissionResult::ok();
        };

        let fields = encode_order_fields(order);
        match self.transport.deliver(endpoint, &fields).await {
            Ok(()) => {
                info!(
                    plan = order.plan(),
                    endpoint = %endpoint,
                    "order forwarded to collection endpoint"
                );
                SubmissionResult::ok()
            }
            Err(error) => {
                warn!(%error, endpoint = %endpoint, "order submission failed");
                SubmissionResult::failed(error.to_string())
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
