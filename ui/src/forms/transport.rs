//! Delivery of accepted leads. The page ships with [`SimulatedTransport`],
//! which only waits; a real backend implements [`LeadTransport`] and the form
//! state machine does not change.

use futures::future::LocalBoxFuture;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::core::timing;
use crate::i18n::Language;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub request_id: Uuid,
    pub submitted_at: String,
    pub language: Language,
    pub email: String,
    pub name: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
    pub consent: bool,
}

impl LeadPayload {
    /// Stamp a new request id and the current UTC time.
    pub fn stamp(
        language: Language,
        email: &str,
        name: &str,
        company: &str,
        phone: &str,
        message: &str,
    ) -> Self {
        let phone = phone.trim();
        Self {
            request_id: Uuid::new_v4(),
            submitted_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
            language,
            email: email.trim().to_string(),
            name: name.trim().to_string(),
            company: company.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            message: message.trim().to_string(),
            consent: true,
        }
    }
}

pub trait LeadTransport {
    fn send(&self, payload: LeadPayload) -> LocalBoxFuture<'_, Result<(), TransportError>>;
}

/// Waits `delay_ms` standing in for a network round trip, then succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    pub delay_ms: u64,
}

impl SimulatedTransport {
    pub fn new(delay_ms: u64) -> Self {
        Self { delay_ms }
    }
}

impl LeadTransport for SimulatedTransport {
    fn send(&self, payload: LeadPayload) -> LocalBoxFuture<'_, Result<(), TransportError>> {
        let delay = self.delay_ms;
        Box::pin(async move {
            timing::sleep_ms(delay).await;
            tracing::info!("[contact] simulated delivery of lead {}", payload.request_id);
            Ok(())
        })
    }
}
