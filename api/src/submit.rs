//! Validates completed orders and delivers them to the fulfilment webhooks.

use dioxus_logger::tracing;
use serde_json::Value;

use crate::order::{Field, OrderDraft, OrderRequest};
use crate::product::Product;

/// Failure modes of a single submission attempt.
///
/// `Rejected` and `Transport` are handled identically by callers: the form
/// keeps its contents and the buyer retries manually. Nothing is retried
/// automatically.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("required fields are empty: {0:?}")]
    Incomplete(Vec<Field>),
    #[error("webhook answered with status {0}")]
    Rejected(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Destination for rendered order payloads.
///
/// The production sink is [`WebhookSink`]; tests substitute a recording
/// sink so no HTTP leaves the process.
pub trait OrderSink {
    /// Delivers one payload. Implementations must issue at most one
    /// request per call.
    async fn deliver(&self, endpoint: &str, payload: &Value) -> Result<(), SubmitError>;
}

/// Delivers payloads over HTTPS with a shared [`reqwest::Client`].
#[derive(Clone, Debug, Default)]
pub struct WebhookSink {
    client: reqwest::Client,
}

impl WebhookSink {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl OrderSink for WebhookSink {
    async fn deliver(&self, endpoint: &str, payload: &Value) -> Result<(), SubmitError> {
        let response = self.client.post(endpoint).json(payload).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Rejected(status.as_u16()))
        }
    }
}

/// Validates `draft` and posts it to `product`'s webhook.
///
/// The UI disables the submit control for incomplete drafts, so the
/// `Incomplete` branch is a backstop rather than the normal path. On any
/// error the draft is left untouched for manual retry.
pub async fn submit_order<S: OrderSink>(
    sink: &S,
    product: &Product,
    draft: &OrderDraft,
) -> Result<(), SubmitError> {
    let missing = draft.missing_fields(product.notes_required);
    if !missing.is_empty() {
        return Err(SubmitError::Incomplete(missing));
    }

    let request = OrderRequest::from_draft(draft, product.title);
    let payload = request.to_payload(&product.fields);
    match sink.deliver(product.endpoint, &payload).await {
        Ok(()) => {
            tracing::info!(product = product.id, "order delivered");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(product = product.id, "order submission failed: {err}");
            Err(err)
        }
    }
}
