//! Best-effort analytics beacon.
//!
//! Delivery is not guaranteed and failures are deliberately unobserved
//! beyond a debug log line. Nothing in the storefront waits on this.

use chrono::{DateTime, SecondsFormat, Utc};
use dioxus_logger::tracing;
use serde_json::Value;

const BEACON_ENDPOINT: &str = "https://telemetry.nightmkt.net/events";

/// The wire shape of one event.
fn beacon_payload(event: &str, at: DateTime<Utc>) -> Value {
    serde_json::json!({
        "event": event,
        "timestamp": at.to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// Fire-and-forget event report.
pub async fn record_event(client: &reqwest::Client, event: &str) {
    let body = beacon_payload(event, Utc::now());
    if let Err(err) = client.post(BEACON_ENDPOINT).json(&body).send().await {
        tracing::debug!("event beacon dropped: {err}");
    }
}

/// Convenience wrapper for call sites that do not hold a client.
pub async fn record(event: &str) {
    let client = reqwest::Client::new();
    record_event(&client, event).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn payload_carries_event_and_rfc3339_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 8, 30, 12, 0, 0).unwrap();
        let payload = beacon_payload("page_view", at);
        assert_eq!(payload["event"], "page_view");
        assert_eq!(payload["timestamp"], "2026-08-30T12:00:00Z");
    }
}
