//! The live-operator chat bridge.
//!
//! Free text crosses a JSON boundary in both directions and the operator
//! tooling on the far side does not escape its output reliably, so both
//! sides get a sanitization pass before anything is parsed.

use dioxus_logger::tracing;
use serde_json::Value;

/// Reply shown when the bridge returns a body we cannot parse.
pub const FALLBACK_REPLY: &str =
    "Operator desk is busy. Leave your contact details and check back shortly.";

/// Failure modes of one message exchange. Malformed reply bodies are not an
/// error; they degrade to [`FALLBACK_REPLY`].
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("operator bridge answered with status {0}")]
    Rejected(u16),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Raw request/response exchange with the operator bridge.
pub trait ChatTransport {
    /// Posts one payload and returns the raw response body.
    async fn exchange(&self, endpoint: &str, payload: &Value) -> Result<String, ChatError>;
}

/// Talks to the bridge over HTTPS.
#[derive(Clone, Debug, Default)]
pub struct HttpChatTransport {
    client: reqwest::Client,
}

impl ChatTransport for HttpChatTransport {
    async fn exchange(&self, endpoint: &str, payload: &Value) -> Result<String, ChatError> {
        let response = self.client.post(endpoint).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChatError::Rejected(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Strips C0/C1 control characters and escapes backslashes that do not
/// begin a valid JSON escape sequence.
///
/// Operators paste from terminals; raw escape bytes and half-finished
/// Windows paths both showed up in live traffic and broke `from_str`.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                // Keep the whole escape so the pair in "\\" is not split.
                Some(&next @ ('"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't' | 'u')) => {
                    out.push('\\');
                    out.push(next);
                    chars.next();
                }
                _ => out.push_str("\\\\"),
            }
        } else if !c.is_control() {
            out.push(c);
        }
    }
    out
}

/// Extracts the `response` string from a reply body, tolerating
/// unsanitized operator text. Never fails; the worst case is the fixed
/// fallback reply.
fn parse_reply(body: &str) -> String {
    let cleaned = sanitize(body);
    match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => value
            .get("response")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| FALLBACK_REPLY.to_owned()),
        Err(err) => {
            tracing::warn!("operator reply was not parseable: {err}");
            FALLBACK_REPLY.to_owned()
        }
    }
}

/// Sends one chat message and returns the operator's reply.
///
/// Transport failures surface as `Err` so the UI can show a retry line; a
/// 2xx response with a malformed body degrades to [`FALLBACK_REPLY`].
pub async fn send_message<T: ChatTransport>(
    transport: &T,
    endpoint: &str,
    text: &str,
) -> Result<String, ChatError> {
    let payload = serde_json::json!({ "message": sanitize(text) });
    let body = transport.exchange(endpoint, &payload).await?;
    Ok(parse_reply(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedTransport {
        body: &'static str,
    }

    impl ChatTransport for CannedTransport {
        async fn exchange(&self, _endpoint: &str, _payload: &Value) -> Result<String, ChatError> {
            Ok(self.body.to_owned())
        }
    }

    #[test]
    fn sanitize_strips_control_characters() {
        assert_eq!(sanitize("hel\u{0007}lo\u{009B} there"), "hello there");
    }

    #[test]
    fn sanitize_keeps_valid_escapes() {
        assert_eq!(sanitize(r#"line\nbreak \"quoted\""#), r#"line\nbreak \"quoted\""#);
    }

    #[test]
    fn sanitize_escapes_stray_backslashes() {
        assert_eq!(sanitize(r"C:\Users\alice"), r"C:\\Users\\alice");
        assert_eq!(sanitize(r"trailing\"), r"trailing\\");
    }

    #[test]
    fn sanitize_leaves_plain_text_alone() {
        assert_eq!(sanitize("just a message"), "just a message");
    }

    #[tokio::test]
    async fn well_formed_reply_is_returned() {
        let transport = CannedTransport {
            body: r#"{"response": "the desk will quote you in an hour"}"#,
        };
        let reply = send_message(&transport, "http://bridge", "hello").await.unwrap();
        assert_eq!(reply, "the desk will quote you in an hour");
    }

    #[tokio::test]
    async fn reply_with_raw_control_bytes_still_parses() {
        let transport = CannedTransport {
            body: "{\"response\": \"ok\u{0007}\"}",
        };
        let reply = send_message(&transport, "http://bridge", "hello").await.unwrap();
        assert_eq!(reply, "ok");
    }

    #[tokio::test]
    async fn malformed_reply_degrades_to_fallback() {
        let transport = CannedTransport { body: "not json at all" };
        let reply = send_message(&transport, "http://bridge", "hello").await.unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn reply_missing_the_response_field_degrades_to_fallback() {
        let transport = CannedTransport { body: r#"{"status": "ok"}"# };
        let reply = send_message(&transport, "http://bridge", "hello").await.unwrap();
        assert_eq!(reply, FALLBACK_REPLY);
    }
}
