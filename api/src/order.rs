//! Order form data: the draft a buyer edits, the frozen request derived
//! from it at submit time, and the per-receiver JSON key mapping.

use serde_json::Value;

use crate::network::Network;

/// A required order-form field, named in validation reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Field {
    #[strum(serialize = "contact")]
    Contact,
    #[strum(serialize = "notes")]
    Notes,
    #[strum(serialize = "transaction id")]
    TransactionId,
}

/// The mutable order form owned by one open product modal.
///
/// Free-text fields are deliberately not format-validated; a Telegram
/// handle, an email address or anything else the buyer wants to be reached
/// on is acceptable contact data.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderDraft {
    pub contact: String,
    pub notes: String,
    pub transaction_id: String,
    pub network: Network,
}

impl OrderDraft {
    /// Restores every field to its default: empty strings, Solana.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Which required fields are still empty after trimming.
    ///
    /// `notes` is only required for products that say so; the flagship
    /// listing treats it as optional.
    pub fn missing_fields(&self, notes_required: bool) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.contact.trim().is_empty() {
            missing.push(Field::Contact);
        }
        if notes_required && self.notes.trim().is_empty() {
            missing.push(Field::Notes);
        }
        if self.transaction_id.trim().is_empty() {
            missing.push(Field::TransactionId);
        }
        missing
    }

    /// True when the submit control may be enabled.
    pub fn is_submittable(&self, notes_required: bool) -> bool {
        self.missing_fields(notes_required).is_empty()
    }
}

/// JSON key names understood by one webhook receiver.
///
/// The receivers were wired up by hand at different times and do not agree
/// on key names, so the names are per-product configuration rather than a
/// single schema. Unifying them would break the existing automation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayloadFieldMap {
    pub product: &'static str,
    pub contact: &'static str,
    pub notes: &'static str,
    pub transaction_id: &'static str,
    pub network: &'static str,
}

impl PayloadFieldMap {
    /// The key names most receivers use.
    pub const DEFAULT: Self = Self {
        product: "tool_name",
        contact: "contact",
        notes: "notes",
        transaction_id: "txid",
        network: "chain",
    };

    /// Long-form keys used by the storefront-shell receiver.
    pub const LONG_FORM: Self = Self {
        product: "product",
        contact: "delivery_contact",
        notes: "additional_notes",
        transaction_id: "transaction_id",
        network: "payment_chain",
    };
}

impl Default for PayloadFieldMap {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The immutable payload snapshot taken from a draft at submit time.
///
/// This is what crosses the system boundary; it has no further lifecycle
/// on the client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRequest {
    pub product: String,
    pub contact: String,
    pub notes: String,
    pub transaction_id: String,
    pub network: Network,
}

impl OrderRequest {
    /// Snapshots a draft, trimming every free-text field.
    pub fn from_draft(draft: &OrderDraft, product_title: &str) -> Self {
        Self {
            product: product_title.to_owned(),
            contact: draft.contact.trim().to_owned(),
            notes: draft.notes.trim().to_owned(),
            transaction_id: draft.transaction_id.trim().to_owned(),
            network: draft.network,
        }
    }

    /// Renders the request as a JSON object using the receiver's key names.
    pub fn to_payload(&self, fields: &PayloadFieldMap) -> Value {
        let mut body = serde_json::Map::new();
        body.insert(fields.product.to_owned(), Value::String(self.product.clone()));
        body.insert(fields.contact.to_owned(), Value::String(self.contact.clone()));
        body.insert(fields.notes.to_owned(), Value::String(self.notes.clone()));
        body.insert(
            fields.transaction_id.to_owned(),
            Value::String(self.transaction_id.clone()),
        );
        body.insert(
            fields.network.to_owned(),
            Value::String(self.network.to_string()),
        );
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> OrderDraft {
        OrderDraft {
            contact: "@alice".to_owned(),
            notes: "test".to_owned(),
            transaction_id: "abc123".to_owned(),
            network: Network::Solana,
        }
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let draft = OrderDraft::default();
        assert_eq!(
            draft.missing_fields(true),
            vec![Field::Contact, Field::Notes, Field::TransactionId]
        );
        assert!(!draft.is_submittable(true));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let draft = OrderDraft {
            contact: "   ".to_owned(),
            notes: "\t\n".to_owned(),
            transaction_id: " ".to_owned(),
            network: Network::Solana,
        };
        assert_eq!(
            draft.missing_fields(true),
            vec![Field::Contact, Field::Notes, Field::TransactionId]
        );
    }

    #[test]
    fn notes_optional_when_product_says_so() {
        let mut draft = valid_draft();
        draft.notes.clear();
        assert!(draft.is_submittable(false));
        assert_eq!(draft.missing_fields(true), vec![Field::Notes]);
    }

    #[test]
    fn padded_and_trimmed_drafts_validate_identically() {
        let padded = OrderDraft {
            contact: "  @alice  ".to_owned(),
            notes: " test ".to_owned(),
            transaction_id: "\tabc123\n".to_owned(),
            network: Network::Solana,
        };
        assert!(padded.is_submittable(true));

        let padded_request = OrderRequest::from_draft(&padded, "GhostLine VPN");
        let trimmed_request = OrderRequest::from_draft(&valid_draft(), "GhostLine VPN");
        assert_eq!(padded_request, trimmed_request);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut draft = valid_draft();
        draft.network = Network::Ethereum;
        draft.reset();
        assert_eq!(draft, OrderDraft::default());
    }

    #[test]
    fn default_payload_uses_short_keys() {
        let request = OrderRequest::from_draft(&valid_draft(), "GhostLine VPN");
        let payload = request.to_payload(&PayloadFieldMap::DEFAULT);
        assert_eq!(payload["tool_name"], "GhostLine VPN");
        assert_eq!(payload["contact"], "@alice");
        assert_eq!(payload["notes"], "test");
        assert_eq!(payload["txid"], "abc123");
        assert_eq!(payload["chain"], "solana");
    }

    #[test]
    fn long_form_payload_renames_every_key() {
        let request = OrderRequest::from_draft(&valid_draft(), "GhostLine VPN");
        let payload = request.to_payload(&PayloadFieldMap::LONG_FORM);
        assert_eq!(payload["product"], "GhostLine VPN");
        assert_eq!(payload["delivery_contact"], "@alice");
        assert_eq!(payload["additional_notes"], "test");
        assert_eq!(payload["transaction_id"], "abc123");
        assert_eq!(payload["payment_chain"], "solana");
        assert!(payload.get("tool_name").is_none());
    }

    #[test]
    fn network_toggle_changes_only_the_chain_field() {
        let mut draft = valid_draft();
        draft.network = Network::Ethereum;
        let eth = OrderRequest::from_draft(&draft, "GhostLine VPN");
        let sol = OrderRequest::from_draft(&valid_draft(), "GhostLine VPN");
        assert_eq!(eth.contact, sol.contact);
        assert_eq!(eth.notes, sol.notes);
        assert_eq!(eth.transaction_id, sol.transaction_id);
        assert_eq!(eth.to_payload(&PayloadFieldMap::DEFAULT)["chain"], "ethereum");
    }
}
