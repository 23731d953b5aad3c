//! The static product catalog.
//!
//! Every listing shares the same modal machinery; a `Product` record is the
//! complete set of per-listing differences (copy, price, webhook endpoint,
//! payload key names, theme accent). Adding a listing means adding one
//! entry here.

use crate::order::PayloadFieldMap;

/// What kind of modal a catalog entry opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProductKind {
    /// The standard order form, delivered to a fulfilment webhook.
    Order,
    /// The live-operator chat window.
    Chat,
}

/// Everything that distinguishes one listing from another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub title: &'static str,
    pub price_label: &'static str,
    pub pitch: &'static str,
    /// Fulfilment webhook for order listings, operator bridge for chat.
    pub endpoint: &'static str,
    pub fields: PayloadFieldMap,
    pub notes_required: bool,
    /// CSS color for the listing's accent.
    pub accent: &'static str,
    /// Vault listings only render once the tap gate unlocks.
    pub hidden: bool,
    pub kind: ProductKind,
}

pub static CATALOG: &[Product] = &[
    Product {
        id: "ghostline-vpn",
        title: "GhostLine VPN",
        price_label: "0.8 SOL / 0.05 ETH",
        pitch: "Multi-hop exits rotated hourly. No accounts, no logs, no names. \
                Your access bundle is cut by hand after payment clears.",
        endpoint: "https://hooks.nightmkt.net/orders/ghostline",
        // The ghostline receiver predates the others and keeps its own
        // long-form key names. Do not unify without migrating it.
        fields: PayloadFieldMap::LONG_FORM,
        notes_required: false,
        accent: "#3ddc97",
        hidden: false,
        kind: ProductKind::Order,
    },
    Product {
        id: "spectre-mesh",
        title: "Spectre Proxy Mesh",
        price_label: "1.2 SOL / 0.08 ETH",
        pitch: "Residential exit pool across forty jurisdictions. Credentials \
                delivered to your contact channel within the hour.",
        endpoint: "https://hooks.nightmkt.net/orders/spectre",
        fields: PayloadFieldMap::DEFAULT,
        notes_required: true,
        accent: "#7f5af0",
        hidden: false,
        kind: ProductKind::Order,
    },
    Product {
        id: "packet-phantom",
        title: "Packet Phantom",
        price_label: "0.5 SOL / 0.03 ETH",
        pitch: "Traffic-shaping toolkit that makes your flows look like \
                anyone else's. Ships as a signed archive with a field manual.",
        endpoint: "https://hooks.nightmkt.net/orders/phantom",
        fields: PayloadFieldMap::DEFAULT,
        notes_required: true,
        accent: "#ff8906",
        hidden: false,
        kind: ProductKind::Order,
    },
    Product {
        id: "nullmail-relay",
        title: "NullMail Relay",
        price_label: "0.3 SOL / 0.02 ETH",
        pitch: "Disposable relay inboxes that burn themselves after seven \
                days. Quota and burn schedule set to your order notes.",
        endpoint: "https://hooks.nightmkt.net/orders/nullmail",
        fields: PayloadFieldMap::DEFAULT,
        notes_required: true,
        accent: "#e53170",
        hidden: false,
        kind: ProductKind::Order,
    },
    Product {
        id: "opsec-primer",
        title: "OpSec Field Primer",
        price_label: "0.2 SOL / 0.015 ETH",
        pitch: "Two hundred pages of hard-won habit. The mistakes in here \
                were paid for so you do not have to.",
        endpoint: "https://hooks.nightmkt.net/orders/primer",
        fields: PayloadFieldMap::DEFAULT,
        notes_required: true,
        accent: "#2cb67d",
        hidden: false,
        kind: ProductKind::Order,
    },
    Product {
        id: "live-operator",
        title: "Live Operator",
        price_label: "consultation",
        pitch: "Talk to a human. Describe what you need and the desk will \
                quote you directly.",
        endpoint: "https://hooks.nightmkt.net/operator/bridge",
        fields: PayloadFieldMap::DEFAULT,
        notes_required: true,
        accent: "#00ced1",
        hidden: false,
        kind: ProductKind::Chat,
    },
    Product {
        id: "vault-courier",
        title: "Vault: Air-Gap Courier",
        price_label: "3.0 SOL / 0.2 ETH",
        pitch: "Hand delivery of cold media between cities. You found the \
                vault, you know what this is for.",
        endpoint: "https://hooks.nightmkt.net/orders/courier",
        fields: PayloadFieldMap::DEFAULT,
        notes_required: true,
        accent: "#f9bc60",
        hidden: true,
        kind: ProductKind::Order,
    },
    Product {
        id: "vault-locker",
        title: "Vault: Cold Drop Locker",
        price_label: "1.5 SOL / 0.1 ETH",
        pitch: "Thirty days of dead-drop storage in a city of your choosing. \
                Coordinates arrive on your contact channel.",
        endpoint: "https://hooks.nightmkt.net/orders/locker",
        fields: PayloadFieldMap::DEFAULT,
        notes_required: true,
        accent: "#a786df",
        hidden: true,
        kind: ProductKind::Order,
    },
];

/// Listings shown to everyone.
pub fn storefront() -> impl Iterator<Item = &'static Product> {
    CATALOG.iter().filter(|p| !p.hidden)
}

/// Listings behind the tap gate.
pub fn vault() -> impl Iterator<Item = &'static Product> {
    CATALOG.iter().filter(|p| p.hidden)
}

/// Looks up a listing by id.
pub fn find(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn storefront_and_vault_partition_the_catalog() {
        assert_eq!(storefront().count() + vault().count(), CATALOG.len());
        assert!(vault().all(|p| p.hidden));
    }

    #[test]
    fn find_resolves_known_ids() {
        assert_eq!(find("spectre-mesh").unwrap().title, "Spectre Proxy Mesh");
        assert!(find("no-such-listing").is_none());
    }

    #[test]
    fn flagship_keeps_its_legacy_receiver_shape() {
        let flagship = find("ghostline-vpn").unwrap();
        assert_eq!(flagship.fields, PayloadFieldMap::LONG_FORM);
        assert!(!flagship.notes_required);
    }
}
