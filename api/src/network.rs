//! The payment networks the storefront accepts, and the receiving address
//! for each one.

use serde::{Deserialize, Serialize};

/// A payment network a buyer can settle on.
///
/// The `strum::Display` impl yields the lowercase wire name used in webhook
/// payloads ("solana" / "ethereum").
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Network {
    #[default]
    Solana,
    Ethereum,
}

const SOLANA_RECEIVING_ADDRESS: &str = "6yKHERk8rsbmJxvMpPuwPs1ct3hRiP7xaJF2tvnGU9e8";
const ETHEREUM_RECEIVING_ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

impl Network {
    /// Both networks, in selector display order.
    pub const ALL: [Network; 2] = [Network::Solana, Network::Ethereum];

    /// Human-readable name for buttons and labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            Network::Solana => "Solana",
            Network::Ethereum => "Ethereum",
        }
    }

    /// The address buyers pay into. Total over the enum; not user-editable.
    pub fn receiving_address(&self) -> &'static str {
        match self {
            Network::Solana => SOLANA_RECEIVING_ADDRESS,
            Network::Ethereum => ETHEREUM_RECEIVING_ADDRESS,
        }
    }
}
