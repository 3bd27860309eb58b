//! Stand-ins for the native wallet SDK's currency and network handles.
//!
//! The SDK owns these objects. We only need a handful of their properties plus
//! the network's ability to tell whether an address is valid, which is the one
//! thing we hand off through a trait.

use crate::{
    models::currency_id::{CurrencyID, NetworkID},
    network::NetworkKind,
};
use getset::{CopyGetters, Getters};
use serde::{Serialize, Deserialize};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// How a currency is implemented on its blockchain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Native,
    Erc20,
    Unknown,
}

impl TokenType {
    /// Parse the SDK's token type string. Case doesn't matter.
    pub fn parse(val: &str) -> Self {
        match val.to_lowercase().as_str() {
            "native" => TokenType::Native,
            "erc20" => TokenType::Erc20,
            _ => {
                warn!(target: "currency_catalog", token_type = val, "unknown token type");
                TokenType::Unknown
            }
        }
    }
}

/// The SDK's view of a currency.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Getters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get = "pub")]
pub struct CoreCurrency {
    uid: CurrencyID,
    /// Ticker as the SDK spells it, which is not always uppercase
    code: String,
    name: String,
    /// Raw type string, ie "native" or "erc20"
    token_type: String,
}

impl CoreCurrency {
    pub fn builder() -> CoreCurrencyBuilder {
        CoreCurrencyBuilder::default()
    }

    pub fn new<C, N, T>(uid: CurrencyID, code: C, name: N, token_type: T) -> Self
        where C: Into<String>,
              N: Into<String>,
              T: Into<String>,
    {
        Self {
            uid,
            code: code.into(),
            name: name.into(),
            token_type: token_type.into(),
        }
    }
}

/// Parses addresses for one network. Implemented by whatever wraps the SDK.
pub trait AddressValidator: Send + Sync {
    /// Returns true if `address` parses as an address on this network.
    fn is_valid(&self, address: &str) -> bool;
}

impl<F> AddressValidator for F
    where F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, address: &str) -> bool {
        self(address)
    }
}

/// The SDK's view of a network.
#[derive(Clone, Getters, CopyGetters)]
pub struct Network {
    #[getset(get = "pub")]
    id: NetworkID,
    #[getset(get_copy = "pub")]
    kind: NetworkKind,
    /// Confirmations until a transaction is considered final
    #[getset(get_copy = "pub")]
    confirmations_until_final: u32,
    validator: Arc<dyn AddressValidator>,
}

impl Network {
    pub fn new<V>(id: NetworkID, kind: NetworkKind, confirmations_until_final: u32, validator: V) -> Self
        where V: AddressValidator + 'static,
    {
        Self {
            id,
            kind,
            confirmations_until_final,
            validator: Arc::new(validator),
        }
    }

    pub fn is_mainnet(&self) -> bool {
        !self.kind.is_testnet()
    }

    pub fn is_valid_address(&self, address: &str) -> bool {
        self.validator.is_valid(address)
    }
}

impl fmt::Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("confirmations_until_final", &self.confirmations_until_final)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_types() {
        assert_eq!(TokenType::parse("native"), TokenType::Native);
        assert_eq!(TokenType::parse("NATIVE"), TokenType::Native);
        assert_eq!(TokenType::parse("ERC20"), TokenType::Erc20);
        assert_eq!(TokenType::parse("hbar-token"), TokenType::Unknown);
        assert_eq!(TokenType::parse(""), TokenType::Unknown);
    }

    #[test]
    fn network_delegates_validation() {
        let network = Network::new(NetworkID::new("bitcoin-mainnet"), NetworkKind::Mainnet, 6, |addr: &str| addr.starts_with("bc1"));
        assert!(network.is_valid_address("bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq"));
        assert!(!network.is_valid_address("0x558ec3152e2eb2174905cd19aea4e34a23de9ad6"));
        assert!(network.is_mainnet());
        assert_eq!(network.confirmations_until_final(), 6);
        assert_eq!(network.id().as_str(), "bitcoin-mainnet");
    }

    #[test]
    fn builds_core_currency() {
        let core = CoreCurrency::builder()
            .uid(CurrencyID::new("bitcoin-mainnet:__native__"))
            .code("btc")
            .name("Bitcoin")
            .token_type("native")
            .build().unwrap();
        assert_eq!(core, CoreCurrency::new(CurrencyID::new("bitcoin-mainnet:__native__"), "btc", "Bitcoin", "native"));
        assert_eq!(core.code(), "btc");
    }
}
