//! Currency and network identifiers.
//!
//! A `CurrencyID` uniquely identifies a currency across the native wallet SDK
//! and the metadata catalog, ie `bitcoin-mainnet:__native__` or
//! `ethereum-mainnet:0x558ec3152e2eb2174905cd19aea4e34a23de9ad6`.

/// Address part of ids for currencies native to their blockchain.
pub const NATIVE_ADDRESS: &str = "__native__";

model_id! {
    /// Identifies a currency, ie `bitcoin-mainnet:__native__`.
    pub struct CurrencyID
}

model_id! {
    /// Identifies a blockchain network, ie `bitcoin-mainnet`.
    pub struct NetworkID
}

/// The three parts of a currency id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct CurrencyIDParts<'a> {
    pub(crate) blockchain: &'a str,
    pub(crate) network: &'a str,
    pub(crate) address: &'a str,
}

impl CurrencyID {
    /// Split an id string into chain, network, and address. Returns `None` if
    /// any of them are missing.
    pub(crate) fn parse_parts(uid: &str) -> Option<CurrencyIDParts<'_>> {
        let (network_id, address) = uid.split_once(':')?;
        let (blockchain, network) = network_id.rsplit_once('-')?;
        if blockchain.is_empty() || network.is_empty() || address.is_empty() {
            return None;
        }
        Some(CurrencyIDParts { blockchain, network, address })
    }

    pub(crate) fn from_parts(blockchain: &str, network: &str, address: &str) -> Self {
        Self::new(format!("{}-{}:{}", blockchain, network, address))
    }

    /// The blockchain name, ie `bitcoin`.
    pub fn blockchain(&self) -> Option<&str> {
        Self::parse_parts(self.as_str()).map(|x| x.blockchain)
    }

    /// The network name, ie `mainnet`.
    pub fn network_segment(&self) -> Option<&str> {
        Self::parse_parts(self.as_str()).map(|x| x.network)
    }

    /// The token contract address, or `__native__`.
    pub fn address(&self) -> Option<&str> {
        Self::parse_parts(self.as_str()).map(|x| x.address)
    }

    /// The network this currency lives on, ie `bitcoin-mainnet`.
    pub fn network_id(&self) -> Option<NetworkID> {
        Self::parse_parts(self.as_str())
            .map(|x| NetworkID::new(format!("{}-{}", x.blockchain, x.network)))
    }

    /// Whether this is a blockchain's native currency rather than a token.
    pub fn is_native(&self) -> bool {
        self.as_str().contains(NATIVE_ADDRESS)
    }
}
