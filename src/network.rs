//! Networks and the mapping of currency ids between them.
//!
//! The remote currency list only knows mainnet ids. When the wallet runs
//! against a test network each id has to be mapped to the id the test network
//! uses for the same currency. Rather than patching substrings, the id is split
//! into its parts and each part is looked up in an explicit table:
//!
//! ```text
//! bitcoin-mainnet:__native__
//! ^^^^^^^ ^^^^^^^ ^^^^^^^^^^
//! chain   network address
//! ```

use crate::{
    error::{Error, Result},
    models::currency_id::CurrencyID,
};
use serde::{Serialize, Deserialize};
use std::fmt;

/// The network segment every id in the remote currency list carries.
pub const MAINNET_SEGMENT: &str = "mainnet";

/// Which network the wallet is running against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkKind {
    Mainnet,
    Testnet,
}

impl NetworkKind {
    pub fn is_testnet(&self) -> bool {
        *self == NetworkKind::Testnet
    }

    /// Name used by pay-id environments and the like.
    pub fn environment(&self) -> &'static str {
        match self {
            NetworkKind::Mainnet => "mainnet",
            NetworkKind::Testnet => "testnet",
        }
    }
}

impl Default for NetworkKind {
    fn default() -> Self {
        NetworkKind::Mainnet
    }
}

impl fmt::Display for NetworkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.environment())
    }
}

/// Test network name for chains without an entry in `TESTNET_SEGMENTS`.
pub const TESTNET_SEGMENT: &str = "testnet";

/// Test network name per blockchain. Chains not listed use `testnet`.
const TESTNET_SEGMENTS: &[(&str, &str)] = &[
    ("ethereum", "ropsten"),
];

/// Token contracts whose test network deployment lives at another address.
const TESTNET_ADDRESSES: &[(&str, &str)] = &[
    // BRD token
    ("0x558ec3152e2eb2174905cd19aea4e34a23de9ad6", "0x7108ca7c4718efa810457f228305c9c71390931a"),
];

/// Returns the test network segment for the given blockchain.
pub fn testnet_segment(blockchain: &str) -> &'static str {
    TESTNET_SEGMENTS.iter()
        .find(|(chain, _)| *chain == blockchain)
        .map(|(_, segment)| *segment)
        .unwrap_or(TESTNET_SEGMENT)
}

fn testnet_address(address: &str) -> &str {
    TESTNET_ADDRESSES.iter()
        .find(|(main, _)| main.eq_ignore_ascii_case(address))
        .map(|(_, test)| *test)
        .unwrap_or(address)
}

/// Map a currency id from the remote list to the id used on `network`.
///
/// On mainnet every id passes through untouched. On a test network, ids on
/// `mainnet` or the generic `testnet` are moved to the chain's test network;
/// ids on any other network pass through. Fails on a test network if the id
/// doesn't have a chain, network, and address part.
pub fn canonical_id(uid: &str, network: NetworkKind) -> Result<CurrencyID> {
    if !network.is_testnet() {
        return Ok(CurrencyID::new(uid));
    }
    let parts = CurrencyID::parse_parts(uid)
        .ok_or_else(|| Error::MalformedCurrencyID(uid.into()))?;
    if parts.network != MAINNET_SEGMENT && parts.network != TESTNET_SEGMENT {
        return Ok(CurrencyID::new(uid));
    }
    Ok(CurrencyID::from_parts(
        parts.blockchain,
        testnet_segment(parts.blockchain),
        testnet_address(parts.address),
    ))
}
