//! Currencies bundled natively with the wallet (as opposed to tokens that show
//! up through the remote currency list).
//!
//! A bundled currency has a different id on each network, so ids are resolved
//! against a `NetworkKind` when asked for rather than being fixed.

use crate::{
    models::currency_id::{CurrencyID, NATIVE_ADDRESS},
    network::{self, NetworkKind, MAINNET_SEGMENT},
};
use serde::{Serialize, Deserialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currencies {
    Btc,
}

impl Currencies {
    /// Every bundled currency.
    pub fn all() -> &'static [Currencies] {
        &[Currencies::Btc]
    }

    /// Lowercase ticker code.
    pub fn code(&self) -> &'static str {
        match self {
            Currencies::Btc => "btc",
        }
    }

    fn blockchain(&self) -> &'static str {
        match self {
            Currencies::Btc => "bitcoin",
        }
    }

    /// This currency's id on the given network.
    pub fn uid(&self, network: NetworkKind) -> CurrencyID {
        let segment = match network {
            NetworkKind::Mainnet => MAINNET_SEGMENT,
            NetworkKind::Testnet => network::testnet_segment(self.blockchain()),
        };
        CurrencyID::from_parts(self.blockchain(), segment, NATIVE_ADDRESS)
    }

    /// Find a bundled currency by ticker. Case doesn't matter.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter()
            .find(|x| x.code().eq_ignore_ascii_case(code))
            .copied()
    }

    /// Find the bundled currency with this id on the given network.
    pub fn from_uid(uid: &CurrencyID, network: NetworkKind) -> Option<Self> {
        Self::all().iter()
            .find(|x| &x.uid(network) == uid)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_per_network() {
        assert_eq!(Currencies::Btc.uid(NetworkKind::Mainnet).as_str(), "bitcoin-mainnet:__native__");
        assert_eq!(Currencies::Btc.uid(NetworkKind::Testnet).as_str(), "bitcoin-testnet:__native__");
    }

    #[test]
    fn agrees_with_canonical_id() {
        for currency in Currencies::all() {
            let main = currency.uid(NetworkKind::Mainnet);
            let test = network::canonical_id(main.as_str(), NetworkKind::Testnet).unwrap();
            assert_eq!(test, currency.uid(NetworkKind::Testnet));
        }
    }

    #[test]
    fn looks_up() {
        assert_eq!(Currencies::from_code("BTC"), Some(Currencies::Btc));
        assert_eq!(Currencies::from_code("btc"), Some(Currencies::Btc));
        assert_eq!(Currencies::from_code("eth"), None);
        let uid = CurrencyID::new("bitcoin-testnet:__native__");
        assert_eq!(Currencies::from_uid(&uid, NetworkKind::Testnet), Some(Currencies::Btc));
        assert_eq!(Currencies::from_uid(&uid, NetworkKind::Mainnet), None);
        assert_eq!(Currencies::Btc.code(), "btc");
    }
}
