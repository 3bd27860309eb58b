//! Units are the denominations a currency can be displayed in. Bitcoin has
//! satoshis (0 decimals), bits (2 decimals), and bitcoin (8 decimals), for
//! instance.

use getset::{CopyGetters, Getters};
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Getters, CopyGetters, Serialize, Deserialize)]
pub struct Unit {
    /// The unit's name, ie "satoshi"
    #[getset(get = "pub")]
    name: String,
    /// The unit's symbol, ie "sat"
    #[getset(get = "pub")]
    symbol: String,
    /// Power of ten relating this unit to the currency's base unit
    #[getset(get_copy = "pub")]
    decimals: u8,
}

impl Unit {
    pub fn new<T: Into<String>, S: Into<String>>(name: T, symbol: S, decimals: u8) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            decimals,
        }
    }

    /// The key this unit is stored under in its currency.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_lowercase() {
        assert_eq!(Unit::new("BTC", "₿", 8).key(), "btc");
        assert_eq!(Unit::new("Bits", "μ₿", 2).key(), "bits");
        assert_eq!(Unit::new("sat", "sat", 0).key(), "sat");
    }

    #[test]
    fn getters() {
        let unit = Unit::new("brd-wei", "wei", 0);
        assert_eq!(unit.name(), "brd-wei");
        assert_eq!(unit.symbol(), "wei");
        assert_eq!(unit.decimals(), 0);
        assert_eq!(unit, Unit::new(String::from("brd-wei"), "wei", 0));
        assert_ne!(unit, Unit::new("Brd-Wei", "wei", 0));
    }
}
