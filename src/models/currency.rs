//! The `Currency` ties a native currency handle from the wallet SDK to its
//! metadata record and its set of units. Everything the UI asks about a
//! currency (ticker, colors, which unit to display, fee timing text, payment
//! URIs) is answered here.

use crate::{
    error::{Error, Result},
    models::{
        color::ColorPair,
        sdk::{CoreCurrency, Network, TokenType},
        currency_id::CurrencyID,
        metadata::CurrencyMetadata,
        unit::Unit,
    },
    registry::Currencies,
};
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use url::Url;

const ESTIMATED_DELIVERY: &str = "Estimated Delivery";
const ECONOMY_TIME: &str = "1-24 hours";
const REGULAR_TIME: &str = "10-60 minutes";
const PRIORITY_TIME: &str = "10-30 minutes";
const PROCESSING_TIME: &str = "2-5 minutes";

/// Example bitcoin addresses, ie for estimating the max send amount.
const BTC_PLACEHOLDER_MAINNET: &str = "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq";
const BTC_PLACEHOLDER_TESTNET: &str = "tb1qw508d6qejxtdg4y5r3zarvary0c5xw7kxpjzsx";

/// A pay-id address as handed to us by a pay-id lookup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayIdAddress {
    pub payment_network: String,
    pub environment: String,
}

/// A currency with its metadata and units resolved.
#[derive(Clone, Debug)]
pub struct Currency {
    core: CoreCurrency,
    network: Network,
    metadata: CurrencyMetadata,
    /// The smallest divisible unit, ie satoshi
    base_unit: Unit,
    /// The unit used for display and exchange rates, ie bitcoin
    default_unit: Unit,
    /// All units, keyed by lowercase name
    units: BTreeMap<String, Unit>,
}

impl Currency {
    /// Put a currency together. Returns `None` if the core currency and the
    /// metadata don't refer to the same currency id.
    ///
    /// The base and default units are added to the unit set if missing.
    pub fn new<I>(core: CoreCurrency, network: Network, metadata: CurrencyMetadata, units: I, base_unit: Unit, default_unit: Unit) -> Option<Self>
        where I: IntoIterator<Item = Unit>,
    {
        Self::try_new(core, network, metadata, units, base_unit, default_unit).ok()
    }

    /// Like `new()`, but says why construction failed.
    pub fn try_new<I>(core: CoreCurrency, network: Network, metadata: CurrencyMetadata, units: I, base_unit: Unit, default_unit: Unit) -> Result<Self>
        where I: IntoIterator<Item = Unit>,
    {
        if core.uid() != metadata.uid() {
            Err(Error::IdentityMismatch {
                core: core.uid().to_string(),
                metadata: metadata.uid().to_string(),
            })?;
        }
        let mut units = units.into_iter()
            .map(|unit| (unit.key(), unit))
            .collect::<BTreeMap<_, _>>();
        for unit in &[&base_unit, &default_unit] {
            units.entry(unit.key()).or_insert_with(|| (*unit).clone());
        }
        Ok(Self {
            core,
            network,
            metadata,
            base_unit,
            default_unit,
            units,
        })
    }

    pub fn uid(&self) -> &CurrencyID {
        self.metadata.uid()
    }

    /// Uppercase ticker code, ie BTC. Comes from the SDK, not the metadata.
    pub fn code(&self) -> String {
        self.core.code().to_uppercase()
    }

    /// Display name, ie Bitcoin.
    pub fn name(&self) -> &str {
        self.metadata.name()
    }

    pub fn core(&self) -> &CoreCurrency {
        &self.core
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn metadata(&self) -> &CurrencyMetadata {
        &self.metadata
    }

    pub fn colors(&self) -> ColorPair {
        self.metadata.colors()
    }

    /// False if a token has been delisted.
    pub fn is_supported(&self) -> bool {
        self.metadata.is_supported()
    }

    pub fn token_address(&self) -> Option<&str> {
        self.metadata.token_address().as_deref()
    }

    pub fn token_type(&self) -> TokenType {
        TokenType::parse(self.core.token_type())
    }

    /// Ticker for our secondary price provider.
    pub fn crypto_compare_code(&self) -> String {
        self.metadata.alternate_code()
            .as_ref()
            .map(|x| x.to_uppercase())
            .unwrap_or_else(|| self.code())
    }

    pub fn coin_gecko_id(&self) -> Option<&str> {
        self.metadata.coin_gecko_id().as_deref()
    }

    /// Confirmations needed until a transaction is considered complete, ie 6
    /// for bitcoin.
    pub fn confirmations_until_final(&self) -> u32 {
        self.network.confirmations_until_final()
    }

    pub fn base_unit(&self) -> &Unit {
        &self.base_unit
    }

    pub fn default_unit(&self) -> &Unit {
        &self.default_unit
    }

    /// All units, ordered by name.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.values()
    }

    pub fn default_unit_name(&self) -> String {
        self.name_for_unit(&self.default_unit)
    }

    /// Find the unit with the given number of decimals.
    ///
    /// If more than one unit shares a scale, prefer the one named after the
    /// ticker, then the default unit, then the base unit, then whichever name
    /// sorts first.
    pub fn unit_for_decimals(&self, decimals: u8) -> Option<&Unit> {
        let code = self.code();
        let rank = |unit: &Unit| -> u8 {
            if unit.name().eq_ignore_ascii_case(&code) {
                0
            } else if unit == &self.default_unit {
                1
            } else if unit == &self.base_unit {
                2
            } else {
                3
            }
        };
        // min_by_key keeps the first of equal ranks, which is the lowest name
        self.units.values()
            .filter(|x| x.decimals() == decimals)
            .min_by_key(|x| rank(*x))
    }

    /// Find a unit by name. Case doesn't matter.
    pub fn unit_named(&self, name: &str) -> Option<&Unit> {
        self.units.get(&name.to_lowercase())
    }

    /// The label to show for amounts in the given unit. The default scale is
    /// labeled with the ticker, everything else with the unit's own name.
    pub fn name_for_unit(&self, unit: &Unit) -> String {
        if unit.decimals() == self.default_unit.decimals() {
            self.code()
        } else {
            unit.name().clone()
        }
    }

    /// `name_for_unit()` for the unit with the given decimals, or an empty
    /// string if there is no such unit.
    pub fn unit_name_for_decimals(&self, decimals: u8) -> String {
        self.unit_for_decimals(decimals)
            .map(|unit| self.name_for_unit(unit))
            .unwrap_or_default()
    }

    pub fn is_bitcoin(&self) -> bool {
        self.uid() == &Currencies::Btc.uid(self.network.kind())
    }

    pub fn is_bitcoin_compatible(&self) -> bool {
        self.is_bitcoin()
    }

    /// Estimated delivery text for a fee level: 0 is economy, 1 regular, and 2
    /// priority. Anything else gets an empty string.
    pub fn fee_text(&self, index: usize) -> String {
        if index > 2 {
            return String::new();
        }
        if self.is_bitcoin_compatible() {
            let time = match index {
                0 => ECONOMY_TIME,
                1 => REGULAR_TIME,
                _ => PRIORITY_TIME,
            };
            format!("{}: {}", ESTIMATED_DELIVERY, time)
        } else {
            format!("Processing time: This transaction is predicted to complete in {}.", PROCESSING_TIME)
        }
    }

    /// URI schemes this currency's payment requests use.
    pub fn url_schemes(&self) -> &'static [&'static str] {
        if self.is_bitcoin() {
            &["bitcoin"]
        } else {
            &[]
        }
    }

    pub fn is_valid_address(&self, address: &str) -> bool {
        self.network.is_valid_address(address)
    }

    /// Build a payment URI (`bitcoin:<address>`) for a valid address. Returns
    /// `None` if the currency has no single URI scheme or the address is bad.
    pub fn address_uri(&self, address: &str) -> Option<String> {
        let scheme = match self.url_schemes() {
            [scheme] => scheme,
            _ => return None,
        };
        if !self.is_valid_address(address) {
            return None;
        }
        let uri = format!("{}:{}", scheme, address);
        // the parser normalizes (ie strips tabs), so only use it as a check
        Url::parse(&uri).ok()?;
        Some(uri)
    }

    /// Ticker code for support pages.
    pub fn support_code(&self) -> String {
        if self.token_type() == TokenType::Erc20 {
            String::from("erc20")
        } else {
            self.code().to_lowercase()
        }
    }

    /// Payment network name for pay-id lookups.
    pub fn pay_id(&self) -> Option<&'static str> {
        if self.is_bitcoin() {
            Some("btc")
        } else {
            None
        }
    }

    /// Whether a resolved pay-id address belongs to this currency on our
    /// network.
    pub fn matches_pay_id(&self, details: &PayIdAddress) -> bool {
        if !details.environment.eq_ignore_ascii_case(self.network.kind().environment()) {
            return false;
        }
        match self.pay_id() {
            Some(id) => details.payment_network.eq_ignore_ascii_case(id),
            None => false,
        }
    }

    /// An example address on this currency's network.
    pub fn placeholder_address(&self) -> Option<&'static str> {
        if !self.is_bitcoin() {
            return None;
        }
        if self.network.is_mainnet() {
            Some(BTC_PLACEHOLDER_MAINNET)
        } else {
            Some(BTC_PLACEHOLDER_TESTNET)
        }
    }

    /// Whether a scanned payment request for `other` can be paid with this
    /// currency.
    pub fn accepts_payment_request_from(&self, other: &Currency) -> bool {
        self == other
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.core == other.core && self.metadata.same_content(&other.metadata)
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.core.hash(state);
        self.metadata.hash(state);
    }
}
