//! Currency metadata is the descriptive half of a currency: its display name,
//! colors, whether we still support it, and the codes other services know it
//! by. It arrives from the remote currency list as JSON:
//!
//! ```json
//! {
//!     "currency_id": "bitcoin-mainnet:__native__",
//!     "code": "BTC",
//!     "name": "Bitcoin",
//!     "is_supported": true,
//!     "colors": ["#f29500", "#f29500"],
//!     "contract_address": null,
//!     "scale": 8,
//!     "alternate_names": {"cryptocompare": "BTC", "coingecko": "bitcoin"}
//! }
//! ```

use crate::{
    config::Config,
    error::{Error, Result},
    models::{
        color::ColorPair,
        currency_id::CurrencyID,
    },
    network::{self, NetworkKind},
    registry::Currencies,
    util::price_ids,
};
use getset::{CopyGetters, Getters};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::hash::{Hash, Hasher};
use tracing::warn;

/// Alternate name key for the ticker used by our secondary price provider.
pub const CRYPTOCOMPARE: &str = "cryptocompare";
/// Alternate name key for the CoinGecko price lookup id.
pub const COINGECKO: &str = "coingecko";

/// Metadata for one currency in the remote currency list.
///
/// Two metadata records are equal if their ids are equal, regardless of what
/// the rest of their fields hold. Use `same_content()` to compare everything.
#[derive(Clone, Debug, Getters, CopyGetters, derive_builder::Builder)]
#[builder(pattern = "owned", setter(into))]
pub struct CurrencyMetadata {
    /// Unique id, ie `bitcoin-mainnet:__native__`
    #[getset(get = "pub")]
    uid: CurrencyID,
    /// Ticker code, ie BTC
    #[getset(get = "pub")]
    code: String,
    /// Display name, ie Bitcoin
    #[getset(get = "pub")]
    name: String,
    /// False if a token has been delisted
    #[getset(get_copy = "pub")]
    is_supported: bool,
    #[getset(get_copy = "pub")]
    colors: ColorPair,
    /// Contract address for tokens
    #[builder(setter(strip_option), default)]
    #[getset(get = "pub")]
    token_address: Option<String>,
    /// Display scale
    #[getset(get_copy = "pub")]
    decimals: u8,
    /// Ticker used by the secondary price provider, if it differs
    #[builder(setter(strip_option), default)]
    #[getset(get = "pub")]
    alternate_code: Option<String>,
    #[builder(setter(strip_option), default)]
    #[getset(get = "pub")]
    coin_gecko_id: Option<String>,
}

/// A metadata record as it appears on the wire.
#[derive(Debug, Deserialize)]
struct WireRecord {
    currency_id: String,
    code: String,
    is_supported: bool,
    #[serde(default)]
    colors: Option<Value>,
    name: String,
    #[serde(deserialize_with = "nullable")]
    contract_address: Option<String>,
    scale: u8,
    #[serde(default)]
    alternate_names: Option<Value>,
}

#[derive(Serialize)]
struct WireRecordRef<'a> {
    currency_id: &'a CurrencyID,
    code: &'a str,
    is_supported: bool,
    colors: Vec<String>,
    name: &'a str,
    contract_address: &'a Option<String>,
    scale: u8,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    alternate_names: BTreeMap<&'static str, &'a str>,
}

/// The key must be present but its value may be null.
fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
    where D: Deserializer<'de>,
          T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

fn decode_colors(colors: Option<&Value>) -> Result<ColorPair> {
    let vals = match colors {
        Some(Value::Array(vals)) => vals,
        Some(_) => Err(Error::InvalidColors("not a list".into()))?,
        None => Err(Error::InvalidColors("missing".into()))?,
    };
    let hexes = vals.iter()
        .map(|x| x.as_str().map(String::from).ok_or_else(|| Error::InvalidColors("not a string".into())))
        .collect::<Result<Vec<_>>>()?;
    ColorPair::from_hex_list(&hexes)
}

/// Alternate names only count if the whole map is strings.
fn decode_alternate_names(names: Option<&Value>) -> BTreeMap<String, String> {
    names
        .and_then(|x| BTreeMap::<String, String>::deserialize(x).ok())
        .unwrap_or_default()
}

impl CurrencyMetadata {
    pub fn builder() -> CurrencyMetadataBuilder {
        CurrencyMetadataBuilder::default()
    }

    /// Decode one record of the remote currency list.
    ///
    /// Ids are mapped onto the configured network. Bad colors fail the record
    /// in strict mode and fall back to black otherwise.
    pub fn decode(value: &Value, config: &Config) -> Result<Self> {
        let record = WireRecord::deserialize(value)?;
        let uid = network::canonical_id(&record.currency_id, config.network())?;
        let colors = match decode_colors(record.colors.as_ref()) {
            Ok(colors) => colors,
            Err(err) => {
                if config.strict() {
                    Err(Error::InvalidColors(uid.to_string()))?;
                }
                warn!(target: "currency_catalog", uid = %uid, %err, "invalid colors, using black");
                ColorPair::black()
            }
        };
        let mut names = decode_alternate_names(record.alternate_names.as_ref());
        let alternate_code = names.remove(CRYPTOCOMPARE);
        let coin_gecko_id = names.remove(COINGECKO)
            .or_else(|| price_ids::coin_gecko_id(&record.code).map(String::from));
        Ok(Self {
            uid,
            code: record.code,
            name: record.name,
            is_supported: record.is_supported,
            colors,
            token_address: record.contract_address,
            decimals: record.scale,
            alternate_code,
            coin_gecko_id,
        })
    }

    /// Decode a single JSON record.
    pub fn from_json(json: &str, config: &Config) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::decode(&value, config)
    }

    /// Encode back into the wire format.
    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn wire(&self) -> WireRecordRef<'_> {
        let mut alternate_names = BTreeMap::new();
        if let Some(code) = self.alternate_code.as_ref() {
            alternate_names.insert(CRYPTOCOMPARE, code.as_str());
        }
        if let Some(id) = self.coin_gecko_id.as_ref() {
            alternate_names.insert(COINGECKO, id.as_str());
        }
        WireRecordRef {
            currency_id: &self.uid,
            code: &self.code,
            is_supported: self.is_supported,
            colors: self.colors.to_hex_list(),
            name: &self.name,
            contract_address: &self.token_address,
            scale: self.decimals,
            alternate_names,
        }
    }

    /// Compare every field, not just the id.
    pub fn same_content(&self, other: &Self) -> bool {
        self.uid == other.uid &&
            self.code == other.code &&
            self.name == other.name &&
            self.is_supported == other.is_supported &&
            self.colors == other.colors &&
            self.token_address == other.token_address &&
            self.decimals == other.decimals &&
            self.alternate_code == other.alternate_code &&
            self.coin_gecko_id == other.coin_gecko_id
    }

    /// Token type string in the form the SDK's currency model expects.
    pub fn token_type_tag(&self) -> &'static str {
        if self.uid.is_native() { "NATIVE" } else { "ERC20" }
    }

    /// Whether this is one of the currencies bundled with the wallet.
    pub fn is_preferred(&self, network: NetworkKind) -> bool {
        Currencies::from_uid(&self.uid, network).is_some()
    }
}

impl PartialEq for CurrencyMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
    }
}

impl Eq for CurrencyMetadata {}

impl Hash for CurrencyMetadata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uid.hash(state);
    }
}

impl Serialize for CurrencyMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.wire().serialize(serializer)
    }
}
