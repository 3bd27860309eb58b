//! Welcome to the currency catalog. This crate models the currencies a
//! multi-currency wallet knows about: the metadata that arrives from the
//! remote currency list, the units each currency can be displayed in, and the
//! resolved `Currency` objects the UI reads from.
//!
//! Nothing in here does I/O. The host app fetches the currency list, hands the
//! JSON to [CurrencyCatalog::from_json][catalog], and pairs the results with
//! the native wallet SDK's currencies via [CurrencyCatalog::resolve][resolve].
//! Decoding behavior (which network ids map onto, strict vs lenient decoding)
//! is controlled by a [Config][config] passed in by the caller.
//!
//! [catalog]: catalog/struct.CurrencyCatalog.html#method.from_json
//! [resolve]: catalog/struct.CurrencyCatalog.html#method.resolve
//! [config]: config/struct.Config.html

pub mod error;
mod util;
pub mod config;
pub mod network;
pub mod models;
pub mod registry;
pub mod assets;
pub mod catalog;

pub use catalog::CurrencyCatalog;
pub use config::Config;
pub use models::{
    color::{Color, ColorPair},
    sdk::{AddressValidator, CoreCurrency, Network, TokenType},
    currency::{Currency, PayIdAddress},
    currency_id::{CurrencyID, NetworkID},
    metadata::CurrencyMetadata,
    unit::Unit,
};
pub use network::NetworkKind;
pub use registry::Currencies;
pub use util::price_ids::coin_gecko_id;
