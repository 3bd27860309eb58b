//! The catalog holds one refresh worth of currency metadata.
//!
//! Each time the app fetches the remote currency list it builds a new catalog
//! and swaps it in wholesale; catalogs are never modified after they're built.
//! Records that fail to decode are left out (and remembered in `rejected()`)
//! rather than failing the whole list, so one bad entry can't take the wallet
//! down with it.

use chrono::{DateTime, Utc};
use crate::{
    config::Config,
    error::{Error, Result},
    models::{
        sdk::{CoreCurrency, Network},
        currency::Currency,
        currency_id::CurrencyID,
        metadata::CurrencyMetadata,
        unit::Unit,
    },
    network::NetworkKind,
    util,
};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct CurrencyCatalog {
    /// Accepted metadata, by id
    currencies: BTreeMap<CurrencyID, CurrencyMetadata>,
    /// Records we couldn't use
    rejected: Vec<Error>,
    /// The network the ids were resolved against
    network: NetworkKind,
    /// When this catalog was built
    updated: DateTime<Utc>,
}

impl CurrencyCatalog {
    /// Decode a currency list. Fails only if the document isn't a JSON list;
    /// bad records are skipped.
    pub fn from_json(json: &str, config: &Config, now: &DateTime<Utc>) -> Result<Self> {
        let doc: Value = serde_json::from_str(json)
            .map_err(|e| Error::MalformedDocument(e.to_string()))?;
        match doc {
            Value::Array(records) => Ok(Self::from_records(&records, config, now)),
            _ => Err(Error::MalformedDocument("expected a list of currencies".into())),
        }
    }

    /// Like `from_json()`, stamped with the current time.
    pub fn parse(json: &str, config: &Config) -> Result<Self> {
        Self::from_json(json, config, &util::time::now())
    }

    /// Build a catalog from already-parsed records.
    pub fn from_records(records: &[Value], config: &Config, now: &DateTime<Utc>) -> Self {
        let mut currencies = BTreeMap::new();
        let mut rejected = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let res = CurrencyMetadata::decode(record, config)
                .and_then(|meta| {
                    if currencies.contains_key(meta.uid()) {
                        Err(Error::DuplicateCurrency(meta.uid().to_string()))
                    } else {
                        Ok(meta)
                    }
                });
            match res {
                Ok(meta) => {
                    currencies.insert(meta.uid().clone(), meta);
                }
                Err(err) => {
                    warn!(target: "currency_catalog", index, %err, "dropping currency record");
                    rejected.push(Error::MalformedRecord {
                        index,
                        reason: err.to_string(),
                    });
                }
            }
        }
        info!(target: "currency_catalog", accepted = currencies.len(), rejected = rejected.len(), network = %config.network(), "loaded currency catalog");
        Self {
            currencies,
            rejected,
            network: config.network(),
            updated: now.clone(),
        }
    }

    pub fn get(&self, uid: &CurrencyID) -> Option<&CurrencyMetadata> {
        self.currencies.get(uid)
    }

    pub fn contains(&self, uid: &CurrencyID) -> bool {
        self.currencies.contains_key(uid)
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// All accepted metadata, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = &CurrencyMetadata> {
        self.currencies.values()
    }

    /// Metadata for the currencies bundled with the wallet.
    pub fn preferred(&self) -> impl Iterator<Item = &CurrencyMetadata> {
        let network = self.network;
        self.iter().filter(move |x| x.is_preferred(network))
    }

    /// Records that were left out, and why.
    pub fn rejected(&self) -> &[Error] {
        &self.rejected
    }

    pub fn network(&self) -> NetworkKind {
        self.network
    }

    pub fn updated(&self) -> &DateTime<Utc> {
        &self.updated
    }

    /// Whether this catalog is newer than `other`.
    pub fn supersedes(&self, other: &CurrencyCatalog) -> bool {
        self.updated > other.updated
    }

    /// Pair a native currency from the SDK with its metadata.
    pub fn resolve<I>(&self, core: CoreCurrency, network: Network, units: I, base_unit: Unit, default_unit: Unit) -> Result<Currency>
        where I: IntoIterator<Item = Unit>,
    {
        let metadata = self.get(core.uid())
            .ok_or_else(|| Error::MissingMetadata(core.uid().to_string()))?
            .clone();
        Currency::try_new(core, network, metadata, units, base_unit, default_unit)
    }

    /// Encode the accepted records back into a currency list.
    pub fn to_json(&self) -> Result<String> {
        let records = self.iter().collect::<Vec<_>>();
        Ok(serde_json::to_string(&records)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test::*;
    use serde_json::json;

    fn catalog_json(records: Vec<Value>) -> String {
        Value::Array(records).to_string()
    }

    #[test]
    fn loads() {
        let now = util::time::now();
        let json = catalog_json(vec![btc_record(), eth_record(), brd_record()]);
        let catalog = CurrencyCatalog::from_json(&json, &Config::mainnet(), &now).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.rejected().len(), 0);
        assert_eq!(catalog.network(), NetworkKind::Mainnet);
        assert_eq!(catalog.updated(), &now);
        assert!(catalog.contains(&CurrencyID::new("bitcoin-mainnet:__native__")));
        assert_eq!(catalog.get(&CurrencyID::new(BRD_MAINNET)).unwrap().code(), "BRD");
        let ids = catalog.iter().map(|x| x.uid().as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["bitcoin-mainnet:__native__", "ethereum-mainnet:0x558ec3152e2eb2174905cd19aea4e34a23de9ad6", "ethereum-mainnet:__native__"]);
        let preferred = catalog.preferred().map(|x| x.code().as_str()).collect::<Vec<_>>();
        assert_eq!(preferred, vec!["BTC"]);
    }

    #[test]
    fn loads_testnet() {
        let now = util::time::now();
        let json = catalog_json(vec![btc_record(), eth_record(), brd_record()]);
        let catalog = CurrencyCatalog::from_json(&json, &Config::testnet(), &now).unwrap();
        assert!(catalog.contains(&CurrencyID::new("bitcoin-testnet:__native__")));
        assert!(catalog.contains(&CurrencyID::new("ethereum-ropsten:__native__")));
        assert!(catalog.contains(&CurrencyID::new("ethereum-ropsten:0x7108ca7c4718efa810457f228305c9c71390931a")));
        assert!(!catalog.contains(&CurrencyID::new("bitcoin-mainnet:__native__")));
        assert_eq!(catalog.preferred().count(), 1);
    }

    #[test]
    fn drops_bad_records() {
        let now = util::time::now();
        let mut no_name = eth_record();
        no_name.as_object_mut().unwrap().remove("name");
        let mut bad_colors = brd_record();
        bad_colors["colors"] = json!(["#ffffff"]);
        let json = catalog_json(vec![btc_record(), no_name, json!("lol"), bad_colors.clone()]);

        let catalog = CurrencyCatalog::from_json(&json, &Config::mainnet(), &now).unwrap();
        assert_eq!(catalog.len(), 2);
        let indexes = catalog.rejected().iter()
            .map(|x| match x {
                Error::MalformedRecord { index, .. } => *index,
                _ => panic!("unexpected error {:?}", x),
            })
            .collect::<Vec<_>>();
        assert_eq!(indexes, vec![1, 2]);

        let strict = Config::debug(NetworkKind::Mainnet);
        let catalog = CurrencyCatalog::from_json(&json, &strict, &now).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.rejected().len(), 3);
        assert_eq!(catalog.rejected()[2], Error::MalformedRecord {
            index: 3,
            reason: Error::InvalidColors(BRD_MAINNET.into()).to_string(),
        });
    }

    #[test]
    fn first_duplicate_wins() {
        let now = util::time::now();
        let mut dupe = btc_record();
        dupe["name"] = json!("Bitcoin Again");
        let json = catalog_json(vec![btc_record(), dupe]);
        let catalog = CurrencyCatalog::from_json(&json, &Config::mainnet(), &now).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(&CurrencyID::new("bitcoin-mainnet:__native__")).unwrap().name(), "Bitcoin");
        assert_eq!(catalog.rejected(), &[Error::MalformedRecord {
            index: 1,
            reason: Error::DuplicateCurrency("bitcoin-mainnet:__native__".into()).to_string(),
        }]);
    }

    #[test]
    fn rejects_bad_documents() {
        let now = util::time::now();
        let res = CurrencyCatalog::from_json(r#"{"currency_id": "bitcoin-mainnet:__native__"}"#, &Config::mainnet(), &now);
        assert_eq!(res.err(), Some(Error::MalformedDocument("expected a list of currencies".into())));
        let res = CurrencyCatalog::from_json("[{", &Config::mainnet(), &now);
        assert!(matches!(res, Err(Error::MalformedDocument(_))));
        let catalog = CurrencyCatalog::from_json("[]", &Config::mainnet(), &now).unwrap();
        assert!(catalog.is_empty());
        let catalog = CurrencyCatalog::parse(&catalog_json(vec![eth_record()]), &Config::mainnet()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.updated() >= &now);
    }

    #[test]
    fn supersedes() {
        let then = util::time::from_timestamp(1_600_000_000);
        let now = util::time::now();
        let json = catalog_json(vec![btc_record()]);
        let old = CurrencyCatalog::from_json(&json, &Config::mainnet(), &then).unwrap();
        let new = CurrencyCatalog::from_json(&json, &Config::mainnet(), &now).unwrap();
        assert!(new.supersedes(&old));
        assert!(!old.supersedes(&new));
        assert!(!new.supersedes(&new));
    }

    #[test]
    fn resolves() {
        let now = util::time::now();
        let json = catalog_json(vec![btc_record(), brd_record()]);
        let catalog = CurrencyCatalog::from_json(&json, &Config::mainnet(), &now).unwrap();

        let (units, base, default) = btc_units();
        let btc = catalog.resolve(
            make_core("bitcoin-mainnet:__native__", "btc", "native"),
            make_network("bitcoin-mainnet", NetworkKind::Mainnet),
            units,
            base,
            default,
        ).unwrap();
        assert_eq!(btc.name(), "Bitcoin");
        assert_eq!(btc.fee_text(0), "Estimated Delivery: 1-24 hours");
        assert_eq!(btc, make_btc(NetworkKind::Mainnet));

        let (units, base, default) = btc_units();
        let res = catalog.resolve(
            make_core("ethereum-mainnet:__native__", "eth", "native"),
            make_network("ethereum-mainnet", NetworkKind::Mainnet),
            units,
            base,
            default,
        );
        assert_eq!(res.err(), Some(Error::MissingMetadata("ethereum-mainnet:__native__".into())));
    }

    #[test]
    fn round_trips() {
        let now = util::time::now();
        let json = catalog_json(vec![btc_record(), eth_record(), brd_record()]);
        let catalog = CurrencyCatalog::from_json(&json, &Config::mainnet(), &now).unwrap();
        let encoded = catalog.to_json().unwrap();
        let catalog2 = CurrencyCatalog::from_json(&encoded, &Config::mainnet(), &now).unwrap();
        assert_eq!(catalog.len(), catalog2.len());
        for (meta, meta2) in catalog.iter().zip(catalog2.iter()) {
            assert!(meta.same_content(meta2));
        }
    }
}
