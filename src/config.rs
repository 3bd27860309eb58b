//! Runtime settings that change how currency metadata is decoded.
//!
//! These are passed explicitly into anything that needs them, so decoding is a
//! pure function of its input and a `Config`.

use crate::{
    error::{Error, Result},
    network::NetworkKind,
};
use getset::CopyGetters;
use serde::{Serialize, Deserialize};

#[derive(Clone, Debug, PartialEq, CopyGetters, derive_builder::Builder, Serialize, Deserialize)]
#[builder(pattern = "owned", setter(into))]
#[getset(get_copy = "pub")]
#[serde(default)]
pub struct Config {
    /// Which network ids in the catalog should resolve to.
    #[builder(default)]
    network: NetworkKind,
    /// Strict decoding fails records that lenient decoding would patch over
    /// with defaults. Meant for debug builds.
    #[builder(default)]
    strict: bool,
    /// Pull icons from the staging asset bundle.
    #[builder(default)]
    staging_assets: bool,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn mainnet() -> Self {
        Self::default()
    }

    pub fn testnet() -> Self {
        Self {
            network: NetworkKind::Testnet,
            ..Self::default()
        }
    }

    /// Strict decoding and staging assets on the given network.
    pub fn debug(network: NetworkKind) -> Self {
        Self {
            network,
            strict: true,
            staging_assets: true,
        }
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::DecodeFailed(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkKind::Mainnet,
            strict: false,
            staging_assets: false,
        }
    }
}

impl ConfigBuilder {
    /// Build, mapping builder errors into our error type.
    pub fn finish(self) -> Result<Config> {
        self.build().map_err(|e| Error::BuilderFailed(e))
    }
}
