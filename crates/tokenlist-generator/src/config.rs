use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;
use url::Url;

use crate::{Error, Result};

/// Network used when neither the config nor `CHAIN_ID` names one.
pub const DEFAULT_NETWORK_ID: u64 = 167012;

/// The public `config.json` shared with the web app.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    /// Keyed by decimal chain id, in file order.
    #[serde(default)]
    pub networks: Map<String, Value>,
    #[serde(default)]
    pub default_network_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NetworkEntry {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    rpc_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// The chain id exactly as written in the config key.
    pub id: String,
    pub chain_id: u64,
    pub name: Option<String>,
    /// Unparsed; only read when no override is given.
    pub rpc_url: Option<String>,
}

impl NetworkConfig {
    /// An override applies to every network alike. A configured `rpcUrl`
    /// that is empty or not a URL leaves the network without an endpoint.
    pub fn endpoint(&self, rpc_override: Option<&Url>) -> Option<Url> {
        if let Some(url) = rpc_override {
            return Some(url.clone());
        }

        let raw = self.rpc_url.as_deref().filter(|raw| !raw.is_empty())?;
        match raw.parse::<Url>() {
            Ok(url) => Some(url),
            Err(error) => {
                warn!(chain_id = self.chain_id, rpc_url = raw, %error, "Ignoring invalid rpcUrl");
                None
            }
        }
    }
}

impl PublicConfig {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| Error::Io {
                path: path.to_owned(),
                source,
            })?;

        serde_json::from_str(&raw).map_err(|source| Error::Json {
            path: path.to_owned(),
            source,
        })
    }

    pub fn networks(&self) -> Result<Vec<NetworkConfig>> {
        self.networks
            .iter()
            .map(|(id, value)| {
                let chain_id = id
                    .parse::<u64>()
                    .map_err(|_| Error::InvalidChainId(id.clone()))?;
                let entry = NetworkEntry::deserialize(value).map_err(|source| Error::Network {
                    id: id.clone(),
                    source,
                })?;

                Ok(NetworkConfig {
                    id: id.clone(),
                    chain_id,
                    name: entry.name,
                    rpc_url: entry.rpc_url,
                })
            })
            .collect()
    }
}
