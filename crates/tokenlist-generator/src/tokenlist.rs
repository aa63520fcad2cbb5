use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::{
    config::{NetworkConfig, PublicConfig},
    resolver::{self, TokenMetadata},
    rpc::{self, RpcClient},
    scanner::{self, TokenImage},
    Error, Result,
};

pub const DEFAULT_LIST_NAME: &str = "KasPlex Testnet Tokens (KRChange)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const CURRENT: Self = Self {
        major: 0,
        minor: 1,
        patch: 0,
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRecord {
    pub address: String,
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
    pub chain_id: u64,
    #[serde(rename = "logoURI")]
    pub logo_uri: String,
}

impl TokenRecord {
    pub fn new(network: &NetworkConfig, image: &TokenImage, metadata: TokenMetadata) -> Self {
        Self {
            address: image.address.clone(),
            symbol: metadata.symbol,
            name: metadata.name,
            decimals: metadata.decimals,
            chain_id: network.chain_id,
            logo_uri: format!("/tokens/{}/{}", network.id, image.file_name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenList {
    pub name: String,
    /// ISO-8601, UTC, `Z` suffixed.
    pub timestamp: String,
    pub version: Version,
    pub tokens: Vec<TokenRecord>,
}

impl TokenList {
    pub fn new(name: impl Into<String>, tokens: Vec<TokenRecord>) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            version: Version::CURRENT,
            tokens,
        }
    }

    /// Replaces whatever is at `path` with the pretty-printed list.
    pub async fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::Json {
            path: path.to_owned(),
            source,
        })?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| Error::Io {
                    path: parent.to_owned(),
                    source,
                })?;
        }

        tokio::fs::write(path, json)
            .await
            .map_err(|source| Error::Io {
                path: path.to_owned(),
                source,
            })
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Root holding one `<chain id>/` directory of logos per network.
    pub tokens_dir: PathBuf,
    /// Replaces every network's `rpcUrl` when set.
    pub rpc_override: Option<Url>,
    pub list_name: String,
    pub timeout: Duration,
}

impl GenerateOptions {
    pub fn new(tokens_dir: impl Into<PathBuf>) -> Self {
        Self {
            tokens_dir: tokens_dir.into(),
            rpc_override: None,
            list_name: DEFAULT_LIST_NAME.to_owned(),
            timeout: rpc::DEFAULT_TIMEOUT,
        }
    }
}

/// Resolves every logo of every configured network, one call at a time.
///
/// Networks keep config file order and tokens keep file name order, so two
/// runs over the same inputs differ only in `timestamp`.
pub async fn generate(config: &PublicConfig, options: &GenerateOptions) -> Result<TokenList> {
    let http = rpc::http_client(options.timeout)?;
    let mut tokens = Vec::new();

    for network in config.networks()? {
        let images = scanner::scan(&options.tokens_dir, &network.id).await?;
        if images.is_empty() {
            continue;
        }

        let client = RpcClient::new(
            http.clone(),
            network.endpoint(options.rpc_override.as_ref()),
        );
        info!(
            chain_id = network.chain_id,
            name = network.name.as_deref().unwrap_or_default(),
            endpoint = client.endpoint().map(Url::as_str).unwrap_or_default(),
            tokens = images.len(),
            "Resolving network tokens"
        );

        for image in &images {
            let metadata = resolver::resolve(&client, &image.address).await;
            debug!(chain_id = network.chain_id, address = %image.address, ?metadata, "Resolved token");
            tokens.push(TokenRecord::new(&network, image, metadata));
        }
    }

    Ok(TokenList::new(options.list_name.clone(), tokens))
}
