use alloy::{
    primitives::{hex, U256},
    sol_types::SolCall,
};
use tracing::debug;

use crate::{
    abi::{decode_hex, decode_string, decode_uint},
    interfaces::IERC20Metadata,
    rpc::RpcClient,
};

pub const DEFAULT_DECIMALS: u8 = 18;
pub const MAX_DECIMALS: u8 = 36;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

impl TokenMetadata {
    /// Fills every field the chain did not answer with a value derived from
    /// the address, so no record ever carries an empty name or symbol.
    pub fn with_fallbacks(
        address: &str,
        name: Option<String>,
        symbol: Option<String>,
        decimals: Option<U256>,
    ) -> Self {
        let name = name.unwrap_or_else(|| {
            debug!(address, "Falling back to address prefix for name");
            address.chars().take(6).collect()
        });
        let symbol = symbol.unwrap_or_else(|| {
            debug!(address, "Falling back to address prefix for symbol");
            address.chars().take(4).collect::<String>().to_uppercase()
        });
        let decimals = decimals
            .and_then(|value| u8::try_from(value).ok())
            .filter(|value| *value <= MAX_DECIMALS)
            .unwrap_or_else(|| {
                debug!(address, ?decimals, "Falling back to default decimals");
                DEFAULT_DECIMALS
            });

        Self {
            name,
            symbol,
            decimals,
        }
    }
}

async fn call(client: &RpcClient, address: &str, selector: [u8; 4]) -> Option<Vec<u8>> {
    let result = client
        .eth_call(address, &hex::encode_prefixed(selector))
        .await?;
    decode_hex(&result)
}

/// Reads `name()`, `symbol()` and `decimals()` of the token at `address`.
pub async fn resolve(client: &RpcClient, address: &str) -> TokenMetadata {
    let name = call(client, address, IERC20Metadata::nameCall::SELECTOR)
        .await
        .and_then(|data| decode_string(&data));
    let symbol = call(client, address, IERC20Metadata::symbolCall::SELECTOR)
        .await
        .and_then(|data| decode_string(&data));
    let decimals = call(client, address, IERC20Metadata::decimalsCall::SELECTOR)
        .await
        .and_then(|data| decode_uint(&data));

    TokenMetadata::with_fallbacks(address, name, symbol, decimals)
}
