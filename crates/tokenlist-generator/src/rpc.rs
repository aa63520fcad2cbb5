use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::Result;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

const JSON_RPC_VERSION: &str = "2.0";
const REQUEST_ID: u64 = 1;

/// Builds the HTTP client shared by every network's [`RpcClient`].
pub fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder().timeout(timeout).build()?)
}

#[derive(Debug, Serialize)]
struct CallRequest<'a> {
    to: &'a str,
    data: &'a str,
}

#[derive(Debug, Serialize)]
struct EthCallRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'static str,
    params: (CallRequest<'a>, &'static str),
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<JsonRpcError>,
}

/// Read-only `eth_call` access to one network's node.
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: Option<Url>,
}

impl RpcClient {
    pub fn new(http: reqwest::Client, endpoint: Option<Url>) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> Option<&Url> {
        self.endpoint.as_ref()
    }

    /// Returns the raw hex `result` of an `eth_call` against the latest block.
    ///
    /// Every failure (no endpoint, transport error, timeout, non-2xx status,
    /// malformed body, JSON-RPC error, missing result) is logged and reported
    /// as `None`. There is a single attempt per call.
    pub async fn eth_call(&self, to: &str, data: &str) -> Option<String> {
        let Some(endpoint) = &self.endpoint else {
            debug!(to, data, "No RPC endpoint configured, skipping eth_call");
            return None;
        };

        let request = EthCallRequest {
            jsonrpc: JSON_RPC_VERSION,
            id: REQUEST_ID,
            method: "eth_call",
            params: (CallRequest { to, data }, "latest"),
        };

        let response = match self
            .http
            .post(endpoint.clone())
            .json(&request)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
        {
            Ok(response) => response,
            Err(error) => {
                warn!(to, data, %error, "eth_call request failed");
                return None;
            }
        };

        let body = match response.json::<JsonRpcResponse>().await {
            Ok(body) => body,
            Err(error) => {
                warn!(to, data, %error, "eth_call returned an invalid body");
                return None;
            }
        };

        if let Some(error) = body.error {
            debug!(to, data, code = error.code, reason = %error.message, "eth_call reverted");
        }

        match body.result {
            Some(Value::String(result)) => Some(result),
            other => {
                debug!(to, data, result = ?other, "eth_call returned no result");
                None
            }
        }
    }
}
