use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::AppError;
use crate::registry::NetworkId;

const JSONRPC_VERSION: &str = "2.0";

#[derive(Debug, Clone, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub method: &'a str,
    pub params: [Value; 0],
    pub id: u64,
}

impl<'a> RpcRequest<'a> {
    pub fn new(id: u64, method: &'a str) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            method,
            params: [],
            id,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

impl<T> RpcResponse<T> {
    pub fn into_result(self, method: &str) -> Result<T, AppError> {
        if let Some(error) = self.error {
            return Err(AppError::Rpc(format!(
                "{method} failed with code {}: {}",
                error.code, error.message
            )));
        }

        self.result
            .ok_or_else(|| AppError::Rpc(format!("{method} returned no result")))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeReport {
    pub profile: String,
    pub endpoint: String,
    pub client_version: String,
    pub expected_network_id: NetworkId,
    pub reported_network_id: u64,
    pub network_id_matches: bool,
}
