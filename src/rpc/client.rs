use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use url::{Host, Url};

use crate::error::{AppError, AppResult};

use super::models::{RpcRequest, RpcResponse};

const CLIENT_VERSION_METHOD: &str = "web3_clientVersion";
const NET_VERSION_METHOD: &str = "net_version";

#[derive(Debug)]
pub struct RpcClient {
    http: Client,
    endpoint: Url,
    next_id: AtomicU64,
}

impl RpcClient {
    /// Proxies from the environment apply to remote nodes only; a node on the
    /// loopback interface is always dialed directly.
    pub fn new(endpoint: Url, timeout: Duration) -> AppResult<Self> {
        let mut builder = Client::builder().timeout(timeout);
        if is_loopback(&endpoint) {
            builder = builder.no_proxy();
        }
        let http = builder.build()?;
        Ok(Self {
            http,
            endpoint,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn client_version(&self) -> AppResult<String> {
        self.call(CLIENT_VERSION_METHOD).await
    }

    pub async fn net_version(&self) -> AppResult<u64> {
        let raw: String = self.call(NET_VERSION_METHOD).await?;
        parse_net_version(&raw)
    }

    async fn call<T: DeserializeOwned>(&self, method: &str) -> AppResult<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(endpoint = %self.endpoint, method, id, "sending rpc request");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&RpcRequest::new(id, method))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(method, status, &body));
        }

        let envelope: RpcResponse<T> = response.json().await?;
        envelope.into_result(method)
    }
}

fn is_loopback(endpoint: &Url) -> bool {
    match endpoint.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(address)) => address.is_loopback(),
        Some(Host::Ipv6(address)) => address.is_loopback(),
        None => false,
    }
}

fn parse_net_version(raw: &str) -> AppResult<u64> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };

    parsed.map_err(|_| AppError::Rpc(format!("{NET_VERSION_METHOD} returned \"{raw}\"")))
}

fn map_http_error(method: &str, status: StatusCode, body: &str) -> AppError {
    let body = body.trim();
    if body.is_empty() {
        return AppError::Rpc(format!("{method} request failed with http {status}"));
    }

    AppError::Rpc(format!("{method} request failed with http {status}: {body}"))
}
