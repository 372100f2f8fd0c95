use serde::Serialize;
use serde_json::Value;
use url::{Host, Url};

use crate::config::RawProfile;

use super::RegistryError;
use super::network_id::{NetworkId, json_kind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    name: String,
    host: String,
    port: u16,
    network_id: NetworkId,
}

impl NetworkProfile {
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        network_id: NetworkId,
    ) -> Result<Self, RegistryError> {
        let name = name.into();
        let raw = RawProfile {
            host: Some(Value::from(host.into())),
            port: Some(Value::from(port)),
            network_id: Some(network_id.to_value()),
        };
        Self::from_raw(&name, &raw)
    }

    /// Builds a profile from its configuration entry, rejecting anything a
    /// client could not connect with.
    pub fn from_raw(name: &str, raw: &RawProfile) -> Result<Self, RegistryError> {
        let invalid = |reason: String| RegistryError::InvalidProfile {
            name: name.to_string(),
            reason,
        };

        if name.trim().is_empty() {
            return Err(invalid("profile name must not be empty".to_string()));
        }

        let host = parse_host(raw.host.as_ref()).map_err(invalid)?;
        let port = parse_port(raw.port.as_ref()).map_err(invalid)?;
        let network_id = NetworkId::from_value(raw.network_id.as_ref().unwrap_or(&Value::Null))
            .map_err(invalid)?;

        Ok(Self {
            name: name.to_string(),
            host,
            port,
            network_id,
        })
    }

    pub(super) fn from_parts(name: &str, host: &str, port: u16, network_id: NetworkId) -> Self {
        Self {
            name: name.to_string(),
            host: host.to_string(),
            port,
            network_id,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn network_id(&self) -> &NetworkId {
        &self.network_id
    }

    /// HTTP JSON-RPC endpoint for this profile.
    pub fn rpc_url(&self) -> Result<Url, url::ParseError> {
        let host = if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        Url::parse(&format!("http://{host}:{}/", self.port))
    }

    pub fn to_raw(&self) -> RawProfile {
        RawProfile {
            host: Some(Value::from(self.host.as_str())),
            port: Some(Value::from(self.port)),
            network_id: Some(self.network_id.to_value()),
        }
    }
}

fn parse_host(value: Option<&Value>) -> Result<String, String> {
    let host = match value {
        None | Some(Value::Null) => return Err("missing host".to_string()),
        Some(Value::String(host)) => host.trim(),
        Some(other) => return Err(format!("host must be a string, got {}", json_kind(other))),
    };

    if host.is_empty() {
        return Err("host must not be empty".to_string());
    }

    let candidate = if host.contains(':') && !host.starts_with('[') {
        format!("[{host}]")
    } else {
        host.to_string()
    };

    Host::parse(&candidate)
        .map_err(|err| format!("host `{host}` is not a valid hostname or IP literal: {err}"))?;

    Ok(host.to_string())
}

fn parse_port(value: Option<&Value>) -> Result<u16, String> {
    let number = match value {
        None | Some(Value::Null) => return Err("missing port".to_string()),
        Some(Value::Number(number)) => number,
        Some(other) => {
            return Err(format!(
                "port must be an integer, got {} {other}",
                json_kind(other)
            ));
        }
    };

    number
        .as_u64()
        .and_then(|port| u16::try_from(port).ok())
        .filter(|port| *port != 0)
        .ok_or_else(|| format!("port must be between 1 and 65535, got {number}"))
}
