use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::error::AppResult;

/// On-disk shape: `{ "networks": { "<name>": { host, port, network_id } } }`.
///
/// Entries are kept in file order, repeated names included, so the registry
/// can reject a name that appears twice instead of keeping the last one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    #[serde(with = "entries")]
    pub networks: Vec<(String, RawProfile)>,
}

impl NetworkDocument {
    pub fn entry(&self, name: &str) -> Option<&RawProfile> {
        self.networks
            .iter()
            .find(|(entry, _)| entry == name)
            .map(|(_, raw)| raw)
    }
}

/// Entry as written by the user. Fields stay untyped until the registry
/// validates them, so a bad port is reported against its profile name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<Value>,
}

mod entries {
    use super::*;

    pub fn serialize<S: Serializer>(
        entries: &[(String, RawProfile)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(entries.iter().map(|(name, raw)| (name, raw)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, RawProfile)>, D::Error> {
        deserializer.deserialize_map(EntriesVisitor)
    }

    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, RawProfile)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of profile names to connection parameters")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, RawProfile>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }
}

pub fn load(path: &Path) -> AppResult<NetworkDocument> {
    debug!(path = %path.display(), "reading network profiles");
    let raw = fs::read_to_string(path)?;
    let document = serde_json::from_str(&raw)?;
    Ok(document)
}

pub fn save(path: &Path, document: &NetworkDocument) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut payload = serde_json::to_string_pretty(document)?;
    payload.push('\n');
    fs::write(path, payload)?;
    Ok(())
}
