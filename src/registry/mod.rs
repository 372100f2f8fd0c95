//! Immutable lookup table of network profiles.
//!
//! A [`NetworkProfileRegistry`] is validated once when it is built and never
//! changes afterwards, so it can be shared freely between readers.

pub mod network_id;
pub mod profile;

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::config::{self, NetworkDocument};
use crate::error::AppResult;

pub use network_id::NetworkId;
pub use profile::NetworkProfile;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("invalid profile `{name}`: {reason}")]
    InvalidProfile { name: String, reason: String },
    #[error("profile not found: {0}")]
    ProfileNotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkProfileRegistry {
    profiles: BTreeMap<String, NetworkProfile>,
}

impl NetworkProfileRegistry {
    /// The `kovan` and `development` networks that ship with the tool.
    pub fn builtin() -> Self {
        let profiles = [
            NetworkProfile::from_parts("kovan", "localhost", 8545, NetworkId::Number(42)),
            NetworkProfile::from_parts(
                "development",
                "localhost",
                8110,
                NetworkId::Text("567345".to_string()),
            ),
        ];

        Self {
            profiles: profiles
                .into_iter()
                .map(|profile| (profile.name().to_string(), profile))
                .collect(),
        }
    }

    pub fn from_profiles(
        profiles: impl IntoIterator<Item = NetworkProfile>,
    ) -> Result<Self, RegistryError> {
        let mut table = BTreeMap::new();
        for profile in profiles {
            let name = profile.name().to_string();
            if table.insert(name.clone(), profile).is_some() {
                return Err(RegistryError::InvalidProfile {
                    name,
                    reason: "duplicate profile name".to_string(),
                });
            }
        }

        Ok(Self { profiles: table })
    }

    pub fn from_document(document: &NetworkDocument) -> Result<Self, RegistryError> {
        let profiles = document
            .networks
            .iter()
            .map(|(name, raw)| NetworkProfile::from_raw(name, raw))
            .collect::<Result<Vec<_>, _>>()?;

        let registry = Self::from_profiles(profiles)?;
        debug!(profiles = registry.len(), "network profile registry built");
        Ok(registry)
    }

    pub fn from_json_str(raw: &str) -> AppResult<Self> {
        let document: NetworkDocument = serde_json::from_str(raw)?;
        Ok(Self::from_document(&document)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let document = config::document::load(path)?;
        Ok(Self::from_document(&document)?)
    }

    pub fn get(&self, name: &str) -> Result<&NetworkProfile, RegistryError> {
        self.profiles
            .get(name)
            .ok_or_else(|| RegistryError::ProfileNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Profile names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &NetworkProfile> {
        self.profiles.values()
    }

    /// `(name, profile)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NetworkProfile)> {
        self.profiles
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn to_document(&self) -> NetworkDocument {
        NetworkDocument {
            networks: self
                .iter()
                .map(|(name, profile)| (name.to_string(), profile.to_raw()))
                .collect(),
        }
    }
}
