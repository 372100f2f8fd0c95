pub mod client;
pub mod models;

use std::time::Duration;

use tracing::{info, warn};

pub use client::RpcClient;
pub use models::NodeReport;

use crate::error::AppResult;
use crate::registry::NetworkProfile;

/// Asks the node behind `profile` for its client version and network id.
pub async fn check_node(profile: &NetworkProfile, timeout: Duration) -> AppResult<NodeReport> {
    let client = RpcClient::new(profile.rpc_url()?, timeout)?;
    let client_version = client.client_version().await?;
    let reported_network_id = client.net_version().await?;
    let network_id_matches = profile.network_id().matches(reported_network_id);

    if network_id_matches {
        info!(profile = profile.name(), %client_version, reported_network_id, "node reachable");
    } else {
        warn!(
            profile = profile.name(),
            expected = %profile.network_id(),
            reported_network_id,
            "node reports a different network id"
        );
    }

    Ok(NodeReport {
        profile: profile.name().to_string(),
        endpoint: client.endpoint().to_string(),
        client_version,
        expected_network_id: profile.network_id().clone(),
        reported_network_id,
        network_id_matches,
    })
}
