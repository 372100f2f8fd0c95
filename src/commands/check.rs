use std::time::Duration;

use crate::cli::CheckArgs;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::rpc::{self, NodeReport};

pub async fn run(ctx: &AppContext, args: CheckArgs) -> AppResult<()> {
    if args.timeout == 0 {
        return Err(AppError::InvalidInput(
            "--timeout must be greater than 0".to_string(),
        ));
    }

    let registry = ctx.registry()?;
    let profile = registry.get(&args.name)?;
    let report = rpc::check_node(profile, Duration::from_secs(args.timeout)).await?;

    ctx.output.emit(&summarize(&report), &report)
}

fn summarize(report: &NodeReport) -> String {
    let verdict = if report.network_id_matches {
        "matches profile".to_string()
    } else {
        format!("expected {}", report.expected_network_id)
    };

    format!(
        "{}: {} at {} (network id {}, {})",
        report.profile,
        report.client_version,
        report.endpoint,
        report.reported_network_id,
        verdict
    )
}
