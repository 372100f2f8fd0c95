use serde::Serialize;
use tracing::info;

use crate::cli::InitArgs;
use crate::config::document;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::registry::NetworkProfileRegistry;

#[derive(Debug, Serialize)]
struct InitResult {
    path: String,
    profiles: Vec<String>,
}

pub fn run(ctx: &AppContext, args: InitArgs) -> AppResult<()> {
    let path = ctx.source.path();
    if path.exists() && !args.force {
        return Err(AppError::InvalidInput(format!(
            "{} already exists; pass --force to overwrite",
            path.display()
        )));
    }

    let registry = NetworkProfileRegistry::builtin();
    document::save(path, &registry.to_document())?;
    info!(path = %path.display(), profiles = registry.len(), "wrote networks file");

    let result = InitResult {
        path: path.display().to_string(),
        profiles: registry.names().into_iter().map(str::to_string).collect(),
    };
    let text = format!("wrote {} profiles to {}", registry.len(), result.path);
    ctx.output.emit(&text, &result)
}
