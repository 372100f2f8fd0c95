use serde::Serialize;

use crate::cli::ProfileArgs;
use crate::context::AppContext;
use crate::error::AppResult;

#[derive(Debug, Serialize)]
struct EndpointView<'a> {
    profile: &'a str,
    url: String,
}

pub fn run(ctx: &AppContext, args: ProfileArgs) -> AppResult<()> {
    let registry = ctx.registry()?;
    let profile = registry.get(&args.name)?;
    let url = profile.rpc_url()?;

    let view = EndpointView {
        profile: profile.name(),
        url: url.to_string(),
    };
    ctx.output.emit(url.as_str(), &view)
}
