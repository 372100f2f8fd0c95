use crate::cli::ProfileArgs;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::text;

pub fn run(ctx: &AppContext, args: ProfileArgs) -> AppResult<()> {
    let registry = ctx.registry()?;
    let profile = registry.get(&args.name)?;

    ctx.output.emit(&text::describe_profile(profile), profile)
}
