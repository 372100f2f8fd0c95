use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::text;

pub fn run(ctx: &AppContext) -> AppResult<()> {
    let registry = ctx.registry()?;
    let profiles = registry.profiles().collect::<Vec<_>>();

    let lines = if profiles.is_empty() {
        vec!["0 profiles".to_string()]
    } else {
        text::profile_table(&profiles)
    };

    ctx.output.emit_lines(&lines, &profiles)
}
