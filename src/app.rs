use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        config,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose);
    let ctx = AppContext::bootstrap(config, json)?;

    match command {
        Command::List => commands::list::run(&ctx),
        Command::Get(args) => commands::get::run(&ctx, args),
        Command::Url(args) => commands::url::run(&ctx, args),
        Command::Check(args) => commands::check::run(&ctx, args).await,
        Command::Init(args) => commands::init::run(&ctx, args),
    }
}
