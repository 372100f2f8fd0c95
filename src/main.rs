use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = netprofiles::cli::Cli::parse();

    if let Err(err) = netprofiles::run(cli).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
