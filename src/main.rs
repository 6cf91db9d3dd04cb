use clap::Parser;
use sans_indexer::cli::Cli;
use sans_indexer::logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_logging(cli.verbose);
    tracing::info!("sans-indexer starting...");

    cli.run().await
}
