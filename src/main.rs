use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use playerfeed::settings;

mod cmd;

use cmd::Cmd;

fn setup_logger(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("playerfeed={level}")));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cmd = Cmd::parse();
    setup_logger(&settings::log_level());

    if let Err(e) = cmd.run().await {
        tracing::error!(error = %e, "playerfeed failed");
        return Err(e);
    }

    Ok(())
}
