use anyhow::Result;
use tracing_subscriber::EnvFilter;
use utilrep::commands::Cli;

fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }
    Cli::menu()
}
