use clap::Parser;
use flux_reconcile::config::{Config, KEY_ENV_VAR, Opt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let opt = Opt::parse();
    let key_env = std::env::var(KEY_ENV_VAR).ok();
    let config = Config::resolve(opt, key_env)?;
    flux_reconcile::run(&config)?;

    Ok(())
}
