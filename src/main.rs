use clap::Parser;
use hbnb::bootstrap::{initialize_database, SystemCommandRunner};
use hbnb::cli::{dispatch, Cli};
use hbnb::{config::Config, db::SqliteAdmin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = Config::from_env()?;

    initialize_database(&config, &SqliteAdmin, &SystemCommandRunner).await?;

    dispatch(Cli::parse(), &config).await
}
