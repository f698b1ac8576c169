//! Management command group, dispatched after database initialization.

use crate::api::{self, AppState, ROUTES};
use crate::config::Config;
use crate::db::{connect, Migrator};
use crate::repository::MemoryRepository;
use crate::seed::populate_db;
use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "hbnb", about = "HBnB management commands")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Seed reference data and serve the application
    Run {
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        host: IpAddr,
        /// Overrides PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Show the routes the server exposes
    Routes,
    /// Manage the database schema
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
    /// Populate an in-memory repository with seed data
    Seed,
}

#[derive(Debug, Subcommand, PartialEq, Eq, Clone, Copy)]
pub enum DbAction {
    /// Apply all pending migrations
    Upgrade,
    /// Revert the most recent migration
    Downgrade,
    /// Print the current revision
    Current,
}

pub async fn dispatch(cli: Cli, config: &Config) -> anyhow::Result<()> {
    match cli.command {
        Command::Run { host, port } => {
            run_server(config, SocketAddr::new(host, port.unwrap_or(config.port))).await
        }
        Command::Routes => {
            for (method, path) in ROUTES {
                println!("{:<6} {}", method, path);
            }
            Ok(())
        }
        Command::Db { action } => run_db(config, action).await,
        Command::Seed => {
            let repo = MemoryRepository::new();
            let count = populate_db(&repo).await?;
            println!("Seeded {} record(s)", count);
            Ok(())
        }
    }
}

async fn run_server(config: &Config, addr: SocketAddr) -> anyhow::Result<()> {
    let repo = Arc::new(MemoryRepository::new());
    populate_db(repo.as_ref()).await?;

    let app = api::create_router(AppState::new(repo, config.environment.clone()));
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server listening on {} ({})", addr, config.environment);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn run_db(config: &Config, action: DbAction) -> anyhow::Result<()> {
    let pool = connect(&config.database_url).await?;
    let migrator = Migrator::new(pool);

    match action {
        DbAction::Upgrade => {
            let applied = migrator.upgrade().await?;
            println!("Applied {} migration(s)", applied.len());
        }
        DbAction::Downgrade => match migrator.downgrade().await? {
            Some(revision) => println!("Reverted {}", revision),
            None => println!("Nothing to revert"),
        },
        DbAction::Current => {
            println!("{}", migrator.current().await?.unwrap_or("<base>"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_defaults() {
        let cli = Cli::try_parse_from(["hbnb", "run"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Run {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: None,
            }
        );
    }

    #[test]
    fn test_parse_run_with_port() {
        let cli = Cli::try_parse_from(["hbnb", "run", "--host", "0.0.0.0", "--port", "8000"])
            .unwrap();
        assert_eq!(
            cli.command,
            Command::Run {
                host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                port: Some(8000),
            }
        );
    }

    #[test]
    fn test_parse_db_actions() {
        let cli = Cli::try_parse_from(["hbnb", "db", "downgrade"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Db {
                action: DbAction::Downgrade
            }
        );
    }

    #[test]
    fn test_missing_subcommand_is_an_error() {
        assert!(Cli::try_parse_from(["hbnb"]).is_err());
        assert!(Cli::try_parse_from(["hbnb", "db"]).is_err());
    }

    #[tokio::test]
    async fn test_db_upgrade_and_downgrade_commands() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            environment: crate::config::Environment::Development,
            database_url: format!("sqlite:{}", temp_dir.path().join("cli.db").display()),
            port: 0,
        };

        run_db(&config, DbAction::Upgrade).await.unwrap();
        let pool = connect(&config.database_url).await.unwrap();
        assert_eq!(
            Migrator::new(pool.clone()).current().await.unwrap(),
            Some("18c39446000d")
        );

        run_db(&config, DbAction::Downgrade).await.unwrap();
        assert_eq!(Migrator::new(pool).current().await.unwrap(), None);
    }
}
