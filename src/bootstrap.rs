//! Database initialization run before the command group takes over.
//!
//! Development creates the configured database when it is missing.
//! Production hands a fixed SQL script to `psql`. Any other environment is
//! left alone.

use crate::config::{Config, Environment};
use crate::db::DatabaseAdmin;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;
use tracing::{info, warn};

pub const PRODUCTION_DATABASE: &str = "hbnb_prod";
pub const PRODUCTION_USER: &str = "user";
pub const PRODUCTION_SCRIPT: &str = "SQL/db.sql";

/// An external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalCommand {
    /// `psql -U user -d hbnb_prod -f SQL/db.sql`
    pub fn production_init() -> Self {
        Self {
            program: "psql".to_string(),
            args: [
                "-U",
                PRODUCTION_USER,
                "-d",
                PRODUCTION_DATABASE,
                "-f",
                PRODUCTION_SCRIPT,
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Runs external programs to completion.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` and return its exit code (`None` if killed by a signal).
    async fn run(&self, command: &ExternalCommand) -> std::io::Result<Option<i32>>;
}

/// `CommandRunner` that spawns real processes, inheriting stdio.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, command: &ExternalCommand) -> std::io::Result<Option<i32>> {
        let status = tokio::process::Command::new(&command.program)
            .args(&command.args)
            .status()
            .await?;
        Ok(status.code())
    }
}

/// What [`initialize_database`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitOutcome {
    /// Development database was missing and has been created.
    Created,
    /// Development database already existed.
    AlreadyPresent,
    /// The production script was handed to `psql`. Its result is not checked.
    ProductionScriptRun,
    /// Unrecognised environment; nothing was done.
    Skipped(String),
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Prepare the database for the configured environment.
///
/// # Errors
/// Returns an error if the development existence check or creation fails.
/// The production command's exit status and spawn errors are logged only.
pub async fn initialize_database(
    config: &Config,
    admin: &dyn DatabaseAdmin,
    runner: &dyn CommandRunner,
) -> Result<InitOutcome, BootstrapError> {
    match &config.environment {
        Environment::Development => {
            if admin.database_exists(&config.database_url).await? {
                return Ok(InitOutcome::AlreadyPresent);
            }
            admin.create_database(&config.database_url).await?;
            info!("Development database created.");
            Ok(InitOutcome::Created)
        }
        Environment::Production => {
            let command = ExternalCommand::production_init();
            match runner.run(&command).await {
                Ok(Some(0)) => {}
                Ok(code) => warn!(?code, "`{}` exited unsuccessfully", command),
                Err(e) => warn!("Failed to run `{}`: {}", command, e),
            }
            info!("Production database initialized.");
            Ok(InitOutcome::ProductionScriptRun)
        }
        Environment::Other(name) => Ok(InitOutcome::Skipped(name.clone())),
    }
}
