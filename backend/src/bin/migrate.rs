//! Apply the embedded database migrations and exit.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::{WrapErr, eyre};
use user_service::outbound::persistence::run_pending_migrations;

const URL_VARS: [&str; 2] = ["USERS_DATABASE_URL", "DATABASE_URL"];

/// `migrate` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "migrate", about = "Apply pending user service migrations", version)]
struct CliArgs {
    /// Database connection URL. Falls back to `USERS_DATABASE_URL`, then
    /// `DATABASE_URL`.
    #[arg(long = "database-url", value_name = "url")]
    database_url: Option<String>,
}

fn resolve_database_url(
    explicit: Option<String>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String> {
    if let Some(value) = explicit {
        if value.trim().is_empty() {
            return Err(eyre!("--database-url must not be empty when provided"));
        }
        return Ok(value);
    }

    URL_VARS
        .iter()
        .find_map(|name| lookup(name).filter(|value| !value.trim().is_empty()))
        .ok_or_else(|| eyre!("database URL missing: set --database-url or DATABASE_URL"))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = CliArgs::parse();
    let url = resolve_database_url(args.database_url, |name| env::var(name).ok())?;

    let applied = run_pending_migrations(&url).wrap_err("migration run failed")?;
    if applied.is_empty() {
        println!("schema already up to date");
    }
    for version in applied {
        println!("applied {version}");
    }
    Ok(())
}
