use dotenvy::dotenv;

mod check;
mod config;
mod db;
mod error;
mod models;

use crate::config::DbConfig;
use crate::models::report::failure_message;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    println!("--- DB Connection Check ---");

    let config = DbConfig::from_env()?;
    println!("Target: {}", config.target());

    // A failed check is reported, not propagated; the process still exits cleanly.
    match check::run(&config).await {
        Ok(report) => {
            println!("{}", report);
            println!("--- Connection Closed ---");
        }
        Err(e) => {
            tracing::debug!("Connectivity check failed: {:?}", e);
            println!("{}", failure_message(&e));
        }
    }

    Ok(())
}
