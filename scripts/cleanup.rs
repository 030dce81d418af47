//! Run with: cargo run --bin cleanup
//!
//! Wipes customer requests, vendor registrations and vendor users so the
//! admin dashboard starts empty. Set CLEANUP_POLICY=keep-admin to delete
//! every non-admin account instead of only vendor-linked ones.

use anyhow::Context;
use dashboard_reset::config::database::{self, DatabaseConfig};
use dashboard_reset::{exit_status, run_and_close, CleanupConfig, CleanupPolicy, EXIT_FAILURE};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("❌ {:#}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let config = CleanupConfig::from_env().context("Invalid cleanup configuration")?;
    let db_config = DatabaseConfig::from_env().context("Invalid database configuration")?;

    println!("🚀 Starting database cleanup...");
    match config.policy {
        CleanupPolicy::CascadeByVendorReference => {
            println!("⚠️  WARNING: This will delete ALL customer requests and vendor data!");
        }
        CleanupPolicy::KeepAdminOnly => {
            println!(
                "⚠️  WARNING: This will delete ALL customer requests, vendors and non-admin users!"
            );
            println!("   Admin accounts will be kept.");
        }
    }
    println!();

    println!("Connecting to MongoDB...");
    let store = database::connect(&db_config)
        .await
        .context("Failed to connect to MongoDB")?;
    println!("✅ Connected to MongoDB\n");

    let outcome = run_and_close(&store, &config).await;
    match &outcome {
        Ok(summary) => {
            println!("\n{}", summary);
            println!("\n🔌 Database connection closed");
        }
        Err(e) => error!("❌ Error during cleanup: {}", e),
    }

    Ok(ExitCode::from(exit_status(&outcome)))
}
