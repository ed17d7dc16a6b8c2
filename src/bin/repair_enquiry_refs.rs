// src/bin/repair_enquiry_refs.rs
use anyhow::{Context, Result};
use directory_core::domain::enquiry::ReferenceRepair;
use directory_core::infrastructure::{database, repositories::postgres_repositories};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Re-point enquiry items at the current slug of the product they were placed for.
#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sqlx=warn".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = database::init_pool(&database_url)
        .await
        .context("connecting to the database")?;
    database::run_migrations(&pool)
        .await
        .context("applying migrations")?;

    let repos = postgres_repositories(&pool);
    let repair = ReferenceRepair::new(repos.enquiry_reads, repos.enquiry_writes, repos.product_reads);
    let report = repair.run().await.context("repairing enquiry references")?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
