// src/bin/write_openapi_snapshot.rs
use anyhow::{Context, Result};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    vecinal_core::presentation::http::openapi::write_openapi_snapshot()
        .context("failed to write OpenAPI snapshot")?;
    let output_path = std::env::var("OPENAPI_SNAPSHOT_PATH")
        .unwrap_or_else(|_| "spec/openapi.json".to_string());
    println!("OpenAPI snapshot written to {output_path}");
    Ok(())
}
