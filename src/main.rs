//! GameHub Client - binary entry point

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    gamehub::cli::run().await
}
