//! fastly-acme - list the ACME challenge records of Fastly TLS subscriptions.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    fastly_acme_cli::run().await
}
