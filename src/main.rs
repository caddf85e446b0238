use anyhow::Result;
use sap_assist::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
