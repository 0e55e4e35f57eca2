use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    techbot::cli::run().await
}
