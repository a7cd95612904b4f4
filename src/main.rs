use anyhow::Result;

use telex::run_cli;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    run_cli(&args).await
}
