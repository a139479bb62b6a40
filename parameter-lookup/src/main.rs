use anyhow::{Context, anyhow};
use dotenvy::dotenv;
use parameter_lookup::runner::{load_and_run, setup_logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    setup_logging();

    let result = load_and_run().await.map_err(|e| anyhow!(e))?;
    let output =
        serde_json::to_string_pretty(&result).context("Failed to serialize lookup result")?;
    println!("{}", output);

    Ok(())
}
