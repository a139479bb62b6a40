use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    configs::{Configs, ParameterLookupConfig},
    domain::LookupResult,
    lookup::ParameterLookup,
    storage::factory::ParameterStoreFactory,
};

pub fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()) // reads RUST_LOG
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .try_init();
}

pub async fn run(
    config: ParameterLookupConfig,
) -> Result<LookupResult, Box<dyn std::error::Error + Send + Sync>> {
    debug!("CONFIGS: {:?}", &config);

    let store = ParameterStoreFactory::new(config.store_config.clone())
        .create()
        .await?;
    let lookup = ParameterLookup::new(store, config.account_context.clone());

    let request = config.lookup_config.request();
    info!("Resolving parameter {}", request.name);

    Ok(lookup.resolve(&request).await?)
}

pub async fn load_and_run() -> Result<LookupResult, Box<dyn std::error::Error + Send + Sync>> {
    let config = ParameterLookupConfig::load().await?;
    run(config).await
}
