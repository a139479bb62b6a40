pub mod account;
pub mod environment;
pub mod lookup;
pub mod storage;

pub use account::AccountContext;
pub use lookup::LookupConfig;
pub use storage::{LocalStoreConfig, SsmStoreConfig, StoreBackend, StoreConfig};

#[async_trait::async_trait]
pub trait Configs: Sized {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>>;
}

#[derive(Debug)]
pub struct ParameterLookupConfig {
    pub lookup_config: LookupConfig,
    pub account_context: AccountContext,
    pub store_config: StoreConfig,
}

#[async_trait::async_trait]
impl Configs for ParameterLookupConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self {
            lookup_config: LookupConfig::load().await?,
            account_context: AccountContext::load().await?,
            store_config: StoreConfig::load().await?,
        })
    }
}
