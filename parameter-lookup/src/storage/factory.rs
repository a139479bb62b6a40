use std::sync::Arc;

use tracing::info;

use crate::{
    configs::{StoreBackend, StoreConfig},
    storage::{
        adapters::{local_storage::LocalParameterStore, ssm_storage::SsmParameterStore},
        repository::ParameterStore,
    },
};

pub struct ParameterStoreFactory {
    config: StoreConfig,
}

impl ParameterStoreFactory {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub async fn create(
        &self,
    ) -> Result<Arc<dyn ParameterStore>, Box<dyn std::error::Error + Send + Sync>> {
        let store: Arc<dyn ParameterStore> = match self.config.store_backend {
            StoreBackend::Ssm => {
                info!("Using SSM parameter store");
                Arc::new(SsmParameterStore::new(self.config.ssm_store_config.clone()).await)
            }
            StoreBackend::Local => {
                let path = &self.config.local_store_config.path;
                let local_store = LocalParameterStore::from_file(path).await?;
                info!(
                    "Using local parameter store seeded from {} ({} parameters)",
                    path,
                    local_store.parameter_count().await
                );
                Arc::new(local_store)
            }
        };

        Ok(store)
    }
}
