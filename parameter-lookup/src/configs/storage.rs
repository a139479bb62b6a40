use std::env;

use super::{Configs, account::DEFAULT_REGION};

const DEFAULT_LOCAL_STORE_PATH: &str = "parameters.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Ssm,
    Local,
}

#[derive(Debug, Clone, Default)]
pub struct SsmStoreConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct LocalStoreConfig {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub store_backend: StoreBackend,
    pub ssm_store_config: SsmStoreConfig,
    pub local_store_config: LocalStoreConfig,
}

fn load_store_backend() -> Result<StoreBackend, String> {
    let store_backend_str = env::var("PARAMETER_STORE_BACKEND")
        .unwrap_or("ssm".to_string())
        .to_lowercase();
    match store_backend_str.as_str() {
        "ssm" | "aws" => Ok(StoreBackend::Ssm),
        "local" | "file" => Ok(StoreBackend::Local),
        other => Err(format!("Unknown parameter store backend: {other}")),
    }
}

#[async_trait::async_trait]
impl Configs for SsmStoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(SsmStoreConfig {
            region: Some(
                env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            ),
            profile: env::var("AWS_PROFILE").ok(),
            endpoint_url: env::var("AWS_ENDPOINT")
                .or_else(|_| env::var("SSM_ENDPOINT"))
                .ok(),
        })
    }
}

#[async_trait::async_trait]
impl Configs for LocalStoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(LocalStoreConfig {
            path: env::var("LOCAL_STORE_PATH")
                .unwrap_or_else(|_| DEFAULT_LOCAL_STORE_PATH.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl Configs for StoreConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let store_backend = load_store_backend()?;
        let (ssm_store_config, local_store_config) = match store_backend {
            StoreBackend::Ssm => (SsmStoreConfig::load().await?, Default::default()),
            StoreBackend::Local => (Default::default(), LocalStoreConfig::load().await?),
        };

        Ok(StoreConfig {
            store_backend,
            ssm_store_config,
            local_store_config,
        })
    }
}
