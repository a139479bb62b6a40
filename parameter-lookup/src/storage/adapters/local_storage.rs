use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::domain::*;
use crate::storage::repository::*;

/// In-memory parameter store. Can be seeded from a JSON file holding a list of
/// `{"name", "type", "value"}` objects, and can be told to fail for specific names.
#[derive(Clone, Default)]
pub struct LocalParameterStore {
    parameters: Arc<RwLock<HashMap<ParameterName, StoredParameter>>>,
    failures: Arc<RwLock<HashMap<ParameterName, StoreError>>>,
    requested: Arc<RwLock<Vec<(ParameterName, bool)>>>,
}

impl LocalParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: Vec<StoredParameter>) -> Self {
        let parameters: HashMap<ParameterName, StoredParameter> = parameters
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();

        Self {
            parameters: Arc::new(RwLock::new(parameters)),
            ..Default::default()
        }
    }

    pub async fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading local parameters from file: {}", path);
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| format!("Failed to read parameters file '{}': {}", path, e))?;
        let parameters: Vec<StoredParameter> = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse parameters file '{}': {}", path, e))?;

        Ok(Self::with_parameters(parameters))
    }

    /// Make every read of `name` fail with `error`, even if a value is stored.
    pub async fn fail_with(&self, name: impl Into<String>, error: StoreError) {
        self.failures
            .write()
            .await
            .insert(ParameterName::new(name), error);
    }

    /// Names requested so far, in call order.
    pub async fn requested_names(&self) -> Vec<String> {
        self.requested
            .read()
            .await
            .iter()
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// `with_decryption` flag of each request so far, in call order.
    pub async fn requested_decryption(&self) -> Vec<bool> {
        self.requested
            .read()
            .await
            .iter()
            .map(|(_, with_decryption)| *with_decryption)
            .collect()
    }

    pub async fn parameter_count(&self) -> usize {
        self.parameters.read().await.len()
    }
}

#[async_trait::async_trait]
impl ParameterStore for LocalParameterStore {
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<StoredParameter, StoreError> {
        debug!(parameter = name, with_decryption, "Reading local parameter");

        let key = ParameterName::new(name);
        self.requested
            .write()
            .await
            .push((key.clone(), with_decryption));

        if let Some(error) = self.failures.read().await.get(&key) {
            return Err(error.clone());
        }

        self.parameters
            .read()
            .await
            .get(&key)
            .cloned()
            .ok_or_else(|| StoreError::ParameterNotFound(format!("'{}'", name)))
    }
}
