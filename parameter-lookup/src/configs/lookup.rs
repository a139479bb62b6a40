use tracing::warn;

use super::{
    Configs,
    environment::{bool_env, optional_env, required_env},
};
use crate::domain::{DefaultPolicy, LookupRequest, ParameterName};

#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub name: String,
    pub with_decryption: bool,
    pub walk_hierarchy: bool,
    pub default: Option<String>,
    /// Deprecated: a default is now returned whenever `default` is set.
    pub with_default: bool,
}

impl LookupConfig {
    pub fn default_policy(&self) -> DefaultPolicy {
        DefaultPolicy::from_legacy(self.default.clone(), self.with_default)
    }

    pub fn request(&self) -> LookupRequest {
        LookupRequest {
            name: ParameterName::new(self.name.clone()),
            with_decryption: self.with_decryption,
            walk_hierarchy: self.walk_hierarchy,
            default: self.default_policy(),
        }
    }
}

#[async_trait::async_trait]
impl Configs for LookupConfig {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let with_default = bool_env("PARAMETER_WITH_DEFAULT", false)?;
        if with_default {
            warn!(
                "PARAMETER_WITH_DEFAULT is deprecated, a default value is now returned if PARAMETER_DEFAULT is set"
            );
        }

        Ok(LookupConfig {
            name: required_env("PARAMETER_NAME")?,
            with_decryption: bool_env("PARAMETER_WITH_DECRYPTION", true)?,
            walk_hierarchy: bool_env("PARAMETER_WALK_HIERARCHY", false)?,
            default: optional_env("PARAMETER_DEFAULT"),
            with_default,
        })
    }
}
