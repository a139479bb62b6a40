use super::{
    Configs,
    environment::{env_or, required_env},
};
use crate::domain::ParameterName;

const DEFAULT_PARTITION: &str = "aws";
pub const DEFAULT_REGION: &str = "us-east-1";
const SSM_SERVICE: &str = "ssm";

/// Identity the ARNs of resolved parameters are scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountContext {
    pub partition: String,
    pub region: String,
    pub account_id: String,
}

impl AccountContext {
    pub fn new(
        partition: impl Into<String>,
        region: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            partition: partition.into(),
            region: region.into(),
            account_id: account_id.into(),
        }
    }

    pub fn parameter_arn(&self, name: &ParameterName) -> String {
        format!(
            "arn:{}:{}:{}:{}:parameter/{}",
            self.partition,
            SSM_SERVICE,
            self.region,
            self.account_id,
            name.without_leading_separator()
        )
    }
}

#[async_trait::async_trait]
impl Configs for AccountContext {
    async fn load() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(AccountContext {
            partition: env_or("AWS_PARTITION", DEFAULT_PARTITION),
            region: env_or("AWS_REGION", DEFAULT_REGION),
            account_id: required_env("AWS_ACCOUNT_ID")?,
        })
    }
}
