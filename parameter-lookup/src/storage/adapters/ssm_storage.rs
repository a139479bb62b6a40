use aws_config::BehaviorVersion;
use aws_sdk_ssm::{
    Client,
    error::{DisplayErrorContext, ProvideErrorMetadata, SdkError},
    operation::get_parameter::GetParameterError,
};
use aws_types::region::Region;
use tracing::debug;

use crate::{
    configs::SsmStoreConfig,
    domain::StoredParameter,
    storage::repository::{ParameterStore, StoreError},
};

const ACCESS_DENIED_CODE: &str = "AccessDeniedException";
const THROTTLING_CODES: [&str; 3] = [
    "ThrottlingException",
    "TooManyRequestsException",
    "RequestLimitExceeded",
];
const VALIDATION_CODE: &str = "ValidationException";

#[derive(Clone)]
pub struct SsmParameterStore {
    client: Client,
}

impl SsmParameterStore {
    pub async fn new(config: SsmStoreConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());

        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }

        if let Some(region) = config.region.clone() {
            loader = loader.region(Region::new(region));
        }

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url.clone());
        }

        let shared_config = loader.load().await;

        Self::with_client(Client::new(&shared_config))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl std::fmt::Debug for SsmParameterStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SsmParameterStore").finish()
    }
}

fn describe_error(name: &str, err: &SdkError<GetParameterError>) -> String {
    format!("'{}': {}", name, DisplayErrorContext(err))
}

fn classify_error(service_error: GetParameterError, message: String) -> StoreError {
    if service_error.is_parameter_not_found() {
        return StoreError::ParameterNotFound(message);
    }
    if service_error.is_invalid_key_id() || service_error.is_parameter_version_not_found() {
        return StoreError::InvalidRequest(message);
    }

    match service_error.code() {
        Some(ACCESS_DENIED_CODE) => StoreError::AccessDenied(message),
        Some(code) if THROTTLING_CODES.contains(&code) => StoreError::Throttled(message),
        Some(VALIDATION_CODE) => StoreError::InvalidRequest(message),
        _ => StoreError::RequestFailed(message),
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmParameterStore {
    async fn get_parameter(
        &self,
        name: &str,
        with_decryption: bool,
    ) -> Result<StoredParameter, StoreError> {
        debug!(parameter = name, with_decryption, "Reading SSM parameter");

        let response = self
            .client
            .get_parameter()
            .name(name)
            .with_decryption(with_decryption)
            .send()
            .await
            .map_err(|err| {
                let message = describe_error(name, &err);
                classify_error(err.into_service_error(), message)
            })?;

        let parameter = response.parameter().ok_or_else(|| {
            StoreError::RequestFailed(format!("Parameter '{}' missing from response", name))
        })?;

        let value = parameter.value().ok_or_else(|| {
            StoreError::RequestFailed(format!("Parameter '{}' has no value", name))
        })?;

        Ok(StoredParameter::new(
            parameter.name().unwrap_or(name),
            parameter
                .r#type()
                .map(|t| t.as_str().to_string())
                .unwrap_or_default(),
            value,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_ssm::{error::ErrorMetadata, types::error::ParameterNotFound};

    #[test]
    fn test_classify_parameter_not_found() {
        let err = GetParameterError::ParameterNotFound(
            ParameterNotFound::builder().message("missing").build(),
        );
        let classified = classify_error(err, "/app/key".to_string());
        assert!(classified.is_not_found());
    }

    #[test]
    fn test_classify_throttling_by_code() {
        let err = GetParameterError::generic(
            ErrorMetadata::builder()
                .code("ThrottlingException")
                .message("Rate exceeded")
                .build(),
        );
        let classified = classify_error(err, "/app/key".to_string());
        assert!(matches!(classified, StoreError::Throttled(_)));
    }

    #[test]
    fn test_classify_access_denied_by_code() {
        let err = GetParameterError::generic(
            ErrorMetadata::builder().code("AccessDeniedException").build(),
        );
        let classified = classify_error(err, "/app/key".to_string());
        assert!(matches!(classified, StoreError::AccessDenied(_)));
    }
}

