use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
    configs::AccountContext,
    domain::*,
    storage::repository::{ParameterStore, StoreError},
};

pub mod error;

pub use error::LookupError;

/// Resolves a parameter by exact name, then optionally by walking up its
/// hierarchy, then optionally by substituting a default.
pub struct ParameterLookup<S>
where
    S: ParameterStore + ?Sized,
{
    store: Arc<S>,
    context: AccountContext,
}

impl<S> ParameterLookup<S>
where
    S: ParameterStore + ?Sized,
{
    pub fn new(store: Arc<S>, context: AccountContext) -> Self {
        Self { store, context }
    }

    pub async fn resolve(&self, request: &LookupRequest) -> Result<LookupResult, LookupError> {
        let exact_error = match self.fetch(&request.name, request.with_decryption).await {
            Ok(parameter) => return Ok(self.build_result(parameter, ResolutionSource::Exact)),
            Err(err) => err,
        };

        if request.walk_hierarchy {
            if let Some(result) = self.walk_hierarchy(request).await? {
                return Ok(result);
            }
        }

        if exact_error.is_not_found() {
            if let Some(value) = request.default.substitute_value() {
                warn!(
                    parameter = request.name.as_str(),
                    "Parameter not found, returning the configured default"
                );
                return Ok(LookupResult::synthetic_default(&request.name, value));
            }
        }

        Err(LookupError::new(
            request.name.clone(),
            request.name.clone(),
            exact_error,
        ))
    }

    /// First ancestor that exists wins. Any error other than not-found ends the
    /// walk and the lookup with it.
    async fn walk_hierarchy(
        &self,
        request: &LookupRequest,
    ) -> Result<Option<LookupResult>, LookupError> {
        for candidate in request.name.hierarchy_candidates() {
            match self.fetch(&candidate, request.with_decryption).await {
                Ok(parameter) => {
                    let source = if candidate == request.name {
                        ResolutionSource::Exact
                    } else {
                        ResolutionSource::Ancestor
                    };
                    return Ok(Some(self.build_result(parameter, source)));
                }
                Err(err) if err.is_not_found() => {
                    debug!(
                        parameter = candidate.as_str(),
                        "Parameter not found while walking hierarchy, moving up a level"
                    );
                }
                Err(err) => {
                    return Err(LookupError::new(request.name.clone(), candidate, err));
                }
            }
        }

        Ok(None)
    }

    async fn fetch(
        &self,
        name: &ParameterName,
        with_decryption: bool,
    ) -> Result<StoredParameter, StoreError> {
        debug!(parameter = name.as_str(), with_decryption, "Reading parameter");
        self.store.get_parameter(name.as_str(), with_decryption).await
    }

    fn build_result(&self, parameter: StoredParameter, source: ResolutionSource) -> LookupResult {
        let arn = self.context.parameter_arn(&parameter.name);
        info!(
            parameter = parameter.name.as_str(),
            %source,
            "Resolved parameter"
        );
        LookupResult::from_stored(parameter, arn, source)
    }
}
