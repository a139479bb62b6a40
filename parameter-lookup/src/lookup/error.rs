use std::fmt;

use crate::{domain::ParameterName, storage::repository::StoreError};

/// A lookup that produced no result. Carries the requested name, the key
/// whose read failed, and the store error behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupError {
    name: ParameterName,
    key: ParameterName,
    source: StoreError,
}

impl LookupError {
    pub fn new(name: ParameterName, key: ParameterName, source: StoreError) -> Self {
        Self { name, key, source }
    }

    pub fn name(&self) -> &ParameterName {
        &self.name
    }

    pub fn key(&self) -> &ParameterName {
        &self.key
    }

    pub fn store_error(&self) -> &StoreError {
        &self.source
    }

    pub fn is_not_found(&self) -> bool {
        self.source.is_not_found()
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name == self.key {
            write!(
                f,
                "Error describing SSM parameter '{}': {}",
                self.name, self.source
            )
        } else {
            write!(
                f,
                "Error describing SSM parameter '{}' (while reading '{}'): {}",
                self.name, self.key, self.source
            )
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
