use serde_derive::{Deserialize, Serialize};
use std::fmt;

pub const PATH_SEPARATOR: &str = "/";

/// Type reported for a default that was substituted locally.
pub const SYNTHETIC_PARAMETER_TYPE: &str = "String";

/// Legacy marker for "no default supplied". Still accepted from configuration
/// so existing deployments keep their meaning.
pub const LEGACY_NO_DEFAULT_SENTINEL: &str = "b7002342-3c99-4fec-8ef6-5b1bdcd00032";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct ParameterName(String);

impl ParameterName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn without_leading_separator(&self) -> &str {
        self.0.strip_prefix(PATH_SEPARATOR).unwrap_or(&self.0)
    }

    /// Names tried by a hierarchy walk, longest prefix first. The leaf segment
    /// is kept and the path in front of it is shortened one segment at a time.
    pub fn hierarchy_candidates(&self) -> Vec<ParameterName> {
        let segments: Vec<&str> = self.0.split(PATH_SEPARATOR).collect();
        let Some((leaf, path)) = segments.split_last() else {
            return Vec::new();
        };

        (1..=path.len())
            .rev()
            .map(|depth| {
                let mut parts = path[..depth].to_vec();
                parts.push(*leaf);
                ParameterName::new(parts.join(PATH_SEPARATOR))
            })
            .collect()
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What to do when a parameter cannot be found anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DefaultPolicy {
    #[default]
    None,
    /// Substitute an empty string. Only reachable through the deprecated
    /// `with_default` flag.
    Empty,
    Value(String),
}

impl DefaultPolicy {
    pub fn from_legacy(default: Option<String>, with_default: bool) -> Self {
        match default {
            Some(value) if value != LEGACY_NO_DEFAULT_SENTINEL => Self::Value(value),
            _ if with_default => Self::Empty,
            _ => Self::None,
        }
    }

    pub fn substitute_value(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Empty => Some(""),
            Self::Value(value) => Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub name: ParameterName,
    pub with_decryption: bool,
    pub walk_hierarchy: bool,
    pub default: DefaultPolicy,
}

impl LookupRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ParameterName::new(name),
            with_decryption: true,
            walk_hierarchy: false,
            default: DefaultPolicy::None,
        }
    }

    pub fn with_decryption(mut self, with_decryption: bool) -> Self {
        self.with_decryption = with_decryption;
        self
    }

    pub fn walk_hierarchy(mut self, walk_hierarchy: bool) -> Self {
        self.walk_hierarchy = walk_hierarchy;
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = DefaultPolicy::Value(value.into());
        self
    }

    pub fn default_policy(mut self, default: DefaultPolicy) -> Self {
        self.default = default;
        self
    }
}

/// A parameter as returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredParameter {
    pub name: ParameterName,
    #[serde(rename = "type")]
    pub parameter_type: String,
    pub value: String,
}

impl StoredParameter {
    pub fn new(
        name: impl Into<String>,
        parameter_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            name: ParameterName::new(name),
            parameter_type: parameter_type.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionSource {
    Exact,
    Ancestor,
    Default,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact => write!(f, "exact"),
            Self::Ancestor => write!(f, "ancestor"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub id: String,
    pub arn: String,
    pub name: String,
    #[serde(rename = "type")]
    pub parameter_type: String,
    pub value: String,
    pub source: ResolutionSource,
}

impl LookupResult {
    pub fn from_stored(parameter: StoredParameter, arn: String, source: ResolutionSource) -> Self {
        Self {
            id: parameter.name.to_string(),
            arn,
            name: parameter.name.to_string(),
            parameter_type: parameter.parameter_type,
            value: parameter.value,
            source,
        }
    }

    pub fn synthetic_default(name: &ParameterName, value: impl Into<String>) -> Self {
        Self {
            id: name.to_string(),
            arn: String::new(),
            name: name.to_string(),
            parameter_type: SYNTHETIC_PARAMETER_TYPE.to_string(),
            value: value.into(),
            source: ResolutionSource::Default,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.source != ResolutionSource::Default
    }
}

impl fmt::Debug for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupResult")
            .field("id", &self.id)
            .field("arn", &self.arn)
            .field("name", &self.name)
            .field("type", &self.parameter_type)
            .field("value", &"<sensitive>")
            .field("source", &self.source)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hierarchy_candidates_longest_first() {
        let name = ParameterName::new("/app/db/password");
        let candidates: Vec<String> = name
            .hierarchy_candidates()
            .into_iter()
            .map(|c| c.to_string())
            .collect();

        assert_eq!(
            candidates,
            vec!["/app/db/password", "/app/password", "/password"]
        );
    }

    #[test]
    fn test_hierarchy_candidates_relative_name() {
        let name = ParameterName::new("app/db/password");
        let candidates: Vec<String> = name
            .hierarchy_candidates()
            .into_iter()
            .map(|c| c.to_string())
            .collect();

        assert_eq!(candidates, vec!["app/db/password", "app/password"]);
    }

    #[test]
    fn test_hierarchy_candidates_without_separator() {
        assert!(ParameterName::new("password").hierarchy_candidates().is_empty());
    }

    #[test]
    fn test_without_leading_separator_strips_once() {
        assert_eq!(
            ParameterName::new("/app/key").without_leading_separator(),
            "app/key"
        );
        assert_eq!(ParameterName::new("//key").without_leading_separator(), "/key");
        assert_eq!(ParameterName::new("key").without_leading_separator(), "key");
    }

    #[test]
    fn test_default_policy_from_legacy() {
        assert_eq!(
            DefaultPolicy::from_legacy(Some("fallback".to_string()), false),
            DefaultPolicy::Value("fallback".to_string())
        );
        assert_eq!(
            DefaultPolicy::from_legacy(Some("fallback".to_string()), true),
            DefaultPolicy::Value("fallback".to_string())
        );
        assert_eq!(DefaultPolicy::from_legacy(None, true), DefaultPolicy::Empty);
        assert_eq!(DefaultPolicy::from_legacy(None, false), DefaultPolicy::None);
    }

    #[test]
    fn test_default_policy_treats_sentinel_as_unset() {
        let sentinel = Some(LEGACY_NO_DEFAULT_SENTINEL.to_string());
        assert_eq!(
            DefaultPolicy::from_legacy(sentinel.clone(), false),
            DefaultPolicy::None
        );
        assert_eq!(DefaultPolicy::from_legacy(sentinel, true), DefaultPolicy::Empty);
    }

    #[test]
    fn test_explicit_empty_default_is_a_value() {
        let policy = DefaultPolicy::from_legacy(Some(String::new()), false);
        assert_eq!(policy.substitute_value(), Some(""));
        assert_eq!(DefaultPolicy::None.substitute_value(), None);
    }

    #[test]
    fn test_lookup_request_defaults() {
        let request = LookupRequest::new("/app/key");
        assert!(request.with_decryption);
        assert!(!request.walk_hierarchy);
        assert_eq!(request.default, DefaultPolicy::None);
    }

    #[test]
    fn test_synthetic_default_result() {
        let result = LookupResult::synthetic_default(&ParameterName::new("/app/missing"), "fb");
        assert_eq!(result.id, "/app/missing");
        assert_eq!(result.arn, "");
        assert_eq!(result.parameter_type, "String");
        assert!(!result.is_remote());
    }

    #[test]
    fn test_debug_redacts_value() {
        let result = LookupResult::synthetic_default(&ParameterName::new("/k"), "top-secret");
        let debug = format!("{:?}", result);
        assert!(!debug.contains("top-secret"));
        assert!(debug.contains("<sensitive>"));
    }
}
