use std::env;

pub fn required_env(env_name: &str) -> Result<String, String> {
    env::var(env_name).map_err(|_| format!("Required environment variable '{env_name}' is not set"))
}

pub fn optional_env(env_name: &str) -> Option<String> {
    env::var(env_name).ok()
}

pub fn env_or(env_name: &str, default: &str) -> String {
    optional_env(env_name).unwrap_or_else(|| default.to_string())
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

pub fn bool_env(env_name: &str, default: bool) -> Result<bool, String> {
    match optional_env(env_name) {
        None => Ok(default),
        Some(value) => parse_bool(&value).ok_or_else(|| {
            format!("Environment variable '{env_name}' must be a boolean, got '{value}'")
        }),
    }
}
