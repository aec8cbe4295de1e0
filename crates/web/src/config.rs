use std::env;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    pub bind_address: String,
    /// Run on the in-process store instead of Postgres. Nothing survives a restart.
    pub memory_database: bool,
}

impl WebConfig {
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_address = var("WEB_BIND_ADDRESS")
            .filter(|address| !address.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned());
        let memory_database = var("REGISTRY_MEMORY_DATABASE")
            .map(|value| matches!(value.trim(), "1" | "true" | "yes"))
            .unwrap_or(false);
        Self {
            bind_address,
            memory_database,
        }
    }
}
