//! HTTP front end for the employee form
//!
//! Renders the form with maud, validates urlencoded submissions and exposes a
//! JSON validation endpoint. Requests are independent; nothing is stored.

pub mod pages;
pub mod routes;

use anyhow::{Context, Result};
use employee_form::config::DEFAULT_CONFIG_FILE;
use employee_form::Config;

pub use routes::{router, AppState, ValidateResponse};

pub const CONFIG_PATH_VAR: &str = "EMPLOYEE_FORM_CONFIG";
pub const HOST_VAR: &str = "EMPLOYEE_FORM_HOST";
pub const PORT_VAR: &str = "EMPLOYEE_FORM_PORT";

/// Load the config file named by `EMPLOYEE_FORM_CONFIG` (or the default path)
/// and apply host/port overrides from the environment
pub fn load_config() -> Result<Config> {
    let path = std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let config = Config::load(&path)?;
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Override server host/port from `lookup`
pub fn apply_env_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Config> {
    if let Some(host) = lookup(HOST_VAR) {
        config.server.host = host;
    }

    if let Some(port) = lookup(PORT_VAR) {
        config.server.port = port
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {:?}", PORT_VAR, port))?;
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_no_overrides() {
        let config = apply_env_overrides(Config::default(), |_| None).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_host_and_port_overrides() {
        let env: HashMap<&str, &str> = [(HOST_VAR, "0.0.0.0"), (PORT_VAR, "8080")].into();
        let config =
            apply_env_overrides(Config::default(), |key| env.get(key).map(|v| v.to_string()))
                .unwrap();
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_bad_port_is_an_error() {
        let err = apply_env_overrides(Config::default(), |key| {
            (key == PORT_VAR).then(|| "eighty".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains(PORT_VAR));
    }
}
