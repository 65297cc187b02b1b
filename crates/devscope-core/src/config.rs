use thiserror::Error;

use crate::AppConfig;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An env var was present but could not be parsed into its target type.
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if an env var value cannot be parsed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if an env var value cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing logic, decoupled from the actual environment so it
/// can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
///
/// Every setting has a default or is optional; devscope runs unauthenticated
/// (at reduced upstream rate limits, and with the summarizer falling back to
/// its deterministic producer) when no credentials are configured.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let optional = |var: &str| -> Option<String> { lookup(var).ok().filter(|v| !v.is_empty()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bind_addr = parse_addr("DEVSCOPE_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("DEVSCOPE_LOG_LEVEL", "info");
    let http_timeout_secs = parse_u64("DEVSCOPE_HTTP_TIMEOUT_SECS", "20")?;

    let github_api_url = or_default("DEVSCOPE_GITHUB_API_URL", "https://api.github.com");
    let github_token = optional("DEVSCOPE_GITHUB_TOKEN");

    let linkedin_proxy_url = or_default(
        "DEVSCOPE_LINKEDIN_PROXY_URL",
        "https://api.proxycrawl.com/linkedin",
    );
    let linkedin_proxy_token = optional("DEVSCOPE_LINKEDIN_PROXY_TOKEN");

    let leetcode_graphql_url =
        or_default("DEVSCOPE_LEETCODE_GRAPHQL_URL", "https://leetcode.com/graphql");
    let leetcode_stats_url = or_default(
        "DEVSCOPE_LEETCODE_STATS_URL",
        "https://leetcode-stats-api.herokuapp.com",
    );

    let summary_api_url = or_default(
        "DEVSCOPE_SUMMARY_API_URL",
        "https://api.groq.com/openai/v1",
    );
    let summary_api_key = optional("DEVSCOPE_SUMMARY_API_KEY");
    let summary_model = or_default("DEVSCOPE_SUMMARY_MODEL", "llama3-8b-8192");

    Ok(AppConfig {
        bind_addr,
        log_level,
        http_timeout_secs,
        github_api_url,
        github_token,
        linkedin_proxy_url,
        linkedin_proxy_token,
        leetcode_graphql_url,
        leetcode_stats_url,
        summary_api_url,
        summary_api_key,
        summary_model,
    })
}
