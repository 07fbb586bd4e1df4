//! Deployment environment detection and client configuration.
//!
//! DESIGN
//! ======
//! `Environment::resolve` is a pure function of the page/host name so the
//! same binary can point at development, staging, or production backends
//! without a rebuild. `EnvConfig` carries everything the HTTP layer needs;
//! timeouts here are enforced by the client builder, not advisory.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

const DEV_API_URL: &str = "http://localhost:8000/api";
const STAGING_API_URL: &str = "https://staging.spindleshop.com/api";
const PROD_API_URL: &str = "https://www.spindleshop.com/api";

/// Deployment environment, derived from the host serving the client.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Resolve the environment from a hostname (port suffix allowed).
    ///
    /// `localhost` and loopback addresses resolve to `Development`;
    /// hostnames containing `staging`, `test`, or `dev` resolve to
    /// `Staging`; everything else is `Production`.
    #[must_use]
    pub fn resolve(hostname: &str) -> Self {
        let host = strip_port(&hostname.trim().to_ascii_lowercase());

        if matches!(host.as_str(), "localhost" | "127.0.0.1" | "::1" | "[::1]" | "0.0.0.0") {
            return Self::Development;
        }

        if host.contains("staging") || host.contains("test") || host.contains("dev") {
            return Self::Staging;
        }

        Self::Production
    }

    /// Short lowercase name (e.g. for logs and CLI output).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

/// Drop a trailing `:port` while leaving bare IPv6 literals intact.
fn strip_port(host: &str) -> String {
    if let Some(rest) = host.strip_prefix('[') {
        // Bracketed IPv6, with or without a port: `[::1]` or `[::1]:8000`.
        if let Some(end) = rest.find(']') {
            return format!("[{}]", &rest[..end]);
        }
        return host.to_owned();
    }

    // More than one colon means an unbracketed IPv6 literal; keep as-is.
    if host.matches(':').count() > 1 {
        return host.to_owned();
    }

    host.split(':').next().unwrap_or(host).to_owned()
}

/// Resolved client configuration for one environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    pub environment: Environment,
    /// Base API URL without a trailing slash.
    pub api_base_url: String,
    /// Verbose diagnostics for non-production environments.
    pub debug: bool,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl EnvConfig {
    /// Static configuration table for a resolved environment.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        let (api_base_url, debug) = match environment {
            Environment::Development => (DEV_API_URL, true),
            Environment::Staging => (STAGING_API_URL, true),
            Environment::Production => (PROD_API_URL, false),
        };

        Self {
            environment,
            api_base_url: api_base_url.to_owned(),
            debug,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }

    /// Build config from environment variables, falling back to production.
    ///
    /// - `SPINDLE_ENV`: `development`, `staging`, or `production`; any other
    ///   value (or none) is treated as a production hostname and resolved
    ///   through [`Environment::resolve`].
    /// - `SPINDLE_API_URL`: overrides the base URL for the resolved tier.
    /// - `SPINDLE_REQUEST_TIMEOUT_SECS` / `SPINDLE_CONNECT_TIMEOUT_SECS`:
    ///   override the enforced HTTP timeouts.
    #[must_use]
    pub fn from_env() -> Self {
        let environment = match std::env::var("SPINDLE_ENV").ok().as_deref() {
            Some("development") => Environment::Development,
            Some("staging") => Environment::Staging,
            Some("production") | None => Environment::Production,
            Some(other) => Environment::resolve(other),
        };

        let mut config = Self::for_environment(environment);

        if let Ok(url) = std::env::var("SPINDLE_API_URL") {
            config.api_base_url = url.trim_end_matches('/').to_owned();
        }
        config.request_timeout_secs = env_parse_u64("SPINDLE_REQUEST_TIMEOUT_SECS", config.request_timeout_secs);
        config.connect_timeout_secs = env_parse_u64("SPINDLE_CONNECT_TIMEOUT_SECS", config.connect_timeout_secs);

        config
    }

    /// Config pointed at an explicit base URL (tests, CLI `--base-url`).
    #[must_use]
    pub fn with_base_url(environment: Environment, base_url: &str) -> Self {
        let mut config = Self::for_environment(environment);
        config.api_base_url = base_url.trim_end_matches('/').to_owned();
        config
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
