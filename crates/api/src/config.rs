use domain::models::{Role, UserAccount};
use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    /// Login token configuration
    pub jwt: JwtAuthConfig,
    /// Credential cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,
    /// Fixed user directory
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Largest request body accepted on the submission form
    #[serde(default = "default_upload_max_bytes")]
    pub upload_max_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SecurityConfig {
    /// Origins allowed to make credentialed cross-origin requests.
    /// Empty means the request origin is mirrored (development only).
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

#[derive(Clone, Deserialize)]
pub struct JwtAuthConfig {
    /// HMAC secret used to sign login tokens
    #[serde(default)]
    pub secret: String,

    /// Token expiration in seconds (default: 86400 = 24 hours)
    #[serde(default = "default_token_expiry")]
    pub token_expiry_secs: i64,

    /// Leeway in seconds for clock skew tolerance (default: 30)
    #[serde(default = "default_jwt_leeway")]
    pub leeway_secs: u64,
}

impl std::fmt::Debug for JwtAuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtAuthConfig")
            .field("secret", &"[REDACTED]")
            .field("token_expiry_secs", &self.token_expiry_secs)
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

/// Cookie attributes for the login credential.
#[derive(Debug, Clone, Deserialize)]
pub struct CookieConfig {
    /// Cookie name (default: Authorization)
    #[serde(default = "default_cookie_name")]
    pub name: String,

    #[serde(default = "default_cookie_path")]
    pub path: String,

    /// Only send the cookie over HTTPS
    #[serde(default)]
    pub secure: bool,

    /// SameSite attribute: Strict, Lax or None
    #[serde(default = "default_same_site")]
    pub same_site: String,

    /// Domain attribute, omitted when empty
    #[serde(default)]
    pub domain: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: default_cookie_name(),
            path: default_cookie_path(),
            secure: false,
            same_site: default_same_site(),
            domain: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_users")]
    pub users: Vec<UserAccount>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            users: default_users(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_upload_max_bytes() -> usize {
    32 * 1024 * 1024
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_token_expiry() -> i64 {
    shared::jwt::DEFAULT_TOKEN_EXPIRY_SECS
}
fn default_jwt_leeway() -> u64 {
    shared::jwt::DEFAULT_LEEWAY_SECS
}
fn default_cookie_name() -> String {
    "Authorization".to_string()
}
fn default_cookie_path() -> String {
    "/".to_string()
}
fn default_same_site() -> String {
    "Lax".to_string()
}
fn default_users() -> Vec<UserAccount> {
    vec![
        UserAccount::new("admin", "password123", Role::Admin),
        UserAccount::new("user", "password123", Role::User),
    ]
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with RB__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("RB").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// This method creates a config entirely from defaults and overrides,
    /// without relying on config files (which may not be accessible during tests).
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30
            upload_max_bytes = 33554432

            [logging]
            level = "info"
            format = "json"

            [security]
            cors_origins = []

            [jwt]
            secret = ""
            token_expiry_secs = 86400
            leeway_secs = 30
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigValidationError::MissingRequired(
                "RB__JWT__SECRET environment variable must be set".to_string(),
            ));
        }

        if self.jwt.token_expiry_secs <= 0 {
            return Err(ConfigValidationError::InvalidValue(
                "jwt.token_expiry_secs must be positive".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.server.upload_max_bytes == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "server.upload_max_bytes must be positive".to_string(),
            ));
        }

        if let Some(origin) = self
            .security
            .cors_origins
            .iter()
            .find(|o| o.parse::<axum::http::HeaderValue>().is_err())
        {
            return Err(ConfigValidationError::InvalidValue(format!(
                "security.cors_origins contains an invalid origin: {:?}",
                origin
            )));
        }

        if self.auth.users.is_empty() {
            return Err(ConfigValidationError::InvalidValue(
                "auth.users must contain at least one user".to_string(),
            ));
        }

        if !matches!(self.cookie.same_site.as_str(), "Strict" | "Lax" | "None") {
            return Err(ConfigValidationError::InvalidValue(format!(
                "cookie.same_site must be Strict, Lax or None, got {}",
                self.cookie.same_site
            )));
        }

        if self.cookie.same_site == "None" && !self.cookie.secure {
            return Err(ConfigValidationError::InvalidValue(
                "cookie.same_site = None requires cookie.secure = true".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.server.host, self.server.port).parse()
    }
}
