// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads ports, upstream service URLs, HTTP client timeouts and classifier options
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriCheck

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_config, service_names};
use anyhow::{anyhow, Context, Result};
use nutricheck_intelligence::allergens::NoteLocale;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, Level};
use url::Url;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational
    #[default]
    Info,
    /// Debugging detail
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(&self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    ///
    /// Accepts a full `RUST_LOG` directive and uses its leading level, so
    /// `debug,hyper=warn` reads as `Debug`.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        let leading = s.split(',').next().unwrap_or_default().trim();
        match leading.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        };
        f.write_str(name)
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Base URLs of the three upstream services
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    /// User profile service
    pub profile_base_url: String,
    /// Product catalog service
    pub catalog_base_url: String,
    /// AI analysis service
    pub analysis_base_url: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self::all(defaults::SERVICE_BASE_URL)
    }
}

impl ServiceEndpoints {
    /// Point every service at the same base URL
    #[must_use]
    pub fn all(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/').to_owned();
        Self {
            profile_base_url: base.clone(),
            catalog_base_url: base.clone(),
            analysis_base_url: base,
        }
    }

    fn iter(&self) -> [(&'static str, &str); 3] {
        [
            (service_names::PROFILE, &self.profile_base_url),
            (service_names::CATALOG, &self.catalog_base_url),
            (service_names::ANALYSIS, &self.analysis_base_url),
        ]
    }
}

/// Outbound HTTP client timeouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout_secs: defaults::HTTP_CLIENT_TIMEOUT_SECS,
            connect_timeout_secs: defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl HttpClientConfig {
    /// Total request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Connection timeout
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Upstream services
    pub services: ServiceEndpoints,
    /// Outbound HTTP client settings
    pub http_client: HttpClientConfig,
    /// Language of allergen notes
    pub locale: NoteLocale,
    /// Number of local alternative recommendations
    pub recommendation_top_k: usize,
    /// Allowed CORS origins (`*` or a comma-separated list)
    pub cors_allowed_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            log_level: LogLevel::default(),
            services: ServiceEndpoints::default(),
            http_client: HttpClientConfig::default(),
            locale: NoteLocale::default(),
            recommendation_top_k: defaults::RECOMMENDATION_TOP_K,
            cors_allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or the
    /// resulting configuration fails [`ServerConfig::validate`]
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_var_or(env_config::HTTP_PORT, &defaults::HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            log_level: LogLevel::from_str_or_default(&env_var_or(env_config::RUST_LOG, "info")),
            services: ServiceEndpoints {
                profile_base_url: service_url(env_config::PROFILE_SERVICE_URL),
                catalog_base_url: service_url(env_config::CATALOG_SERVICE_URL),
                analysis_base_url: service_url(env_config::ANALYSIS_SERVICE_URL),
            },
            http_client: HttpClientConfig {
                timeout_secs: env_var_or(
                    env_config::HTTP_CLIENT_TIMEOUT_SECS,
                    &defaults::HTTP_CLIENT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid HTTP_CLIENT_TIMEOUT_SECS value")?,
                connect_timeout_secs: env_var_or(
                    env_config::HTTP_CLIENT_CONNECT_TIMEOUT_SECS,
                    &defaults::HTTP_CLIENT_CONNECT_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid HTTP_CLIENT_CONNECT_TIMEOUT_SECS value")?,
            },
            locale: NoteLocale::from_str_or_default(&env_var_or(
                env_config::NUTRICHECK_LOCALE,
                "en",
            )),
            recommendation_top_k: env_var_or(
                env_config::RECOMMENDATION_TOP_K,
                &defaults::RECOMMENDATION_TOP_K.to_string(),
            )
            .parse()
            .context("Invalid RECOMMENDATION_TOP_K value")?,
            cors_allowed_origins: env_var_or(
                env_config::CORS_ALLOWED_ORIGINS,
                defaults::CORS_ALLOWED_ORIGINS,
            ),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error for port 0, a zero recommendation count, a zero
    /// timeout, or a service URL that is not absolute http(s)
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow!("HTTP_PORT must be non-zero"));
        }

        if self.recommendation_top_k == 0 {
            return Err(anyhow!("RECOMMENDATION_TOP_K must be at least 1"));
        }

        if self.http_client.timeout_secs == 0 || self.http_client.connect_timeout_secs == 0 {
            return Err(anyhow!("HTTP client timeouts must be non-zero"));
        }

        for (service, base_url) in self.services.iter() {
            let parsed = Url::parse(base_url)
                .with_context(|| format!("Invalid base URL for {service}: {base_url}"))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(anyhow!(
                    "Base URL for {service} must use http or https, got {}",
                    parsed.scheme()
                ));
            }
        }

        Ok(())
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "NutriCheck Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Profile Service: {}\n\
             - Catalog Service: {}\n\
             - Analysis Service: {}\n\
             - HTTP Timeout: {}s (connect {}s)\n\
             - Note Locale: {}\n\
             - Recommendations: top {}\n\
             - CORS Origins: {}",
            self.http_port,
            self.environment,
            self.log_level,
            self.services.profile_base_url,
            self.services.catalog_base_url,
            self.services.analysis_base_url,
            self.http_client.timeout_secs,
            self.http_client.connect_timeout_secs,
            self.locale,
            self.recommendation_top_k,
            self.cors_allowed_origins,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn service_url(key: &str) -> String {
    env_var_or(key, defaults::SERVICE_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
