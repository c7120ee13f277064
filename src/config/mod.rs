use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub links: LinkConfig,
    pub catalog: CatalogConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let links = LinkConfig::new(
            base_url("APP_CERTIFICATE_SERVICE_URL", "http://localhost:4760")?,
            base_url("APP_FRONTEND_URL", "http://localhost:8000")?,
        );

        let catalog = CatalogConfig {
            health_certificates: env::var("APP_CERTIFICATE_CATALOG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("demos/health_certificates.csv")),
            form_pages: env::var("APP_FORM_PAGE_CATALOG")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("demos/form_pages.json")),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            links,
            catalog,
        })
    }
}

fn base_url(variable: &'static str, default: &str) -> Result<String, ConfigError> {
    let value = env::var(variable).unwrap_or_else(|_| default.to_string());
    let trimmed = value.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(ConfigError::InvalidUrl { variable })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Base addresses used when deriving the links carried on a case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub certificate_service_url: String,
    pub frontend_url: String,
}

impl LinkConfig {
    pub fn new(
        certificate_service_url: impl Into<String>,
        frontend_url: impl Into<String>,
    ) -> Self {
        Self {
            certificate_service_url: certificate_service_url
                .into()
                .trim_end_matches('/')
                .to_string(),
            frontend_url: frontend_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Locations of the configuration snapshots served by the in-memory collaborators.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub health_certificates: PathBuf,
    pub form_pages: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidUrl { variable: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidUrl { variable } => {
                write!(f, "{variable} must be an http:// or https:// address")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidPort | ConfigError::InvalidUrl { .. } => None,
            ConfigError::InvalidHost { source } => Some(source),
        }
    }
}
