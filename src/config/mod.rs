pub mod api_base;
pub mod endpoint;
pub mod toml_config;

use crate::core::render::OutputFormat;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{self, Validate};
use api_base::{resolve_api_base, DEFAULT_BACKEND_PORT};
use endpoint::EndpointTemplate;
use toml_config::TomlConfig;
use url::Url;

/// Everything the HTTP source needs to build a request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base: Url,
    pub endpoint: EndpointTemplate,
    pub token: Option<String>,
}

impl ClientConfig {
    pub fn new(api_base: Url) -> Self {
        Self {
            api_base,
            endpoint: EndpointTemplate::default(),
            token: None,
        }
    }

    pub fn with_endpoint(mut self, endpoint: EndpointTemplate) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn profile_url(&self, username: &str) -> Result<Url> {
        self.endpoint.url_for(&self.api_base, username)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(api_base::default_api_base())
    }
}

/// Raw settings from one layer (command line or file). `None` means "not set here".
#[derive(Debug, Clone, Default)]
pub struct SettingsLayer {
    pub api_base: Option<String>,
    pub origin: Option<String>,
    pub backend_port: Option<u16>,
    pub endpoint: Option<String>,
    pub token: Option<String>,
    pub format: Option<OutputFormat>,
}

impl SettingsLayer {
    /// Fill every unset field from `lower`.
    pub fn or(self, lower: SettingsLayer) -> SettingsLayer {
        SettingsLayer {
            api_base: self.api_base.or(lower.api_base),
            origin: self.origin.or(lower.origin),
            backend_port: self.backend_port.or(lower.backend_port),
            endpoint: self.endpoint.or(lower.endpoint),
            token: self.token.or(lower.token),
            format: self.format.or(lower.format),
        }
    }

    pub fn resolve(self) -> Result<Settings> {
        self.validate()?;

        let api_base = match &self.api_base {
            Some(base) => Url::parse(base).map_err(|e| ProfileError::InvalidConfigValueError {
                field: "api.base".to_string(),
                value: base.clone(),
                reason: e.to_string(),
            })?,
            None => resolve_api_base(
                self.origin.as_deref(),
                self.backend_port.unwrap_or(DEFAULT_BACKEND_PORT),
            ),
        };

        let endpoint = match &self.endpoint {
            Some(template) => EndpointTemplate::parse(template)?,
            None => EndpointTemplate::default(),
        };

        let client = ClientConfig::new(api_base)
            .with_endpoint(endpoint)
            .with_token(self.token);
        if client.token.is_some() {
            validation::validate_token_transport("api.token", &client.api_base)?;
        }

        Ok(Settings {
            client,
            format: self.format.unwrap_or_default(),
        })
    }
}

impl Validate for SettingsLayer {
    fn validate(&self) -> Result<()> {
        if let Some(base) = &self.api_base {
            validation::validate_url("api.base", base)?;
        }
        if let Some(port) = self.backend_port {
            validation::validate_port("api.backend_port", port)?;
        }
        if let Some(endpoint) = &self.endpoint {
            validation::validate_endpoint_template("api.endpoint", endpoint)?;
        }
        Ok(())
    }
}

impl From<TomlConfig> for SettingsLayer {
    fn from(config: TomlConfig) -> Self {
        SettingsLayer {
            api_base: config.api.base,
            origin: config.api.origin,
            backend_port: config.api.backend_port,
            endpoint: config.api.endpoint,
            token: config.api.token,
            format: config.display.format,
        }
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub client: ClientConfig,
    pub format: OutputFormat,
}

#[cfg(feature = "cli")]
mod cli {
    use super::SettingsLayer;
    use crate::core::render::OutputFormat;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Clone, Parser)]
    #[command(name = "profile-fetch")]
    #[command(about = "Look up a GitHub profile through the profile backend")]
    pub struct CliConfig {
        /// GitHub username to look up
        pub username: Option<String>,

        /// Backend origin, e.g. http://127.0.0.1:8000
        #[arg(long)]
        pub api_base: Option<String>,

        /// Page origin used to derive the backend origin when --api-base is not given
        #[arg(long)]
        pub origin: Option<String>,

        #[arg(long)]
        pub backend_port: Option<u16>,

        /// Profile route template, e.g. /user/{username}
        #[arg(long)]
        pub endpoint: Option<String>,

        #[arg(long, value_enum)]
        pub format: Option<OutputFormat>,

        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Read usernames from stdin, one search per line
        #[arg(short, long)]
        pub interactive: bool,

        /// Bearer token forwarded to the backend (https or loopback only)
        #[arg(long)]
        pub token: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,
    }

    impl CliConfig {
        pub fn settings_layer(&self) -> SettingsLayer {
            SettingsLayer {
                api_base: self.api_base.clone(),
                origin: self.origin.clone(),
                backend_port: self.backend_port,
                endpoint: self.endpoint.clone(),
                token: self.token.clone(),
                format: self.format,
            }
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;
