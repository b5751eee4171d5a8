use crate::config::ClientConfig;
use crate::domain::model::{Lookup, Profile};
use crate::domain::ports::ProfileSource;
use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::validate_token_transport;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};

const USER_AGENT_VALUE: &str = concat!("profile-fetch/", env!("CARGO_PKG_VERSION"));

/// Profile source backed by the REST backend.
///
/// One GET per lookup, no timeout, no retry.
#[derive(Debug, Clone)]
pub struct HttpProfileSource {
    client: Client,
    config: ClientConfig,
}

impl HttpProfileSource {
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.token.is_some() {
            validate_token_transport("api.token", &config.api_base)?;
        }
        let client = build_client(config.token.as_deref())?;
        Ok(Self { client, config })
    }
}

fn build_client(token: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
            ProfileError::InvalidConfigValueError {
                field: "api.token".to_string(),
                value: "<redacted>".to_string(),
                reason: "Token contains characters not allowed in a header".to_string(),
            }
        })?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    Ok(Client::builder().default_headers(headers).build()?)
}

#[async_trait]
impl ProfileSource for HttpProfileSource {
    async fn lookup(&self, username: &str) -> Result<Lookup> {
        if username.trim().is_empty() {
            return Err(ProfileError::EmptyInput);
        }

        let url = self.config.profile_url(username)?;
        tracing::debug!("Requesting profile from: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Backend response status: {}", status);

        if status == StatusCode::NOT_FOUND {
            return Ok(Lookup::NotFound);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Backend returned {} for {}", status, username);
            return Err(ProfileError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let profile: Profile = serde_json::from_slice(&bytes)?;
        Ok(Lookup::Found(profile))
    }
}
