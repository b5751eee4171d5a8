use crate::utils::error::{ProfileError, Result};
use crate::utils::validation::{validate_endpoint_template, USERNAME_PLACEHOLDER};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "/user/{username}";
/// Route served by the FastAPI backend revision.
pub const LEGACY_ENDPOINT: &str = "/api/github/{username}";

/// Path template for the profile route, e.g. `/user/{username}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointTemplate(String);

impl EndpointTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        validate_endpoint_template("api.endpoint", template)?;
        Ok(Self(template.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the request URL for `username` under `base`.
    ///
    /// Template segments are appended to whatever path `base` already has;
    /// the username is percent-encoded as a single path segment.
    pub fn url_for(&self, base: &Url, username: &str) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| ProfileError::ConfigError {
                message: format!("API base cannot carry a path: {}", base),
            })?;
            segments.pop_if_empty();
            for segment in self.0.split('/').filter(|s| !s.is_empty()) {
                segments.push(&segment.replace(USERNAME_PLACEHOLDER, username));
            }
        }
        Ok(url)
    }
}

impl Default for EndpointTemplate {
    fn default() -> Self {
        Self(DEFAULT_ENDPOINT.to_string())
    }
}
