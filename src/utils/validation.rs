use crate::utils::error::{ProfileError, Result};
use url::Url;

pub const USERNAME_PLACEHOLDER: &str = "{username}";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Schemes the backend can be reached over.
pub fn is_http_scheme(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    let invalid = |reason: String| ProfileError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: url_str.to_string(),
        reason,
    };

    if url_str.is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    let url = Url::parse(url_str).map_err(|e| invalid(format!("Invalid URL format: {}", e)))?;
    if !is_http_scheme(&url) {
        return Err(invalid(format!("Unsupported URL scheme: {}", url.scheme())));
    }
    Ok(())
}

/// A bearer token may only travel over https or to a loopback host.
pub fn validate_token_transport(field_name: &str, base: &Url) -> Result<()> {
    let loopback = match base.host() {
        Some(url::Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    };

    if base.scheme() == "https" || (base.scheme() == "http" && loopback) {
        return Ok(());
    }

    Err(ProfileError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: "<redacted>".to_string(),
        reason: format!(
            "Refusing to send a token to {} over plain http; use https or a loopback host",
            base
        ),
    })
}

pub fn validate_port(field_name: &str, port: u16) -> Result<()> {
    if port == 0 {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: port.to_string(),
            reason: "Port must be between 1 and 65535".to_string(),
        });
    }
    Ok(())
}

pub fn validate_endpoint_template(field_name: &str, template: &str) -> Result<()> {
    if !template.starts_with('/') {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: "Endpoint must start with '/'".to_string(),
        });
    }

    if !template.contains(USERNAME_PLACEHOLDER) {
        return Err(ProfileError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: template.to_string(),
            reason: format!("Endpoint must contain {}", USERNAME_PLACEHOLDER),
        });
    }

    Ok(())
}
