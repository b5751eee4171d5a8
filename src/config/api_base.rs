use crate::utils::validation::is_http_scheme;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
pub const DEFAULT_BACKEND_PORT: u16 = 8000;

/// Resolve the backend origin from the page origin the client runs under.
///
/// An `http`/`https` origin targets the same host on `backend_port`. Anything
/// else (no origin, `file://`, garbage) falls back to [`DEFAULT_API_BASE`].
pub fn resolve_api_base(page_origin: Option<&str>, backend_port: u16) -> Url {
    page_origin
        .and_then(|origin| Url::parse(origin).ok())
        .filter(is_http_scheme)
        .and_then(|url| {
            let host = url.host_str()?;
            Url::parse(&format!("{}://{}:{}", url.scheme(), host, backend_port)).ok()
        })
        .unwrap_or_else(default_api_base)
}

pub fn default_api_base() -> Url {
    Url::parse(DEFAULT_API_BASE).expect("default api base is a valid URL")
}
