use serde::{Deserialize, Serialize};

pub const NO_BIO: &str = "No bio available";
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// GitHub profile as returned by the backend `/user/{username}` route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    pub avatar_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    pub followers: u64,
    pub public_repos: u64,
    #[serde(default)]
    pub location: Option<String>,
    pub html_url: String,
}

impl Profile {
    /// Name when present, login otherwise.
    pub fn title(&self) -> &str {
        present(&self.name).unwrap_or(&self.login)
    }

    pub fn bio_or_default(&self) -> &str {
        present(&self.bio).unwrap_or(NO_BIO)
    }

    pub fn location_or_default(&self) -> &str {
        present(&self.location).unwrap_or(UNKNOWN_LOCATION)
    }
}

// Empty strings count as missing.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Outcome of one backend call. A 404 is an answer, not a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Profile),
    NotFound,
}

/// Everything the display container can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Prompt,
    Loading,
    NotFound { username: String },
    Error { message: String },
    Loaded(Profile),
}

impl View {
    /// Final views end a search; `Loading` is the only transient one.
    pub fn is_final(&self) -> bool {
        !matches!(self, View::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Explicit activation of the search control.
    Action,
    EnterKey,
}
