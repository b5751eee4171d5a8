//! Pure mapping from [`View`] to the text placed in the display container.

use crate::domain::model::{Profile, View};
use serde::{Deserialize, Serialize};

pub const PROMPT_MESSAGE: &str = "Please enter a GitHub username.";
pub const LOADING_MESSAGE: &str = "Loading...";
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
}

impl OutputFormat {
    pub fn render(self, view: &View) -> String {
        match self {
            OutputFormat::Text => render_text(view),
            OutputFormat::Html => render_html(view),
        }
    }
}

pub fn not_found_message(username: &str) -> String {
    format!("User \"{}\" not found.", username)
}

fn error_message(message: &str) -> &str {
    if message.trim().is_empty() {
        GENERIC_ERROR_MESSAGE
    } else {
        message
    }
}

pub fn render_text(view: &View) -> String {
    match view {
        View::Prompt => PROMPT_MESSAGE.to_string(),
        View::Loading => LOADING_MESSAGE.to_string(),
        View::NotFound { username } => not_found_message(username),
        View::Error { message } => format!("Error: {}", error_message(message)),
        View::Loaded(profile) => profile_text(profile),
    }
}

fn profile_text(profile: &Profile) -> String {
    [
        profile.title().to_string(),
        profile.bio_or_default().to_string(),
        format!("Avatar: {}", profile.avatar_url),
        format!("Followers: {}", profile.followers),
        format!("Public Repos: {}", profile.public_repos),
        format!("Location: {}", profile.location_or_default()),
        format!("View on GitHub: {}", profile.html_url),
    ]
    .join("\n")
}

pub fn render_html(view: &View) -> String {
    match view {
        View::Prompt => format!("<p>{}</p>", PROMPT_MESSAGE),
        View::Loading => format!("<p>{}</p>", LOADING_MESSAGE),
        View::NotFound { username } => {
            format!("<p class=\"error\">{}</p>", escape_html(&not_found_message(username)))
        }
        View::Error { message } => {
            format!("<p class=\"error\">{}</p>", escape_html(error_message(message)))
        }
        View::Loaded(profile) => profile_html(profile),
    }
}

fn profile_html(profile: &Profile) -> String {
    format!(
        concat!(
            "<div class=\"card\">\n",
            "  <img src=\"{avatar}\" alt=\"{login}\" class=\"avatar\" />\n",
            "  <h2>{title}</h2>\n",
            "  <p>{bio}</p>\n",
            "  <ul>\n",
            "    <li>Followers: {followers}</li>\n",
            "    <li>Public Repos: {repos}</li>\n",
            "    <li>Location: {location}</li>\n",
            "  </ul>\n",
            "  <a href=\"{url}\" target=\"_blank\" class=\"button\">View on GitHub</a>\n",
            "</div>"
        ),
        avatar = escape_html(&profile.avatar_url),
        login = escape_html(&profile.login),
        title = escape_html(profile.title()),
        bio = escape_html(profile.bio_or_default()),
        followers = profile.followers,
        repos = profile.public_repos,
        location = escape_html(profile.location_or_default()),
        url = escape_html(&profile.html_url),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
