use httpmock::prelude::*;
use profile_fetch::config::toml_config::TomlConfig;
use profile_fetch::{
    HttpProfileSource, MemoryDisplay, OutputFormat, SearchController, SettingsLayer, Trigger,
    View,
};
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn search_against(
    server: &MockServer,
    endpoint: Option<&str>,
    format: OutputFormat,
) -> SearchController<HttpProfileSource, MemoryDisplay> {
    let settings = SettingsLayer {
        api_base: Some(server.base_url()),
        endpoint: endpoint.map(str::to_string),
        format: Some(format),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let source = HttpProfileSource::new(settings.client).unwrap();
    SearchController::new(
        Arc::new(source),
        Arc::new(MemoryDisplay::new(settings.format)),
    )
}

#[tokio::test]
async fn test_end_to_end_torvalds_card() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/user/torvalds");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "login": "torvalds",
                "avatar_url": "https://avatars.githubusercontent.com/u/1024025",
                "followers": 150000,
                "public_repos": 10,
                "html_url": "https://github.com/torvalds"
            }));
    });

    let search = search_against(&server, None, OutputFormat::Html);
    let view = search.trigger("torvalds", Trigger::Action).await;

    api_mock.assert();
    assert!(matches!(view, View::Loaded(_)));

    let html = search.display().content();
    assert!(html.contains("<h2>torvalds</h2>"));
    assert!(html.contains("No bio available"));
    assert!(html.contains("Followers: 150000"));
    assert!(html.contains("Public Repos: 10"));
    assert!(html.contains("Location: Unknown"));
    assert!(html.contains("href=\"https://github.com/torvalds\""));
}

#[tokio::test]
async fn test_end_to_end_not_found() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/user/no-such-user-42");
        then.status(404).body("{\"detail\":\"User not found\"}");
    });

    let search = search_against(&server, None, OutputFormat::Text);
    let view = search.trigger("no-such-user-42", Trigger::EnterKey).await;

    api_mock.assert();
    assert_eq!(
        view,
        View::NotFound {
            username: "no-such-user-42".to_string()
        }
    );
    let text = search.display().content();
    assert!(text.contains("no-such-user-42"));
    assert!(text.contains("not found"));
    assert!(!search
        .display()
        .history()
        .iter()
        .any(|v| matches!(v, View::Loaded(_))));
}

#[tokio::test]
async fn test_end_to_end_error_body_and_status_fallback() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/user/limited");
        then.status(429).body("rate limited");
    });
    server.mock(|when, then| {
        when.method(GET).path("/user/broken");
        then.status(500);
    });

    let search = search_against(&server, None, OutputFormat::Text);

    search.trigger("limited", Trigger::Action).await;
    assert!(search.display().content().contains("rate limited"));

    search.trigger("broken", Trigger::Action).await;
    let text = search.display().content();
    assert!(text.contains("500"));
    assert!(text.contains("request failed"));
}

#[tokio::test]
async fn test_end_to_end_blank_input_sends_nothing() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET);
        then.status(200);
    });

    let search = search_against(&server, None, OutputFormat::Text);
    let view = search.trigger("   ", Trigger::EnterKey).await;

    assert_eq!(view, View::Prompt);
    api_mock.assert_hits(0);
    assert_eq!(search.display().content(), "Please enter a GitHub username.");
}

#[tokio::test]
async fn test_enter_and_action_render_the_same() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/user/octocat");
        then.status(200).json_body(serde_json::json!({
            "login": "octocat",
            "name": "The Octocat",
            "avatar_url": "https://avatars.githubusercontent.com/u/583231",
            "bio": "GitHub mascot",
            "followers": 20000,
            "public_repos": 8,
            "location": "San Francisco",
            "html_url": "https://github.com/octocat"
        }));
    });

    let search = search_against(&server, None, OutputFormat::Text);
    search.trigger("octocat", Trigger::Action).await;
    let via_action = search.display().content();
    search.trigger(" octocat ", Trigger::EnterKey).await;
    let via_enter = search.display().content();

    api_mock.assert_hits(2);
    assert_eq!(via_action, via_enter);
    assert!(via_action.starts_with("The Octocat\nGitHub mascot"));
}

#[tokio::test]
async fn test_legacy_route_from_config_file() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/github/octocat");
        then.status(404);
    });

    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        "[api]\nbase = \"{}\"\nendpoint = \"/api/github/{{username}}\"\n\n[display]\nformat = \"html\"\n",
        server.base_url()
    )
    .unwrap();

    let settings = SettingsLayer::default()
        .or(TomlConfig::from_file(file.path()).unwrap().into())
        .resolve()
        .unwrap();
    assert_eq!(settings.format, OutputFormat::Html);

    let search = SearchController::new(
        Arc::new(HttpProfileSource::new(settings.client).unwrap()),
        Arc::new(MemoryDisplay::new(settings.format)),
    );
    search.trigger("octocat", Trigger::Action).await;

    api_mock.assert();
    assert_eq!(
        search.display().content(),
        "<p class=\"error\">User &quot;octocat&quot; not found.</p>"
    );
}

#[cfg(feature = "cli")]
#[tokio::test]
async fn test_github_token_env_never_reaches_the_backend() {
    use clap::Parser;
    use profile_fetch::CliConfig;

    let server = MockServer::start();
    let authorized = server.mock(|when, then| {
        when.method(GET).header_exists("authorization");
        then.status(500);
    });
    let anonymous = server.mock(|when, then| {
        when.method(GET).path("/user/octocat");
        then.status(404);
    });

    std::env::set_var("GITHUB_TOKEN", "ghp_from_env");
    let base = server.base_url();
    let cli =
        CliConfig::try_parse_from(["profile-fetch", "octocat", "--api-base", base.as_str()])
            .unwrap();
    std::env::remove_var("GITHUB_TOKEN");

    let settings = cli.settings_layer().resolve().unwrap();
    let source = HttpProfileSource::new(settings.client).unwrap();
    let search = SearchController::new(
        Arc::new(source),
        Arc::new(MemoryDisplay::new(settings.format)),
    );

    let view = search.trigger("octocat", Trigger::Action).await;

    assert!(matches!(view, View::NotFound { .. }));
    authorized.assert_hits(0);
    anonymous.assert();
}
