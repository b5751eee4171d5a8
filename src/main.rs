use clap::Parser;
use profile_fetch::config::toml_config::TomlConfig;
use profile_fetch::utils::{logger, validation::Validate};
use profile_fetch::{
    CliConfig, HttpProfileSource, ProfileError, SearchController, Settings, SettingsLayer,
    TerminalDisplay, Trigger, View,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const SEARCH_FAILED_EXIT: i32 = 1;
const CONFIG_ERROR_EXIT: i32 = 2;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting profile-fetch");

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => exit_with_config_error(e),
    };
    tracing::info!(
        "Using backend {} with route {}",
        settings.client.api_base,
        settings.client.endpoint.as_str()
    );

    let source = match HttpProfileSource::new(settings.client) {
        Ok(source) => source,
        Err(e) => exit_with_config_error(e),
    };

    let mut display = TerminalDisplay::stdout(settings.format);
    if !std::io::stdout().is_terminal() {
        display = display.hide_loading();
    }

    let search = SearchController::new(Arc::new(source), Arc::new(display));

    if cli.interactive {
        run_interactive(&search).await?;
        return Ok(());
    }

    let input = cli.username.as_deref().unwrap_or_default();
    let view = search.trigger(input, Trigger::Action).await;

    if let View::Error { message } = &view {
        tracing::error!("Search failed: {}", message);
    }
    match exit_code_for(&view) {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}

/// Prompt, not-found and a loaded card all count as success.
fn exit_code_for(view: &View) -> i32 {
    match view {
        View::Error { .. } => SEARCH_FAILED_EXIT,
        _ => 0,
    }
}

fn load_settings(cli: &CliConfig) -> profile_fetch::Result<Settings> {
    let file_layer = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let config = TomlConfig::from_file(path)?;
            config.validate()?;
            SettingsLayer::from(config)
        }
        None => SettingsLayer::default(),
    };

    cli.settings_layer().or(file_layer).resolve()
}

fn exit_with_config_error(e: ProfileError) -> ! {
    tracing::error!(
        "Configuration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("{}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(CONFIG_ERROR_EXIT);
}

/// Every stdin line is an Enter-key search; a newer line cancels the pending one.
async fn run_interactive(
    search: &SearchController<HttpProfileSource, TerminalDisplay<std::io::Stdout>>,
) -> anyhow::Result<()> {
    eprintln!("Enter a GitHub username per line (Ctrl-D to quit).");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        search.spawn(&line, Trigger::EnterKey);
    }

    if let Some(view) = search.wait().await {
        tracing::debug!("Last search finished as {:?}", view);
    }
    tracing::info!("Input closed, exiting");
    Ok(())
}
