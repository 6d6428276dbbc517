//! smoldb-site CLI entry point

use std::process::ExitCode;

use clap::Parser;

use smoldb_site::cli::{
    app::{load_merged_config, run_copy, run_interactive, run_show, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands, SiteOptions},
    config_cmd::handle_config_command,
    logging,
    presenter::Presenter,
};
use smoldb_site::domain::config::AppConfig;
use smoldb_site::domain::copy::DwellTime;
use smoldb_site::domain::theme::ThemeMode;
use smoldb_site::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let theme_arg = cli.theme.map(ThemeMode::from);

    if let Some(Commands::Config { action }) = cli.command {
        let presenter = Presenter::with_theme(theme_arg.unwrap_or_default());
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    // Validate the dwell flag before it is merged
    let dwell_ms = match cli.dwell.as_deref().map(str::parse::<DwellTime>) {
        Some(Ok(dwell)) => Some(dwell.as_millis()),
        Some(Err(e)) => {
            Presenter::new().error(&e.to_string());
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
        None => None,
    };

    let cli_config = AppConfig {
        dwell_ms,
        notify: if cli.no_notify { Some(false) } else { None },
        theme: theme_arg.map(|t| t.to_string()),
        ..Default::default()
    };

    let config = load_merged_config(cli_config).await;

    let options = SiteOptions {
        theme: config.theme_or_default(),
        dwell: config.dwell_or_default(),
        notify: config.notify_or_default(),
        notify_failure: config.notify_failure_or_default(),
        notifier: config.notifier_or_default(),
        clipboard_tool: config.clipboard_tool_or_default(),
        command: config.command_or_default().to_string(),
    };

    match cli.command {
        Some(Commands::Copy) => run_copy(&options).await,
        Some(Commands::Interactive) => run_interactive(&options).await,
        Some(Commands::Show { json, category }) => {
            run_show(&options, json, category.map(Into::into))
        }
        Some(Commands::Config { .. }) | None => run_show(&options, false, None),
    }
}
