//! Runners for the page, copy and interactive modes

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;
use std::thread;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::application::ports::{Clipboard, ConfigStore};
use crate::application::{CopyAction, CopyConfig, CopyError};
use crate::domain::config::AppConfig;
use crate::domain::copy::CopyIndicator;
use crate::domain::page::{Feature, FeatureCategory, PageContent};
use crate::infrastructure::{create_clipboard, create_notifier, XdgConfigStore};

use super::args::SiteOptions;
use super::presenter::Presenter;
use super::signals::ShutdownSignal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variable that selects the theme
pub const THEME_ENV: &str = "SMOLDB_SITE_THEME";

/// The copy widget wired to the configured adapters
pub type SiteCopyAction = CopyAction<Box<dyn Clipboard>>;

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let store = XdgConfigStore::new();
    let file_config = store.load_or_empty().await;

    let env_config = AppConfig {
        theme: env::var(THEME_ENV).ok().filter(|s| !s.is_empty()),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}

/// Page content for the given options
pub fn page_for(options: &SiteOptions) -> PageContent {
    PageContent::smoldb().with_run_command(options.command.clone())
}

/// Build the copy widget from options
pub fn build_copy_action(options: &SiteOptions) -> SiteCopyAction {
    let config = CopyConfig {
        dwell: options.dwell,
        notify: options.notify,
        notify_failure: options.notify_failure,
    };
    CopyAction::new(
        options.command.clone(),
        config,
        create_clipboard(options.clipboard_tool),
        create_notifier(options.notify, options.notifier),
    )
}

/// Render the landing page (or its JSON form)
pub fn run_show(options: &SiteOptions, json: bool, category: Option<FeatureCategory>) -> ExitCode {
    let presenter = Presenter::with_theme(options.theme);
    let page = page_for(options);
    let features: Vec<&Feature> = match category {
        Some(category) => page.features_in(category).collect(),
        None => page.features.iter().collect(),
    };

    if json {
        let shown = PageContent {
            features: features.into_iter().cloned().collect(),
            ..page.clone()
        };
        return match serde_json::to_string_pretty(&shown) {
            Ok(text) => {
                presenter.output(&text);
                ExitCode::from(EXIT_SUCCESS)
            }
            Err(e) => {
                presenter.error(&format!("Failed to serialize page: {}", e));
                ExitCode::from(EXIT_ERROR)
            }
        };
    }

    print!(
        "{}",
        presenter.render_page_with(&page, &features, CopyIndicator::Idle)
    );
    ExitCode::from(EXIT_SUCCESS)
}

/// Copy the run command once and hold the confirmation for the dwell time
pub async fn run_copy(options: &SiteOptions) -> ExitCode {
    let presenter = Presenter::with_theme(options.theme);
    let action = build_copy_action(options);

    match action.activate().await {
        Ok(()) => {
            presenter.output(&presenter.render_copy_line(action.payload(), action.indicator()));
            presenter.success("Copied to clipboard");

            // The clipboard adapter owns the selection; keep it alive until
            // the confirmation ends, or the user interrupts.
            tokio::select! {
                _ = action.wait_until_idle() => {}
                _ = tokio::signal::ctrl_c() => debug!("interrupted while confirmed"),
            }
            action.dispose();
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            presenter.error(&e.to_string());
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Render the page and copy the run command on every Enter
pub async fn run_interactive(options: &SiteOptions) -> ExitCode {
    let presenter = Presenter::with_theme(options.theme);
    let page = page_for(options);
    let action = build_copy_action(options);

    let shutdown = ShutdownSignal::new();
    shutdown.listen_for_ctrl_c();

    presenter.page(&page, action.indicator());
    presenter.info("Press Enter to copy the command, q to quit");

    // The view follows the widget state; the widget never draws itself.
    let view = {
        let mut rx = action.subscribe();
        let command = page.run_command.clone();
        let theme = options.theme;
        tokio::spawn(async move {
            let presenter = Presenter::with_theme(theme);
            while rx.changed().await.is_ok() {
                let indicator = *rx.borrow_and_update();
                presenter.redraw_copy_line(&command, indicator);
            }
        })
    };

    let mut lines = spawn_line_reader(io::BufReader::new(io::stdin()));
    let mut activations = 0u32;

    loop {
        let line = tokio::select! {
            line = lines.recv() => line,
            _ = shutdown.wait() => break,
        };

        match line {
            Some(Ok(input)) if input.trim().eq_ignore_ascii_case("q") => break,
            Some(Ok(_)) => match action.activate().await {
                Ok(()) => activations += 1,
                Err(CopyError::Disposed) => break,
                Err(e) => {
                    presenter.end_redraw();
                    presenter.error(&e.to_string());
                }
            },
            None => break,
            Some(Err(e)) => {
                presenter.error(&format!("Failed to read input: {}", e));
                break;
            }
        }
    }

    action.dispose();
    view.abort();
    presenter.end_redraw();
    info!(activations, "interactive session ended");

    ExitCode::from(EXIT_SUCCESS)
}

/// Read lines on a plain thread and forward them to the async side.
///
/// A blocked terminal read cannot be cancelled, so it must not live on the
/// runtime's blocking pool: the thread is left behind when the loop exits
/// and does not hold up process exit.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::UnboundedReceiver<io::Result<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    let spawned = thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if tx.send(line).is_err() || failed {
                    break;
                }
            }
        });
    if let Err(e) = spawned {
        // The receiver sees the error and then the closed channel
        let (tx, rx) = mpsc::unbounded_channel();
        let _ = tx.send(Err(e));
        return rx;
    }
    rx
}
