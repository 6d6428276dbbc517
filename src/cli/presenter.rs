//! CLI presenter for output formatting

use std::io::{self, IsTerminal, Write};

use colored::{Color, Colorize};

use crate::domain::copy::CopyIndicator;
use crate::domain::page::{Feature, PageContent};
use crate::domain::theme::ThemeMode;

/// Label on the copy affordance
pub const COPY_LABEL: &str = "Copy command";

/// Label shown while the copy is confirmed
pub const COPIED_LABEL: &str = "Copied";

const RULE_WIDTH: usize = 48;

/// Colors used for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
    success: Color,
}

impl Palette {
    fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::BrightBlack,
                success: Color::Green,
            },
            // System is resolved before we get here
            ThemeMode::Dark | ThemeMode::System => Self {
                accent: Color::Cyan,
                text: Color::BrightWhite,
                muted: Color::BrightBlack,
                success: Color::BrightGreen,
            },
        }
    }
}

/// Presenter for CLI output formatting
pub struct Presenter {
    palette: Palette,
    /// stdout is a terminal, so lines can be rewritten in place
    live: bool,
}

impl Presenter {
    /// Create a presenter with the system theme
    pub fn new() -> Self {
        Self::with_theme(ThemeMode::System)
    }

    /// Create a presenter for a theme, resolving `system` from the terminal
    pub fn with_theme(theme: ThemeMode) -> Self {
        let colorfgbg = std::env::var("COLORFGBG").ok();
        Self {
            palette: Palette::for_mode(theme.resolve(colorfgbg.as_deref())),
            live: io::stdout().is_terminal(),
        }
    }

    /// Format the whole landing page
    pub fn render_page(&self, page: &PageContent, indicator: CopyIndicator) -> String {
        let features: Vec<&Feature> = page.features.iter().collect();
        self.render_page_with(page, &features, indicator)
    }

    /// Format the landing page with a chosen subset of features
    pub fn render_page_with(
        &self,
        page: &PageContent,
        features: &[&Feature],
        indicator: CopyIndicator,
    ) -> String {
        let p = self.palette;
        let rule = "─".repeat(RULE_WIDTH).color(p.muted).to_string();
        let mut out = String::new();

        out.push_str(&format!("{}\n", page.title.color(p.text).bold()));
        out.push_str(&format!("{}\n", page.tagline.color(p.muted)));
        out.push_str(&format!("{}\n", page.repository_url.color(p.accent).underline()));
        out.push_str(&format!("\n{}\n\n", rule));

        for feature in features {
            out.push_str(&self.render_feature(feature));
            out.push('\n');
        }

        out.push_str(&format!("{}\n\n", rule));
        out.push_str(&self.render_copy_line(&page.run_command, indicator));
        out.push('\n');
        out
    }

    /// Format one feature card
    pub fn render_feature(&self, feature: &Feature) -> String {
        let p = self.palette;
        format!(
            "{} {}\n  {}\n",
            feature.icon.glyph().color(p.accent),
            feature.title.color(p.text).bold(),
            feature.description.color(p.muted)
        )
    }

    /// Format the run snippet with its copy affordance.
    /// The glyph is a pure function of the indicator.
    pub fn render_copy_line(&self, command: &str, indicator: CopyIndicator) -> String {
        let p = self.palette;
        let button = match indicator {
            CopyIndicator::Idle => {
                format!("[{} {}]", indicator.glyph(), COPY_LABEL).color(p.muted)
            }
            CopyIndicator::Confirmed => {
                format!("[{} {}]", indicator.glyph(), COPIED_LABEL).color(p.success)
            }
        };
        format!("  {}  {}", command.color(p.text), button)
    }

    /// Print the landing page to stdout
    pub fn page(&self, page: &PageContent, indicator: CopyIndicator) {
        print!("{}", self.render_page(page, indicator));
        let _ = io::stdout().flush();
    }

    /// Redraw the copy line in place, or append it when stdout is not a terminal
    pub fn redraw_copy_line(&self, command: &str, indicator: CopyIndicator) {
        print!("{}", self.redraw_text(command, indicator));
        let _ = io::stdout().flush();
    }

    /// Move past a line left open by [`Presenter::redraw_copy_line`]
    pub fn end_redraw(&self) {
        if self.live {
            println!();
        }
    }

    fn redraw_text(&self, command: &str, indicator: CopyIndicator) -> String {
        let line = self.render_copy_line(command, indicator);
        if self.live {
            format!("\r\x1b[2K{}", line)
        } else {
            format!("{}\n", line)
        }
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".color(self.palette.accent), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".color(self.palette.success), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.color(self.palette.accent), value);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
