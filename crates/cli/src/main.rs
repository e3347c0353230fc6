use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use stepwise_tui::{App, NavigationBarState, load_theme, render_snapshot, step_report};
use stepwise_types::{StepRecord, WizardDefinition, WizardModel};
use stepwise_util::UserPreferences;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod settings;

/// Render a wizard navigation bar in the terminal.
#[derive(Parser, Debug)]
#[command(name = "stepwise", version, about)]
struct Cli {
    /// Reading direction: left-to-right or right-to-left
    #[arg(long)]
    direction: Option<String>,

    /// Indicator style: small, large-filled, large-empty, large-filled-symbols, large-empty-symbols
    #[arg(long)]
    style: Option<String>,

    /// horizontal or vertical
    #[arg(long)]
    orientation: Option<String>,

    /// Theme id or alias (classic, nord, dracula, dracula_hc, ansi256)
    #[arg(long)]
    theme: Option<String>,

    /// JSON wizard definition; a built-in sample is used when omitted
    #[arg(long)]
    wizard: Option<PathBuf>,

    /// Lock the navigation bar so no step can be clicked
    #[arg(long)]
    disable_navigation_bar: bool,

    /// Print one rendered frame instead of starting the interactive UI
    #[arg(long)]
    print: bool,

    /// Print the per-step classes as JSON instead of starting the interactive UI
    #[arg(long)]
    json: bool,

    /// Frame width for --print
    #[arg(long, default_value_t = 80)]
    width: u16,

    /// Frame height for --print
    #[arg(long, default_value_t = 14)]
    height: u16,

    /// Remember the resulting theme, style, orientation and direction
    #[arg(long)]
    save: bool,
}

impl Cli {
    fn overrides(&self) -> settings::Overrides<'_> {
        settings::Overrides {
            direction: self.direction.as_deref(),
            style: self.style.as_deref(),
            orientation: self.orientation.as_deref(),
            theme: self.theme.as_deref(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut preferences = open_preferences();
    let settings = settings::resolve(&cli.overrides(), preferences.payload())?;

    let mut wizard = load_wizard(cli.wizard.as_deref())?;
    if cli.disable_navigation_bar {
        wizard.set_disable_navigation_bar(true);
    }
    let nav_bar = NavigationBarState::new(settings.direction, settings.variant);
    let theme = load_theme(settings.theme.as_deref());
    let mut app = App::new(wizard, nav_bar, theme);

    if cli.print {
        for line in render_snapshot(&mut app, cli.width, cli.height)? {
            println!("{line}");
        }
    }
    if cli.json {
        let report = step_report(&app.nav_bar.view(&app.wizard));
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    if !cli.print && !cli.json {
        app = stepwise_tui::run(app).await?;
    }

    if cli.save {
        preferences
            .save(app.preferences_payload())
            .with_context(|| format!("saving preferences to {}", preferences.path().display()))?;
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open_preferences() -> UserPreferences {
    UserPreferences::new().unwrap_or_else(|error| {
        warn!(error = %error, "preferences unavailable; continuing without them");
        UserPreferences::ephemeral()
    })
}

fn load_wizard(path: Option<&Path>) -> Result<WizardModel> {
    match path {
        Some(path) => {
            let definition = WizardDefinition::load_from_file(path)
                .with_context(|| format!("loading wizard definition {}", path.display()))?;
            Ok(definition.into_model())
        }
        None => Ok(sample_wizard()),
    }
}

fn sample_wizard() -> WizardModel {
    WizardModel::new(vec![
        StepRecord::new("Account").with_symbol("1").as_selected(),
        StepRecord::new("Profile").with_symbol("2"),
        StepRecord::new("Billing").with_symbol("3").as_optional(),
        StepRecord::new("Confirm").with_symbol("4"),
    ])
}
