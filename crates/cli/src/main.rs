use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use classboard_tui::{Launch, SideNavOptions};
use classboard_types::{NavEntrySpec, NavPositioning, SelectedVariant, SideNavVariant};

/// Terminal dashboard for classroom attendance and mood analytics.
#[derive(Debug, Parser)]
#[command(name = "classboard", version, about)]
struct Cli {
    /// Structural rendering of the side navigation
    #[arg(long, value_enum, default_value_t = VariantArg::Full)]
    variant: VariantArg,

    /// How the persistent navigation is positioned
    #[arg(long, value_enum, default_value_t = PositioningArg::Fixed)]
    positioning: PositioningArg,

    /// Styling for the selected entry
    #[arg(long, value_enum, default_value_t = SelectedArg::TextOnly)]
    selected_variant: SelectedArg,

    /// Navigation width in cells
    #[arg(long, default_value_t = 30)]
    width: u16,

    /// Navigation width in cells when minimized
    #[arg(long, default_value_t = 8)]
    minimized_width: u16,

    /// Theme id
    #[arg(long, default_value = classboard_tui::DEFAULT_THEME)]
    theme: String,

    /// JSON file with the navigation tree; defaults to the built-in config
    #[arg(long)]
    nav_config: Option<std::path::PathBuf>,

    /// Initial location
    #[arg(long, default_value = "/dashboard")]
    start_path: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    Full,
    Minimized,
    Temporary,
}

impl From<VariantArg> for SideNavVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Full => SideNavVariant::Full,
            VariantArg::Minimized => SideNavVariant::Minimized,
            VariantArg::Temporary => SideNavVariant::Temporary,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PositioningArg {
    Fixed,
    Absolute,
}

impl From<PositioningArg> for NavPositioning {
    fn from(arg: PositioningArg) -> Self {
        match arg {
            PositioningArg::Fixed => NavPositioning::Fixed,
            PositioningArg::Absolute => NavPositioning::Absolute,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SelectedArg {
    Primary,
    TextOnly,
}

impl From<SelectedArg> for SelectedVariant {
    fn from(arg: SelectedArg) -> Self {
        match arg {
            SelectedArg::Primary => SelectedVariant::Primary,
            SelectedArg::TextOnly => SelectedVariant::TextOnly,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    tracing::debug!(theme = %cli.theme, start_path = %cli.start_path, "starting classboard");

    let entries = match &cli.nav_config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading nav config {}", path.display()))?;
            let specs: Vec<NavEntrySpec> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing nav config {}", path.display()))?;
            specs.into_iter().map(NavEntrySpec::into_entry).collect()
        }
        None => classboard_tui::default_nav_config(),
    };

    let options = SideNavOptions {
        variant: cli.variant.into(),
        positioning: cli.positioning.into(),
        selected_variant: cli.selected_variant.into(),
        width: cli.width,
        minimized_width: cli.minimized_width,
        ..SideNavOptions::default()
    };

    classboard_tui::run(Launch {
        entries,
        options,
        theme_id: cli.theme,
        start_path: cli.start_path,
    })
    .await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
