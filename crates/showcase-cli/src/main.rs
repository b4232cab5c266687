mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Product showcase toolkit: card sizing, product adaptation, theme and
/// flip-card preferences.
#[derive(Debug, Parser)]
#[command(name = "showcase", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the size table, or the full grid layout of one size.
    Sizes {
        /// Size key (1-9).
        #[arg(short, long)]
        size: Option<i64>,
    },
    /// Find the size key closest to a pixel width.
    Nearest { pixels: f64 },
    /// Convert a gallery product JSON file (object or array) to components.
    Adapt { file: std::path::PathBuf },
    /// Show or change the color theme.
    Theme {
        #[command(subcommand)]
        action: Option<commands::ThemeAction>,
    },
    /// Show or change flip-card preferences.
    Prefs {
        #[command(subcommand)]
        action: Option<commands::PrefsAction>,
    },
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("showcase_core=info,showcase_cli=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Sizes { size } => commands::sizes(size),
        Command::Nearest { pixels } => commands::nearest(pixels),
        Command::Adapt { file } => commands::adapt(&file),
        Command::Theme { action } => commands::theme(action),
        Command::Prefs { action } => commands::prefs(action),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
