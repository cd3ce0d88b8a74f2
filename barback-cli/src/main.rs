use anyhow::Result;
use barback::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "barback")]
#[command(about = "Barback CLI - recipe archive tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export a bar's dataset into an archive container
    Export {
        /// Dataset file (JSON) to load
        #[arg(short, long)]
        dataset: PathBuf,

        /// Bar to export
        #[arg(short, long)]
        bar_id: i64,

        /// Output archive path (default: timestamped file in the backup directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Entity format: yaml or json
        #[arg(short, long, default_value = "yaml")]
        format: ExportFormat,

        /// Backup directory for generated archive paths
        #[arg(long)]
        backup_dir: Option<PathBuf>,

        /// Disable progress output
        #[arg(long)]
        no_progress: bool,
    },

    /// List the entries and manifest of a produced archive
    Inspect {
        /// Archive file to inspect
        #[arg(short, long)]
        archive: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Export {
            dataset,
            bar_id,
            output,
            format,
            backup_dir,
            no_progress,
        } => commands::export::run_export(&dataset, bar_id, output, format, backup_dir, no_progress),
        Commands::Inspect { archive } => commands::inspect::run_inspect(&archive),
    }
}
