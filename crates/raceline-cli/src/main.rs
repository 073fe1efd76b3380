//! Raceline CLI — track validation and inspection.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "raceline")]
#[command(version, about = "Raceline — track navigation core tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a track description and report whether it is usable.
    Validate {
        /// Path to the track description XML.
        path: String,
    },

    /// Load a track and print its structure.
    Inspect {
        /// Path to the track description XML.
        path: String,

        /// Also list every start slot.
        #[arg(long)]
        starts: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { path } => commands::validate(&path),
        Commands::Inspect { path, starts } => commands::inspect(&path, starts),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
