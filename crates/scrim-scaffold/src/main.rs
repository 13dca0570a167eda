#![forbid(unsafe_code)]

//! `scrim-new`: generate Scrim component and modal skeletons.
//!
//! ```text
//! scrim-new component my-widget src/components
//! scrim-new modal confirm-box src/modals
//! scrim-new modal confirm-box            # dry run, prints to stdout
//! ```

mod generate;

use clap::{Parser, Subcommand};
use generate::Kind;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "scrim-new", version, about = "Generate Scrim component and modal skeletons")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a plain component skeleton.
    #[command(alias = "c")]
    Component {
        /// Kebab-case tag name, e.g. `my-widget`.
        tag_name: String,
        /// Output directory; omit for a dry run printed to stdout.
        out_dir: Option<PathBuf>,
    },
    /// Generate a modal component skeleton.
    #[command(alias = "m")]
    Modal {
        /// Kebab-case tag name, e.g. `confirm-box`.
        tag_name: String,
        /// Output directory; omit for a dry run printed to stdout.
        out_dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (kind, tag, out_dir) = match cli.command {
        Command::Component { tag_name, out_dir } => (Kind::Component, tag_name, out_dir),
        Command::Modal { tag_name, out_dir } => (Kind::Modal, tag_name, out_dir),
    };

    match generate::generate(kind, &tag, out_dir.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}
