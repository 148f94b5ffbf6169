//! Command-line interface definitions

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "resume-screener",
    about = "Semantic + skill-gap resume screening",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the scoring service
    Serve {
        /// Bind address, overrides the configured one
        #[arg(long)]
        bind: Option<String>,
    },

    /// Send a resume and job description to the service and render the report
    Analyze {
        /// Resume file (PDF)
        #[arg(short, long)]
        resume: PathBuf,

        /// File containing the job description text
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description passed inline
        #[arg(long)]
        job_text: Option<String>,

        /// Scoring service URL, overrides the configured one
        #[arg(long)]
        server: Option<String>,
    },

    /// Show or reset the configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current configuration
    Show,
    /// Reset the configuration file to defaults
    Reset,
}

/// Validate that a file has one of the allowed extensions
pub fn validate_file_extension(
    path: &Path,
    allowed: &[&str],
) -> std::result::Result<(), String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .unwrap_or_default();

    if allowed.contains(&extension.as_str()) {
        Ok(())
    } else {
        Err(format!(
            "'{}' must have one of the extensions: {}",
            path.display(),
            allowed.join(", ")
        ))
    }
}
