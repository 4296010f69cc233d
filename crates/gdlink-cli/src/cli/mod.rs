//! CLI for gdlink.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use gdlink_core::config;
use gdlink_core::MediaType;
use std::path::PathBuf;

use commands::{
    run_batch, run_classify, run_completions, run_config_path, run_convert, run_man,
    ConvertFlags, ConvertOptions,
};

/// Top-level CLI for gdlink.
#[derive(Debug, Parser)]
#[command(name = "gdlink")]
#[command(
    about = "gdlink: turn Google Drive/Docs links into export and preview URLs",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert one link into export/embed/preview URLs.
    Convert {
        /// Drive/Docs/Slides/Sheets link, or any direct file URL.
        link: String,
        /// Target media type: ppt, pdf, image, video or audio (default from config).
        #[arg(short, long, value_name = "TYPE")]
        media: Option<MediaType>,
        #[command(flatten)]
        flags: ConvertFlags,
    },

    /// Show whether a link is Google-hosted and which file id it carries.
    Classify {
        link: String,
    },

    /// Convert every link in a file (one per line).
    Batch {
        /// Path to the links file.
        path: PathBuf,
        /// Target media type for every line (default from config).
        #[arg(short, long, value_name = "TYPE")]
        media: Option<MediaType>,
        #[command(flatten)]
        flags: ConvertFlags,
    },

    /// Print shell completions.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff) to stdout.
    Man,

    /// Print the config file location.
    ConfigPath,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Convert { link, media, flags } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let opts = ConvertOptions::new(&cfg, media, flags.viewer(), flags.format());
                run_convert(&link, &opts)?;
            }
            CliCommand::Classify { link } => run_classify(&link),
            CliCommand::Batch { path, media, flags } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                let opts = ConvertOptions::new(&cfg, media, flags.viewer(), flags.format());
                run_batch(&path, &opts, &cfg.batch_or_default())?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
            CliCommand::ConfigPath => run_config_path()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
