//! `gdlink convert <link>` – convert a single link.

use anyhow::Result;
use clap::Args;
use gdlink_core::config::{GdlinkConfig, OutputFormat};
use gdlink_core::{convert, MediaType, ViewerChoice};

use crate::cli::output;

/// Viewer and output flags shared by `convert` and `batch`. Each pair
/// overrides the other, so the last one given wins over config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args)]
pub struct ConvertFlags {
    /// Preview presentations in the Office viewer instead of the Slides embed.
    #[arg(long, overrides_with = "slides_embed")]
    pub office_viewer: bool,
    /// Preview presentations in the Slides embed, even if config forces the Office viewer.
    #[arg(long, overrides_with = "office_viewer")]
    pub slides_embed: bool,
    /// Print JSON.
    #[arg(long, overrides_with = "text")]
    pub json: bool,
    /// Print plain text, even if config selects JSON.
    #[arg(long, overrides_with = "json")]
    pub text: bool,
}

impl ConvertFlags {
    /// `None` when neither viewer flag was given.
    pub fn viewer(&self) -> Option<ViewerChoice> {
        match (self.office_viewer, self.slides_embed) {
            (true, _) => Some(ViewerChoice::Office),
            (false, true) => Some(ViewerChoice::Default),
            (false, false) => None,
        }
    }

    /// `None` when neither output flag was given.
    pub fn format(&self) -> Option<OutputFormat> {
        match (self.json, self.text) {
            (true, _) => Some(OutputFormat::Json),
            (false, true) => Some(OutputFormat::Text),
            (false, false) => None,
        }
    }
}

/// Per-invocation settings: command-line flags layered over config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub media: MediaType,
    pub viewer: ViewerChoice,
    pub format: OutputFormat,
}

impl ConvertOptions {
    /// An explicit value wins in either direction; `None` keeps the config value.
    pub fn new(
        cfg: &GdlinkConfig,
        media: Option<MediaType>,
        viewer: Option<ViewerChoice>,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            media: media.unwrap_or(cfg.default_media),
            viewer: viewer.unwrap_or_else(|| cfg.viewer()),
            format: format.unwrap_or(cfg.output),
        }
    }
}

pub fn run_convert(link: &str, opts: &ConvertOptions) -> Result<()> {
    let result = convert(link, opts.media, opts.viewer);
    match opts.format {
        OutputFormat::Text => {
            if result.is_ok() {
                print!("{}", output::render_text(&result, opts.media));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }
    match result.error() {
        Some(err) => Err(err.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_all_on() -> GdlinkConfig {
        GdlinkConfig {
            default_media: MediaType::Video,
            force_office_viewer: true,
            output: OutputFormat::Json,
            batch: None,
        }
    }

    #[test]
    fn flags_override_config() {
        let cfg = GdlinkConfig::default();
        let opts = ConvertOptions::new(
            &cfg,
            Some(MediaType::Ppt),
            Some(ViewerChoice::Office),
            Some(OutputFormat::Json),
        );
        assert_eq!(opts.media, MediaType::Ppt);
        assert_eq!(opts.viewer, ViewerChoice::Office);
        assert_eq!(opts.format, OutputFormat::Json);
    }

    #[test]
    fn config_fills_missing_flags() {
        let opts = ConvertOptions::new(&config_all_on(), None, None, None);
        assert_eq!(opts.media, MediaType::Video);
        assert_eq!(opts.viewer, ViewerChoice::Office);
        assert_eq!(opts.format, OutputFormat::Json);
    }

    #[test]
    fn flags_switch_config_defaults_off() {
        let flags = ConvertFlags {
            slides_embed: true,
            text: true,
            ..ConvertFlags::default()
        };
        let opts = ConvertOptions::new(&config_all_on(), None, flags.viewer(), flags.format());
        assert_eq!(opts.viewer, ViewerChoice::Default);
        assert_eq!(opts.format, OutputFormat::Text);
    }

    #[test]
    fn no_flags_means_no_override() {
        let flags = ConvertFlags::default();
        assert_eq!(flags.viewer(), None);
        assert_eq!(flags.format(), None);
    }

    #[test]
    fn run_convert_fails_on_error_result() {
        let opts = ConvertOptions::new(&GdlinkConfig::default(), None, None, None);
        let err = run_convert("   ", &opts).unwrap_err();
        assert_eq!(err.to_string(), "Paste a link first.");
        assert!(run_convert("https://example.com/a.pdf", &opts).is_ok());
    }
}
