//! `gdlink batch <path>` – convert every link in a file.

use anyhow::{Context, Result};
use gdlink_core::config::{BatchConfig, OutputFormat};
use gdlink_core::convert;
use serde_json::json;
use std::path::Path;

use super::ConvertOptions;
use crate::cli::output;

/// Lines to convert as `(1-based line number, raw line)`, minus comments and,
/// if configured, blank lines.
pub(crate) fn collect_links<'a>(text: &'a str, cfg: &BatchConfig) -> Vec<(usize, &'a str)> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return !cfg.skip_blank_lines;
            }
            cfg.comment_prefix.is_empty() || !trimmed.starts_with(&cfg.comment_prefix)
        })
        .map(|(i, line)| (i + 1, line))
        .collect()
}

pub fn run_batch(path: &Path, opts: &ConvertOptions, batch: &BatchConfig) -> Result<()> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read links file: {}", path.display()))?;
    let links = collect_links(&text, batch);
    tracing::info!("batch {}: {} links, media={}", path.display(), links.len(), opts.media);

    let mut failed = 0usize;
    let mut json_rows = Vec::new();
    for (line_no, raw) in &links {
        let result = convert(raw, opts.media, opts.viewer);
        if !result.is_ok() {
            failed += 1;
        }
        match opts.format {
            OutputFormat::Text => {
                println!("[line {line_no}] {}", raw.trim());
                print!("{}", output::render_text(&result, opts.media));
                println!();
            }
            OutputFormat::Json => json_rows.push(json!({
                "line": line_no,
                "input": raw.trim(),
                "result": result,
            })),
        }
    }

    let converted = links.len() - failed;
    match opts.format {
        OutputFormat::Text => println!("{converted} converted, {failed} failed"),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json_rows)?);
            eprintln!("{converted} converted, {failed} failed");
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} links could not be converted", links.len());
    }
    Ok(())
}
