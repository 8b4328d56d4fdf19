//! Extract and check subcommand handlers.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use url::Url;

use framescope_config::{Config, OutputFormat};
use framescope_core::{frame_html, try_get_frame, Frame};

/// Whether the input turned out to be a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    Frame,
    NotAFrame,
}

/// Extract a frame and print it in the requested format.
pub(crate) fn handle_extract(
    config: &Config,
    input: Option<&Path>,
    url: Option<String>,
    format: Option<OutputFormat>,
    compact: bool,
) -> Result<Outcome> {
    let page_url = resolve_url(config, url)?;
    let html = read_input(input)?;
    let format = format.unwrap_or(config.output.format);
    let pretty = config.output.pretty && !compact;

    let result = try_get_frame(&html, &page_url);
    if let Err(ref e) = result {
        info!("Not a frame: {}", e);
    }
    let frame = result.ok();

    let rendered = render(frame.as_ref(), format, pretty)?;
    let mut stdout = io::stdout().lock();
    if !rendered.is_empty() {
        writeln!(stdout, "{}", rendered).context("Failed to write output")?;
    }

    Ok(if frame.is_some() {
        Outcome::Frame
    } else {
        Outcome::NotAFrame
    })
}

/// Print whether the input is a valid frame, and why not if it isn't.
pub(crate) fn handle_check(config: &Config, input: Option<&Path>, url: Option<String>) -> Result<Outcome> {
    let page_url = resolve_url(config, url)?;
    let html = read_input(input)?;

    let mut stdout = io::stdout().lock();
    match try_get_frame(&html, &page_url) {
        Ok(frame) => {
            debug!(buttons = frame.buttons.len(), "Valid frame");
            writeln!(stdout, "valid").context("Failed to write output")?;
            Ok(Outcome::Frame)
        }
        Err(e) => {
            writeln!(stdout, "invalid: {}", e).context("Failed to write output")?;
            Ok(Outcome::NotAFrame)
        }
    }
}

/// Command line URL first, then the configured base URL.
fn resolve_url(config: &Config, url: Option<String>) -> Result<String> {
    let page_url = url
        .or_else(|| config.extract.base_url.clone())
        .context("No page URL: pass --url or set extract.base_url in the config")?;
    Url::parse(&page_url).with_context(|| format!("Invalid page URL: {}", page_url))?;
    Ok(page_url)
}

/// Read HTML from a file, or stdin for `-` / no path. Invalid UTF-8 is
/// replaced rather than rejected.
fn read_input(input: Option<&Path>) -> Result<String> {
    let bytes = match input {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    debug!(bytes = bytes.len(), "Read input");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn render(frame: Option<&Frame>, format: OutputFormat, pretty: bool) -> Result<String> {
    match (format, frame) {
        (OutputFormat::Json, frame) => {
            let json = if pretty {
                serde_json::to_string_pretty(&frame)
            } else {
                serde_json::to_string(&frame)
            };
            json.context("Failed to serialize frame")
        }
        (OutputFormat::Html, Some(frame)) => Ok(frame_html(frame)),
        (OutputFormat::Flat, Some(frame)) => Ok(frame
            .flatten()
            .into_iter()
            .map(|(key, content)| format!("{}\t{}", key, content))
            .collect::<Vec<_>>()
            .join("\n")),
        (_, None) => Ok(String::new()),
    }
}
