//! Schema validation and frame assembly.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FrameError;
use crate::types::{Frame, FrameButton};

/// Maximum number of buttons a frame may carry.
pub const MAX_BUTTONS: usize = 4;

/// Maximum input text length in UTF-8 bytes.
pub const MAX_INPUT_TEXT_BYTES: usize = 32;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:vNext|[0-9]+-[0-9]+-[0-9]+)$").expect("version pattern is valid")
});

/// Extracted fields with buttons already reconciled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameFields {
    pub version: Option<String>,
    pub image: Option<String>,
    pub post_url: Option<String>,
    pub input_text: Option<String>,
    pub buttons: Vec<FrameButton>,
}

/// `vNext`, or a `<digits>-<digits>-<digits>` date stamp.
pub fn is_valid_version(version: &str) -> bool {
    VERSION_PATTERN.is_match(version)
}

/// Validate extracted fields and assemble a frame.
///
/// `base_url` becomes the post URL when the document declares none (or
/// declares an empty one).
pub fn validate(fields: FrameFields, base_url: &str) -> Result<Frame, FrameError> {
    let version = match fields.version {
        Some(v) if !v.is_empty() => v,
        _ => return Err(FrameError::MissingVersion),
    };
    if !is_valid_version(&version) {
        return Err(FrameError::InvalidVersion(version));
    }

    let image = match fields.image {
        Some(i) if !i.is_empty() => i,
        _ => return Err(FrameError::MissingImage),
    };

    if fields.buttons.len() > MAX_BUTTONS {
        return Err(FrameError::TooManyButtons {
            count: fields.buttons.len(),
            max: MAX_BUTTONS,
        });
    }

    if let Some(ref text) = fields.input_text {
        if text.len() > MAX_INPUT_TEXT_BYTES {
            return Err(FrameError::InputTextTooLong {
                bytes: text.len(),
                max: MAX_INPUT_TEXT_BYTES,
            });
        }
    }

    let post_url = fields
        .post_url
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| base_url.to_string());

    Ok(Frame {
        version,
        image,
        buttons: fields.buttons,
        post_url,
        input_text: fields.input_text,
    })
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
