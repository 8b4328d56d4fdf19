//! Frame value types.

use serde::{Deserialize, Serialize};

/// Meta key carrying the frame version.
pub const KEY_VERSION: &str = "fc:frame";
/// Meta key carrying the frame image.
pub const KEY_IMAGE: &str = "fc:frame:image";
/// Meta key carrying the explicit post target.
pub const KEY_POST_URL: &str = "fc:frame:post_url";
/// Meta key carrying the text input placeholder.
pub const KEY_INPUT_TEXT: &str = "fc:frame:input:text";
/// Prefix shared by every button declaration.
pub const KEY_BUTTON_PREFIX: &str = "fc:frame:button";
/// Suffix marking a button action declaration.
pub const KEY_ACTION_SUFFIX: &str = ":action";

/// What a frame button does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonAction {
    Post,
    PostRedirect,
}

impl ButtonAction {
    /// Classify declared action content. Only the exact `post_redirect` token
    /// selects a redirect; everything else posts.
    pub fn from_content(content: &str) -> Self {
        if content == "post_redirect" {
            Self::PostRedirect
        } else {
            Self::Post
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::PostRedirect => "post_redirect",
        }
    }
}

impl Default for ButtonAction {
    fn default() -> Self {
        Self::Post
    }
}

impl std::fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single frame button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameButton {
    pub label: String,
    pub action: ButtonAction,
}

impl FrameButton {
    pub fn new(label: impl Into<String>, action: ButtonAction) -> Self {
        Self {
            label: label.into(),
            action,
        }
    }
}

/// A validated frame.
///
/// Only produced by [`crate::validate::validate`], so every value observed
/// outside the pipeline satisfies the schema: a `vNext` or dated version, a
/// non-empty image, at most four buttons and an input text of at most 32
/// bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub version: String,
    pub image: String,
    pub buttons: Vec<FrameButton>,
    pub post_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_text: Option<String>,
}

impl Frame {
    /// Flatten the frame back into ordered `(key, content)` meta declarations.
    ///
    /// Buttons are numbered from 1 in list order. Action declarations are only
    /// emitted for non-default actions.
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut entries = vec![
            (KEY_VERSION.to_string(), self.version.clone()),
            (KEY_IMAGE.to_string(), self.image.clone()),
            (KEY_POST_URL.to_string(), self.post_url.clone()),
        ];

        if let Some(ref text) = self.input_text {
            entries.push((KEY_INPUT_TEXT.to_string(), text.clone()));
        }

        for (i, button) in self.buttons.iter().enumerate() {
            let key = format!("{}:{}", KEY_BUTTON_PREFIX, i + 1);
            let action_key = format!("{}{}", key, KEY_ACTION_SUFFIX);
            entries.push((key, button.label.clone()));
            if button.action != ButtonAction::Post {
                entries.push((action_key, button.action.as_str().to_string()));
            }
        }

        entries
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
