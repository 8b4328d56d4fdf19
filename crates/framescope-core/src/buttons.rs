//! Button declaration parsing and label/action reconciliation.
//!
//! Labels and actions are declared independently, e.g.
//!
//! ```text
//! <meta property="fc:frame:button:2" content="Visit">
//! <meta property="fc:frame:button:2:action" content="post_redirect">
//! ```
//!
//! The index lives in the fourth `:`-separated segment of the key. Keys are
//! parsed into [`ButtonDeclaration`]s first; reconciliation only ever sees
//! typed records.

use tracing::debug;

use crate::fields::RawDeclaration;
use crate::types::{ButtonAction, FrameButton};

/// Position of the index segment in `fc:frame:button:<index>[:action]`.
/// The whole segment must be ASCII digits fitting a `u32`; `1a`, ` 1` and
/// `+1` are dropped rather than read as a numeric prefix.
const INDEX_SEGMENT: usize = 3;

/// Which half of a button a declaration describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Label,
    Action,
}

/// A button declaration with its index parsed out of the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDeclaration {
    pub index: u32,
    pub kind: DeclarationKind,
    pub content: String,
}

/// Parse one raw declaration.
///
/// Returns `None` when the key has no index segment or the segment is not a
/// base-10 unsigned integer. Missing content becomes the empty string.
pub fn parse_declaration(raw: &RawDeclaration, kind: DeclarationKind) -> Option<ButtonDeclaration> {
    let index = raw
        .key
        .split(':')
        .nth(INDEX_SEGMENT)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<u32>().ok());

    let Some(index) = index else {
        debug!(key = %raw.key, ?kind, "Dropping button declaration without a numeric index");
        return None;
    };

    Some(ButtonDeclaration {
        index,
        kind,
        content: raw.content.clone().unwrap_or_default(),
    })
}

/// Parse every declaration of one kind, silently dropping malformed ones.
pub fn parse_declarations(raw: &[RawDeclaration], kind: DeclarationKind) -> Vec<ButtonDeclaration> {
    raw.iter()
        .filter_map(|decl| parse_declaration(decl, kind))
        .collect()
}

/// Join labels with their actions by index.
///
/// Each label yields exactly one button. The first action sharing its index
/// decides the action; without one the button posts. Actions with no label
/// are ignored. Buttons come out in ascending index order, and labels sharing
/// an index keep their document order.
pub fn reconcile(labels: &[ButtonDeclaration], actions: &[ButtonDeclaration]) -> Vec<FrameButton> {
    let mut indexed: Vec<(u32, FrameButton)> = labels
        .iter()
        .map(|label| {
            let action = actions
                .iter()
                .find(|action| action.index == label.index)
                .map(|action| ButtonAction::from_content(&action.content))
                .unwrap_or_default();
            (label.index, FrameButton::new(label.content.clone(), action))
        })
        .collect();

    indexed.sort_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, button)| button).collect()
}

#[cfg(test)]
#[path = "buttons_tests.rs"]
mod tests;
