//! Raw field extraction.

use crate::buttons::DeclarationKind;
use crate::document::{KeyPattern, MetaDocument};
use crate::types::{
    KEY_ACTION_SUFFIX, KEY_BUTTON_PREFIX, KEY_IMAGE, KEY_INPUT_TEXT, KEY_POST_URL, KEY_VERSION,
};

/// Action declarations must carry an index segment after the namespace.
const ACTION_PREFIX: &str = "fc:frame:button:";

/// A button declaration as found in the document, before its key is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDeclaration {
    pub key: String,
    pub content: Option<String>,
}

/// Unvalidated frame fields pulled out of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub version: Option<String>,
    pub image: Option<String>,
    pub post_url: Option<String>,
    pub input_text: Option<String>,
    pub labels: Vec<RawDeclaration>,
    pub actions: Vec<RawDeclaration>,
}

/// Content of the first tag, in document order, whose key equals `key`.
///
/// Later declarations of the same key are never consulted, even when the
/// first one has no `content`.
pub fn extract_scalar(doc: &MetaDocument, key: &str) -> Option<String> {
    doc.select(KeyPattern::Exact(key))
        .next()
        .and_then(|tag| tag.content())
        .map(str::to_string)
}

/// Button declarations of one kind, in document order.
pub fn extract_button_declarations(doc: &MetaDocument, kind: DeclarationKind) -> Vec<RawDeclaration> {
    let pattern = match kind {
        DeclarationKind::Label => KeyPattern::PrefixWithoutSuffix {
            prefix: KEY_BUTTON_PREFIX,
            suffix: KEY_ACTION_SUFFIX,
        },
        DeclarationKind::Action => KeyPattern::PrefixAndSuffix {
            prefix: ACTION_PREFIX,
            suffix: KEY_ACTION_SUFFIX,
        },
    };

    doc.select(pattern)
        .filter_map(|tag| {
            Some(RawDeclaration {
                key: tag.declared_key()?.to_string(),
                content: tag.content().map(str::to_string),
            })
        })
        .collect()
}

pub fn extract_fields(doc: &MetaDocument) -> RawFields {
    RawFields {
        version: extract_scalar(doc, KEY_VERSION),
        image: extract_scalar(doc, KEY_IMAGE),
        post_url: extract_scalar(doc, KEY_POST_URL),
        input_text: extract_scalar(doc, KEY_INPUT_TEXT),
        labels: extract_button_declarations(doc, DeclarationKind::Label),
        actions: extract_button_declarations(doc, DeclarationKind::Action),
    }
}
