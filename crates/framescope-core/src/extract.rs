//! Pipeline entry points.

use tracing::debug;

use crate::buttons::{self, DeclarationKind};
use crate::document::MetaDocument;
use crate::error::FrameError;
use crate::fields;
use crate::types::Frame;
use crate::validate::{self, FrameFields};

/// Extract a frame from raw HTML, or `None` when the document does not
/// encode a valid one.
///
/// `url` is the page's own URL and serves as the post target when the
/// document does not declare `fc:frame:post_url`.
pub fn get_frame(html: &str, url: &str) -> Option<Frame> {
    try_get_frame(html, url).ok()
}

/// Like [`get_frame`], but reports why a document was rejected.
pub fn try_get_frame(html: &str, url: &str) -> Result<Frame, FrameError> {
    let doc = MetaDocument::parse(html);
    frame_from_document(&doc, url)
}

/// Run extraction, reconciliation and validation over a parsed document.
pub fn frame_from_document(doc: &MetaDocument, url: &str) -> Result<Frame, FrameError> {
    let raw = fields::extract_fields(doc);

    let labels = buttons::parse_declarations(&raw.labels, DeclarationKind::Label);
    let actions = buttons::parse_declarations(&raw.actions, DeclarationKind::Action);
    let reconciled = buttons::reconcile(&labels, &actions);

    let fields = FrameFields {
        version: raw.version,
        image: raw.image,
        post_url: raw.post_url,
        input_text: raw.input_text,
        buttons: reconciled,
    };

    validate::validate(fields, url).inspect_err(|e| debug!(reason = %e, "Document rejected"))
}
