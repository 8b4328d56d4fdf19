//! # Framescope Core
//!
//! Extracts interactive frame cards from the `fc:frame*` meta declarations of
//! an HTML document.
//!
//! ## Pipeline
//!
//! - [`document`] - parse HTML and query `<meta>` tags by key
//! - [`fields`] - pull the raw frame fields and button declarations
//! - [`buttons`] - parse button keys and join labels with actions
//! - [`validate`] - enforce the frame schema and assemble a [`Frame`]
//!
//! [`get_frame`] runs the whole pipeline and yields `None` for anything that
//! is not a valid frame. [`try_get_frame`] does the same but says why.

pub mod buttons;
pub mod document;
pub mod error;
pub mod extract;
pub mod fields;
pub mod render;
pub mod types;
pub mod validate;

pub use document::{KeyPattern, MetaDocument, MetaTag};
pub use error::FrameError;
pub use extract::{frame_from_document, get_frame, try_get_frame};
pub use render::frame_html;
pub use types::{ButtonAction, Frame, FrameButton};
pub use validate::{is_valid_version, MAX_BUTTONS, MAX_INPUT_TEXT_BYTES};
