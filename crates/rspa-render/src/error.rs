// File: src/error.rs
// Purpose: Errors raised while building component trees

use rspa_dom::DomError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The template contained no element to use as a root.
    #[error("Template has no root element")]
    EmptyTemplate,

    /// The placeholder prefix cannot appear in a tag name.
    #[error("Invalid placeholder prefix `{0}`")]
    InvalidPrefix(String),

    /// A CSS-modules manifest could not be read.
    #[error("Invalid style manifest: {0}")]
    StyleManifest(#[from] serde_json::Error),

    #[error(transparent)]
    Dom(#[from] DomError),
}
