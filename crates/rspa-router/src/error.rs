// File: src/error.rs
// Purpose: Router failures

use rspa_dom::DomError;
use rspa_render::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    /// The document has no element with the configured root id. Nothing was
    /// rendered.
    #[error("Mount root #{id} not found in the document")]
    MountRootMissing { id: String },

    /// The layout shell has no content region to swap screens into.
    #[error("Content region `{selector}` not found in the layout")]
    ContentRegionMissing { selector: String },

    /// The router was shut down, or every handle to it was dropped.
    #[error("Router has been shut down")]
    ShutDown,

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Dom(#[from] DomError),
}
