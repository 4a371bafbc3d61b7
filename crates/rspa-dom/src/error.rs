use thiserror::Error;

/// Errors raised by the document model and the [`RQuery`](crate::RQuery) facade.
///
/// Every variant is a precondition or lookup failure: the operation did not
/// happen and the caller has to deal with it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// A selector lookup matched nothing.
    #[error("Element {selector} not found!")]
    NotFound { selector: String },

    /// The selector could not be parsed.
    #[error("Invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// Structural insertion relative to an element without a parent.
    #[error("Element does not have a parent element")]
    NoParent,

    /// The wrapped element is not the kind of input the helper requires.
    #[error("Element must be {expected}")]
    WrongElement { expected: String },

    /// An argument was empty or contained characters the DOM rejects.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The insertion would create a cycle or put a document inside a tree.
    #[error("Hierarchy request error: {0}")]
    Hierarchy(String),

    /// An href or base URL could not be resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
