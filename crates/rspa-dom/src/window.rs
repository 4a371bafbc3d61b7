// File: src/window.rs
// Purpose: A browsing context: document, session history and location

use url::Url;

use crate::document::Document;
use crate::error::DomError;
use crate::history::History;

pub const DEFAULT_ORIGIN: &str = "http://localhost";

/// Document plus session history, the state a page session lives in.
#[derive(Debug, Clone)]
pub struct Window {
    document: Document,
    history: History,
    origin: Url,
}

impl Window {
    /// Opens `document` at `path` under `origin` (e.g. `http://localhost`).
    pub fn new(document: Document, origin: &str, path: &str) -> Result<Self, DomError> {
        let origin = Url::parse(origin)?;
        let initial = origin.join(path)?;
        Ok(Self {
            document,
            history: History::new(&path_and_rest(&initial)),
            origin,
        })
    }

    /// Blank document at `/` on [`DEFAULT_ORIGIN`].
    pub fn blank() -> Result<Self, DomError> {
        Self::new(Document::new(), DEFAULT_ORIGIN, "/")
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn origin(&self) -> &Url {
        &self.origin
    }

    /// `location.pathname`.
    pub fn location_path(&self) -> String {
        self.history.pathname()
    }

    /// `location.href`.
    pub fn location_href(&self) -> Result<String, DomError> {
        Ok(self.origin.join(&self.history.current())?.to_string())
    }

    /// Resolves an anchor `href` against the current location and returns
    /// the resulting path. Query and fragment are dropped.
    ///
    /// An empty `href` resolves to the current path.
    pub fn resolve_path(&self, href: &str) -> Result<String, DomError> {
        let base = self.origin.join(&self.history.current())?;
        let resolved = base.join(href.trim())?;
        Ok(resolved.path().to_string())
    }
}

fn path_and_rest(url: &Url) -> String {
    let mut out = url.path().to_string();
    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = url.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
