// File: src/config.rs
// Purpose: Router settings, usually the [router] table of rspa.toml

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Id of the element the layout shell is mounted into (default: "app")
    #[serde(default = "default_root_id")]
    pub root_id: String,

    /// Selector of the content region inside the shell (default: "main")
    #[serde(default = "default_content_selector")]
    pub content_selector: String,

    /// Appended to screen titles, e.g. " | Shop"
    #[serde(default)]
    pub title_suffix: String,
}

fn default_root_id() -> String {
    "app".to_string()
}

fn default_content_selector() -> String {
    "main".to_string()
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            root_id: default_root_id(),
            content_selector: default_content_selector(),
            title_suffix: String::new(),
        }
    }
}

impl RouterConfig {
    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = root_id.into();
        self
    }

    pub fn with_content_selector(mut self, selector: impl Into<String>) -> Self {
        self.content_selector = selector.into();
        self
    }

    pub fn with_title_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.title_suffix = suffix.into();
        self
    }
}
