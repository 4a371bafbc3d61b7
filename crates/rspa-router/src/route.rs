// File: src/route.rs
// Purpose: Route table and exact-path resolution

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use rspa_render::{Component, ComponentFactory};
use tracing::warn;

/// A path and the screen shown for it.
#[derive(Clone)]
pub struct Route {
    path: String,
    factory: ComponentFactory,
}

impl Route {
    /// Route to `C::default()`.
    pub fn new<C: Component + Default + 'static>(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            factory: Rc::new(|| Box::new(C::default()) as Box<dyn Component>),
        }
    }

    /// Route to whatever `factory` builds, for screens that need configuration.
    pub fn with_factory<F, C>(path: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> C + 'static,
        C: Component + 'static,
    {
        Self {
            path: path.into(),
            factory: Rc::new(move || Box::new(factory()) as Box<dyn Component>),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn instantiate(&self) -> Box<dyn Component> {
        (self.factory)()
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route").field("path", &self.path).finish()
    }
}

/// Outcome of resolving a path against a [`RouteTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentRoute {
    /// The route at `index` has exactly this path.
    Matched { index: usize, path: String },
    /// No route has this path; the not-found screen is shown.
    NotFound { path: String },
}

impl CurrentRoute {
    pub fn path(&self) -> &str {
        match self {
            CurrentRoute::Matched { path, .. } | CurrentRoute::NotFound { path } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CurrentRoute::NotFound { .. })
    }
}

/// Ordered, read-only list of routes. Matching is exact and case-sensitive;
/// the first route with the path wins.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        let mut seen = HashSet::new();
        for route in &routes {
            if !route.path.starts_with('/') {
                warn!(path = %route.path, "route path does not start with '/' and can never match");
            }
            if !seen.insert(route.path.as_str()) {
                warn!(path = %route.path, "duplicate route path, the first one wins");
            }
        }
        Self { routes }
    }

    pub fn resolve(&self, path: &str) -> CurrentRoute {
        let path = normalize_path(path);
        match self.routes.iter().position(|route| route.path == path) {
            Some(index) => CurrentRoute::Matched {
                index,
                path: path.to_string(),
            },
            None => CurrentRoute::NotFound {
                path: path.to_string(),
            },
        }
    }

    pub fn get(&self, index: usize) -> Option<&Route> {
        self.routes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// An empty path is the root path.
pub fn normalize_path(path: &str) -> &str {
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rspa_dom::Element;
    use rspa_render::RenderError;
    use rstest::rstest;

    #[derive(Default)]
    struct Blank;

    impl Component for Blank {
        fn render(&self) -> Result<Element, RenderError> {
            Ok(Element::new("div"))
        }
    }

    fn table() -> RouteTable {
        RouteTable::new(vec![
            Route::new::<Blank>("/"),
            Route::new::<Blank>("/about"),
            Route::new::<Blank>("/users"),
            Route::new::<Blank>("/about"),
        ])
    }

    #[rstest]
    #[case("/", 0)]
    #[case("", 0)]
    #[case("/about", 1)]
    #[case("/users", 2)]
    fn test_resolve_matches(#[case] path: &str, #[case] index: usize) {
        match table().resolve(path) {
            CurrentRoute::Matched { index: found, .. } => assert_eq!(found, index),
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[rstest]
    #[case("/About")]
    #[case("/about/")]
    #[case("/users/1")]
    #[case("about")]
    fn test_resolve_misses(#[case] path: &str) {
        let resolved = table().resolve(path);
        assert!(resolved.is_not_found());
        assert_eq!(resolved.path(), path);
    }

    #[test]
    fn test_empty_path_resolves_as_root() {
        assert_eq!(
            table().resolve(""),
            CurrentRoute::Matched {
                index: 0,
                path: "/".to_string()
            }
        );
    }
}
