// File: src/component.rs
// Purpose: The component contract and the tagged registry entries used for placeholders

use std::fmt;
use std::rc::Rc;

use rspa_dom::Element;

use crate::error::RenderError;

/// Anything that can produce a fully built element tree.
///
/// Screens additionally report a title; plain widgets keep the default.
pub trait Component {
    fn render(&self) -> Result<Element, RenderError>;

    fn title(&self) -> Option<String> {
        None
    }
}

impl<C: Component + ?Sized> Component for Rc<C> {
    fn render(&self) -> Result<Element, RenderError> {
        (**self).render()
    }

    fn title(&self) -> Option<String> {
        (**self).title()
    }
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn render(&self) -> Result<Element, RenderError> {
        (**self).render()
    }

    fn title(&self) -> Option<String> {
        (**self).title()
    }
}

/// A component with a stable registry key.
///
/// Templates refer to it as `<component{KEY}>`; the comparison ignores case
/// and hyphens, so `UserItem` is reachable as `<componentUserItem>` or
/// `<component-user-item>`.
pub trait Registered: Component {
    const KEY: &'static str;
}

pub type ComponentFactory = Rc<dyn Fn() -> Box<dyn Component>>;

/// One entry of the component list handed to
/// [`RenderService::build`](crate::RenderService::build).
#[derive(Clone)]
pub enum ComponentEntry {
    /// Rendered as is, every time its placeholder appears.
    Prebuilt {
        key: String,
        component: Rc<dyn Component>,
    },
    /// A fresh instance is created for each placeholder.
    Factory { key: String, factory: ComponentFactory },
}

impl ComponentEntry {
    /// Entry for an already configured component.
    pub fn instance<C: Registered + 'static>(component: C) -> Self {
        ComponentEntry::Prebuilt {
            key: C::KEY.to_string(),
            component: Rc::new(component),
        }
    }

    /// Entry that builds `C::default()` on demand.
    pub fn factory<C: Registered + Default + 'static>() -> Self {
        ComponentEntry::Factory {
            key: C::KEY.to_string(),
            factory: Rc::new(|| Box::new(C::default()) as Box<dyn Component>),
        }
    }

    /// Entry under an explicit key, for components that need captured
    /// configuration or are not [`Registered`].
    pub fn with_factory<F, C>(key: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> C + 'static,
        C: Component + 'static,
    {
        ComponentEntry::Factory {
            key: key.into(),
            factory: Rc::new(move || Box::new(factory()) as Box<dyn Component>),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            ComponentEntry::Prebuilt { key, .. } | ComponentEntry::Factory { key, .. } => key,
        }
    }

    /// True if this entry answers to the placeholder identifier `ident`.
    pub fn answers_to(&self, ident: &str) -> bool {
        normalize_key(self.key()) == normalize_key(ident)
    }

    pub(crate) fn render(&self) -> Result<Element, RenderError> {
        match self {
            ComponentEntry::Prebuilt { component, .. } => component.render(),
            ComponentEntry::Factory { factory, .. } => factory().render(),
        }
    }
}

impl fmt::Debug for ComponentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let variant = match self {
            ComponentEntry::Prebuilt { .. } => "Prebuilt",
            ComponentEntry::Factory { .. } => "Factory",
        };
        f.debug_struct(variant).field("key", &self.key()).finish()
    }
}

/// Lower-cased with hyphens removed.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}
