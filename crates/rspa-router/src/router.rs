// File: src/router.rs
// Purpose: Navigation state, mounting and the window listeners that drive them

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rspa_dom::{Element, Event, EventType, ListenerId, Window};
use rspa_render::{Component, ComponentFactory};
use tracing::{debug, error, info, warn};

use crate::config::RouterConfig;
use crate::error::RouterError;
use crate::layout::{DefaultLayout, LayoutContext, LayoutFactory};
use crate::not_found::NotFound;
use crate::route::{CurrentRoute, Route, RouteTable};

struct RouterInner {
    window: Window,
    table: RouteTable,
    config: RouterConfig,
    layout: LayoutFactory,
    not_found: ComponentFactory,
    state: RefCell<RouterState>,
}

struct RouterState {
    current: CurrentRoute,
    /// The mounted layout shell, `None` until the first mount succeeds.
    shell: Option<Element>,
    mounts: usize,
    pop_state_listener: Option<ListenerId>,
    click_listener: Option<ListenerId>,
    shut_down: bool,
}

/// Single-page router bound to one [`Window`].
///
/// Created with [`Router::builder`]. Starting it resolves and mounts the
/// current location, then listens for back/forward and for clicks on any
/// anchor in the document. Handles are cheap to clone; the listeners only
/// hold weak references, and [`Router::shutdown`] removes them.
#[derive(Clone)]
pub struct Router(Rc<RouterInner>);

/// Non-owning router handle for components.
#[derive(Clone, Default)]
pub struct WeakRouter(Weak<RouterInner>);

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    pub fn downgrade(&self) -> WeakRouter {
        WeakRouter(Rc::downgrade(&self.0))
    }

    pub fn window(&self) -> &Window {
        &self.0.window
    }

    pub fn routes(&self) -> &RouteTable {
        &self.0.table
    }

    pub fn config(&self) -> &RouterConfig {
        &self.0.config
    }

    /// Path of the active location.
    pub fn current_path(&self) -> String {
        self.0.window.location_path()
    }

    pub fn current_route(&self) -> CurrentRoute {
        self.0.state.borrow().current.clone()
    }

    /// Number of completed mount passes.
    pub fn mount_count(&self) -> usize {
        self.0.state.borrow().mounts
    }

    /// The layout shell, once mounted.
    pub fn shell(&self) -> Option<Element> {
        self.0.state.borrow().shell.clone()
    }

    pub fn is_shut_down(&self) -> bool {
        self.0.state.borrow().shut_down
    }

    /// Goes to `target` without a page load.
    ///
    /// `target` may be an absolute URL or a root-relative or relative path;
    /// it is resolved against the current location and only its path is
    /// kept. Pushes one history entry and mounts once. Navigating to the
    /// active path does nothing.
    pub fn navigate(&self, target: &str) -> Result<(), RouterError> {
        if self.is_shut_down() {
            return Err(RouterError::ShutDown);
        }
        let path = self.0.window.resolve_path(target)?;
        if path == self.current_path() {
            debug!(path = %path, "already at path, skipping navigation");
            return Ok(());
        }
        self.0.window.history().push_state(&path);
        self.resolve_and_mount()
    }

    /// Removes the window listeners. Later events are ignored and
    /// [`navigate`](Self::navigate) fails. Calling it again does nothing.
    pub fn shutdown(&self) {
        let (pop_state, click) = {
            let mut state = self.0.state.borrow_mut();
            if state.shut_down {
                return;
            }
            state.shut_down = true;
            (state.pop_state_listener.take(), state.click_listener.take())
        };
        self.0.remove_listeners(pop_state, click);
        info!("router shut down");
    }

    fn resolve_and_mount(&self) -> Result<(), RouterError> {
        let current = self.0.table.resolve(&self.current_path());
        debug!(route = ?current, "resolved route");
        self.0.state.borrow_mut().current = current.clone();
        self.mount(&current)
    }

    fn instantiate(&self, route: &CurrentRoute) -> Box<dyn Component> {
        match route {
            CurrentRoute::Matched { index, .. } => match self.0.table.get(*index) {
                Some(route) => route.instantiate(),
                None => (self.0.not_found)(),
            },
            CurrentRoute::NotFound { .. } => (self.0.not_found)(),
        }
    }

    fn mount(&self, route: &CurrentRoute) -> Result<(), RouterError> {
        let document = self.0.window.document();
        let shell = self.shell();
        let screen = self.instantiate(route);

        match shell {
            None => {
                let root = document.get_element_by_id(&self.0.config.root_id).ok_or_else(|| {
                    RouterError::MountRootMissing {
                        id: self.0.config.root_id.clone(),
                    }
                })?;
                let children = screen.render()?;
                let layout = (self.0.layout)(LayoutContext {
                    router: self.downgrade(),
                    children,
                });
                let shell = layout.render()?;
                if shell.query_selector(&self.0.config.content_selector)?.is_none() {
                    warn!(
                        selector = %self.0.config.content_selector,
                        "layout has no content region, later navigations will fail"
                    );
                }
                root.replace_children([shell.clone().into_node()])?;
                self.0.state.borrow_mut().shell = Some(shell);
                debug!(root = %self.0.config.root_id, "mounted layout shell");
            }
            Some(shell) => {
                let selector = &self.0.config.content_selector;
                let region = shell.query_selector(selector)?.ok_or_else(|| {
                    RouterError::ContentRegionMissing {
                        selector: selector.clone(),
                    }
                })?;
                let content = screen.render()?;
                region.replace_children([content.into_node()])?;
            }
        }

        if let Some(title) = screen.title() {
            document.set_title(&format!("{title}{}", self.0.config.title_suffix))?;
        }
        self.0.state.borrow_mut().mounts += 1;
        debug!(path = %route.path(), "mounted screen");
        Ok(())
    }

    fn install_listeners(&self) {
        let weak = Rc::downgrade(&self.0);
        let pop_state = self.0.window.history().add_pop_state_listener(move |event| {
            let Some(router) = weak.upgrade().map(Router) else {
                return;
            };
            debug!(path = %event.path, "history moved");
            if let Err(err) = router.resolve_and_mount() {
                error!("Failed to mount after history change: {err}");
            }
        });

        let weak = Rc::downgrade(&self.0);
        let click = self
            .0
            .window
            .document()
            .as_node()
            .add_event_listener(EventType::Click, move |event| {
                if let Some(router) = weak.upgrade().map(Router) {
                    router.intercept_link(event);
                }
            });

        let mut state = self.0.state.borrow_mut();
        state.pop_state_listener = Some(pop_state);
        state.click_listener = Some(click);
    }

    /// Keeps clicks on anchors inside the app: the page load is cancelled
    /// and the anchor's path is navigated to instead.
    fn intercept_link(&self, event: &Event) {
        let anchor = match event.target_element().map(|target| target.closest("a")) {
            Some(Ok(Some(anchor))) => anchor,
            Some(Err(err)) => {
                error!("Failed to inspect click target: {err}");
                return;
            }
            _ => return,
        };
        event.prevent_default();

        let href = anchor.attr("href").unwrap_or_default();
        if let Err(err) = self.navigate(&href) {
            error!(href = %href, "Navigation failed: {err}");
        }
    }
}

impl RouterInner {
    fn remove_listeners(&self, pop_state: Option<ListenerId>, click: Option<ListenerId>) {
        if let Some(id) = pop_state {
            self.window.history().remove_pop_state_listener(id);
        }
        if let Some(id) = click {
            self.window.document().as_node().remove_event_listener(id);
        }
    }
}

impl Drop for RouterInner {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        let (pop_state, click) = (state.pop_state_listener.take(), state.click_listener.take());
        self.remove_listeners(pop_state, click);
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0.state.borrow();
        f.debug_struct("Router")
            .field("current", &state.current)
            .field("mounts", &state.mounts)
            .field("shut_down", &state.shut_down)
            .finish()
    }
}

impl WeakRouter {
    pub fn upgrade(&self) -> Option<Router> {
        self.0.upgrade().map(Router)
    }

    /// [`Router::navigate`] through the weak handle.
    pub fn navigate(&self, path: &str) -> Result<(), RouterError> {
        self.upgrade().ok_or(RouterError::ShutDown)?.navigate(path)
    }

    pub fn current_path(&self) -> Option<String> {
        self.upgrade().map(|router| router.current_path())
    }
}

impl fmt::Debug for WeakRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("WeakRouter")
            .field(&(self.0.strong_count() > 0))
            .finish()
    }
}

/// Collects routes, config and the shell/not-found screens, then starts a
/// [`Router`] on a window.
#[derive(Default)]
pub struct RouterBuilder {
    routes: Vec<Route>,
    config: RouterConfig,
    layout: Option<LayoutFactory>,
    not_found: Option<ComponentFactory>,
}

impl RouterBuilder {
    pub fn route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
        self.routes.extend(routes);
        self
    }

    pub fn config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Shell built once around the first screen. Defaults to [`DefaultLayout`].
    pub fn layout<F, C>(mut self, factory: F) -> Self
    where
        F: Fn(LayoutContext) -> C + 'static,
        C: Component + 'static,
    {
        self.layout = Some(Rc::new(move |context| {
            Box::new(factory(context)) as Box<dyn Component>
        }));
        self
    }

    /// Screen for unmatched paths. Defaults to [`NotFound`].
    pub fn not_found<C: Component + Default + 'static>(mut self) -> Self {
        self.not_found = Some(Rc::new(|| Box::new(C::default()) as Box<dyn Component>));
        self
    }

    /// Resolves and mounts the window's current location, then installs
    /// the history and click listeners.
    ///
    /// Fails without installing anything if the first mount fails, e.g.
    /// when the document lacks the root container.
    pub fn start(self, window: Window) -> Result<Router, RouterError> {
        let table = RouteTable::new(self.routes);
        let current = table.resolve(&window.location_path());
        let inner = RouterInner {
            window,
            table,
            config: self.config,
            layout: self.layout.unwrap_or_else(default_layout),
            not_found: self.not_found.unwrap_or_else(default_not_found),
            state: RefCell::new(RouterState {
                current: current.clone(),
                shell: None,
                mounts: 0,
                pop_state_listener: None,
                click_listener: None,
                shut_down: false,
            }),
        };
        let router = Router(Rc::new(inner));

        debug!(route = ?current, "resolved initial route");
        router.mount(&current)?;
        router.install_listeners();
        info!(
            routes = router.routes().len(),
            path = %router.current_path(),
            "router started"
        );
        Ok(router)
    }
}

fn default_layout() -> LayoutFactory {
    Rc::new(|context| Box::new(DefaultLayout::new(context)) as Box<dyn Component>)
}

fn default_not_found() -> ComponentFactory {
    Rc::new(|| Box::new(NotFound) as Box<dyn Component>)
}
