//! Theme extension point.
//!
//! A theme adds named content components to an [`App`]. Each `App` owns its
//! registry, so separate builds never see each other's components.

mod code_demo;

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::error::RenderError;

pub use code_demo::{CODE_DEMO, CodeDemo};

/// Reusable block that content files reference by name.
pub trait Component: Send + Sync {
    fn name(&self) -> &'static str;

    fn render(&self, props: &Value) -> Result<String, RenderError>;
}

#[derive(Default, Clone)]
pub struct ComponentRegistry {
    components: HashMap<String, Arc<dyn Component>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `component` under `name`, returning whatever it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        component: Arc<dyn Component>,
    ) -> Option<Arc<dyn Component>> {
        self.components.insert(name.into(), component)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Component>> {
        self.components.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.components.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}

/// A running renderer instance as seen by themes.
#[derive(Debug, Default)]
pub struct App {
    components: ComponentRegistry,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under `name`.
    ///
    /// Re-registering a name replaces the earlier component and logs a
    /// warning; dev-server reloads run theme setup more than once.
    pub fn component<C: Component + 'static>(&mut self, name: &str, component: C) {
        if self
            .components
            .register(name, Arc::new(component))
            .is_some()
        {
            tracing::warn!(component = name, "component re-registered, replacing previous");
        } else {
            tracing::debug!(component = name, "component registered");
        }
    }

    pub fn components(&self) -> &ComponentRegistry {
        &self.components
    }

    pub fn render_component(&self, name: &str, props: &Value) -> Result<String, RenderError> {
        self.components
            .get(name)
            .ok_or_else(|| RenderError::UnknownComponent(name.to_string()))?
            .render(props)
    }
}

pub trait Theme {
    /// Theme whose setup runs before this one.
    fn extends(&self) -> Option<&dyn Theme> {
        None
    }

    fn enhance_app(&self, app: &mut App);
}

/// Run `theme`'s setup on `app`, parents first.
pub fn install_theme(theme: &dyn Theme, app: &mut App) {
    if let Some(parent) = theme.extends() {
        install_theme(parent, app);
    }
    theme.enhance_app(app);
}

/// Base theme. Registers nothing of its own.
#[derive(Debug, Default)]
pub struct DefaultTheme;

impl Theme for DefaultTheme {
    fn enhance_app(&self, _app: &mut App) {}
}

/// The documentation site theme: the default theme plus [`CodeDemo`].
#[derive(Debug, Default)]
pub struct DocsTheme {
    base: DefaultTheme,
}

impl Theme for DocsTheme {
    fn extends(&self) -> Option<&dyn Theme> {
        Some(&self.base)
    }

    fn enhance_app(&self, app: &mut App) {
        app.component(CODE_DEMO, CodeDemo);
    }
}
