pub mod config;
pub mod error;
pub mod loader;
pub mod sidebar;
pub mod theme;

// Re-export main types
pub use config::{NavItem, SidebarNode, SiteConfig, SiteMeta, SocialIcon, SocialLink};
pub use error::{ConfigError, RenderError};
pub use loader::{load, validate};
pub use theme::{App, CODE_DEMO, CodeDemo, Component, ComponentRegistry, DocsTheme, Theme, install_theme};
