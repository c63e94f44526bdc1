//! Structural validation of a [`SiteConfig`].
//!
//! The loader never touches the filesystem: whether a link points at an
//! existing page under `srcDir` is for the renderer to decide.

use std::collections::HashMap;

use url::Url;

use crate::config::{NavItem, SidebarNode, SiteConfig, SocialLink};
use crate::error::ConfigError;

/// Validate `config` and hand it back unchanged.
pub fn load(config: SiteConfig) -> Result<SiteConfig, ConfigError> {
    validate(&config)?;
    tracing::debug!(
        title = %config.meta.title,
        nav = config.nav.len(),
        sidebar = config.sidebar.len(),
        "site config loaded"
    );
    Ok(config)
}

/// Check every structural rule, stopping at the first violation.
pub fn validate(config: &SiteConfig) -> Result<(), ConfigError> {
    if config.meta.title.trim().is_empty() {
        return Err(ConfigError::EmptyTitle);
    }

    for item in &config.nav {
        validate_nav_item(item)?;
    }

    let mut seen = HashMap::new();
    for node in &config.sidebar {
        validate_node(node, &mut seen)?;
    }

    for social in &config.social_links {
        validate_social_link(social)?;
    }

    Ok(())
}

fn validate_nav_item(item: &NavItem) -> Result<(), ConfigError> {
    if item.text.trim().is_empty() {
        return Err(ConfigError::EmptyText {
            section: "nav",
            link: item.link.clone(),
        });
    }
    if item.link.trim().is_empty() {
        return Err(ConfigError::EmptyNavLink {
            text: item.text.clone(),
        });
    }
    check_padding(&item.text, &item.link)
}

fn check_padding(text: &str, link: &str) -> Result<(), ConfigError> {
    if link.trim() != link {
        return Err(ConfigError::PaddedLink {
            text: text.to_string(),
            link: link.to_string(),
        });
    }
    Ok(())
}

// `seen` maps each link to the text of the first node that used it.
fn validate_node<'a>(
    node: &'a SidebarNode,
    seen: &mut HashMap<&'a str, &'a str>,
) -> Result<(), ConfigError> {
    let link = node.link.as_deref().filter(|l| !l.trim().is_empty());

    if node.text.trim().is_empty() {
        return Err(ConfigError::EmptyText {
            section: "sidebar",
            link: link.unwrap_or_default().to_string(),
        });
    }

    match link {
        Some(link) => {
            check_padding(&node.text, link)?;
            if let Some(first) = seen.insert(link, node.text.as_str()) {
                return Err(ConfigError::DuplicateLink {
                    link: link.to_string(),
                    first: first.to_string(),
                    second: node.text.clone(),
                });
            }
        }
        None if node.is_leaf() => {
            return Err(ConfigError::MissingLink {
                text: node.text.clone(),
            });
        }
        None => {}
    }

    for child in &node.children {
        validate_node(child, seen)?;
    }

    Ok(())
}

fn validate_social_link(social: &SocialLink) -> Result<(), ConfigError> {
    let valid = Url::parse(&social.url)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidSocialLink {
            platform: social.platform.to_string(),
            url: social.url.clone(),
        })
    }
}
