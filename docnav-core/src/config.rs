use std::{fmt, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Root the renderer resolves relative links against when `srcDir` is unset.
pub const DEFAULT_SOURCE_ROOT: &str = ".";

/// Complete site configuration handed to the renderer.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(flatten)]
    pub meta: SiteMeta,
    #[serde(default)]
    pub nav: Vec<NavItem>,
    #[serde(default)]
    pub sidebar: Vec<SidebarNode>,
    #[serde(default, rename = "socialLinks")]
    pub social_links: Vec<SocialLink>,
}

impl SiteConfig {
    /// Read a TOML config file and validate it.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_toml_str(&data)
    }

    pub fn from_toml_str(data: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(data)?;
        crate::loader::load(config)
    }

    pub fn new(meta: SiteMeta) -> Self {
        Self {
            meta,
            nav: Vec::new(),
            sidebar: Vec::new(),
            social_links: Vec::new(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteMeta {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "srcDir", skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
}

impl SiteMeta {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            source_root: None,
        }
    }

    pub fn source_root(&self) -> &str {
        self.source_root.as_deref().unwrap_or(DEFAULT_SOURCE_ROOT)
    }
}

/// Top navigation bar entry.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new<T: Into<String>, L: Into<String>>(text: T, link: L) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// One entry of the sidebar tree.
///
/// A node without children is a leaf and must link to a page. A node with
/// children is a group and may also link to a page of its own.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SidebarNode {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    #[serde(default, rename = "items", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SidebarNode>,
}

impl SidebarNode {
    pub fn leaf<T: Into<String>, L: Into<String>>(text: T, link: L) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
            collapsed: None,
            children: Vec::new(),
        }
    }

    pub fn group<T: Into<String>>(text: T, children: Vec<SidebarNode>) -> Self {
        Self {
            text: text.into(),
            link: None,
            collapsed: None,
            children,
        }
    }

    pub fn with_link<L: Into<String>>(mut self, link: L) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SocialLink {
    #[serde(rename = "icon")]
    pub platform: SocialIcon,
    #[serde(rename = "link")]
    pub url: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SocialIcon {
    Github,
    Gitlab,
    Twitter,
    X,
    Discord,
    Mastodon,
    Linkedin,
    Youtube,
    Npm,
    Slack,
    Facebook,
    Instagram,
}

impl SocialIcon {
    pub fn as_str(&self) -> &'static str {
        match self {
            SocialIcon::Github => "github",
            SocialIcon::Gitlab => "gitlab",
            SocialIcon::Twitter => "twitter",
            SocialIcon::X => "x",
            SocialIcon::Discord => "discord",
            SocialIcon::Mastodon => "mastodon",
            SocialIcon::Linkedin => "linkedin",
            SocialIcon::Youtube => "youtube",
            SocialIcon::Npm => "npm",
            SocialIcon::Slack => "slack",
            SocialIcon::Facebook => "facebook",
            SocialIcon::Instagram => "instagram",
        }
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
