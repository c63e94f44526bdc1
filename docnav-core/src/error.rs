use thiserror::Error;

/// Reasons a site configuration is rejected.
///
/// Structural variants carry the display text and link of the offending
/// entry so the operator can find it in the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("site title must not be empty")]
    EmptyTitle,

    #[error("sidebar entry `{text}` has no children and no link")]
    MissingLink { text: String },

    #[error("duplicate sidebar link `{link}` used by `{first}` and `{second}`")]
    DuplicateLink {
        link: String,
        first: String,
        second: String,
    },

    #[error("{section} entry with link `{link}` has no display text")]
    EmptyText { section: &'static str, link: String },

    #[error("link `{link}` of `{text}` has leading or trailing whitespace")]
    PaddedLink { text: String, link: String },

    #[error("nav entry `{text}` has no link")]
    EmptyNavLink { text: String },

    #[error("social link `{url}` for {platform} is not an absolute http(s) URL")]
    InvalidSocialLink { platform: String, url: String },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("no component registered under `{0}`")]
    UnknownComponent(String),

    #[error("missing required prop `{prop}` for component `{component}`")]
    MissingProp {
        component: &'static str,
        prop: &'static str,
    },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}
