//! Read-only queries over a loaded sidebar tree.
//!
//! All traversals are depth-first in display order. Link lookups assume the
//! tree passed validation, so each link names at most one node.

use crate::config::{SidebarNode, SiteConfig};

impl SiteConfig {
    /// Leaf nodes in display order.
    pub fn leaves(&self) -> Vec<&SidebarNode> {
        let mut out = Vec::new();
        walk(&self.sidebar, &mut |node| {
            if node.is_leaf() {
                out.push(node);
            }
        });
        out
    }

    /// Every link in the sidebar, group links included.
    pub fn links(&self) -> Vec<&str> {
        let mut out = Vec::new();
        walk(&self.sidebar, &mut |node| {
            if let Some(link) = node.link.as_deref() {
                out.push(link);
            }
        });
        out
    }

    pub fn find(&self, link: &str) -> Option<&SidebarNode> {
        let mut found = None;
        walk(&self.sidebar, &mut |node| {
            if found.is_none() && node.link.as_deref() == Some(link) {
                found = Some(node);
            }
        });
        found
    }

    /// Display texts from the top-level entry down to the page at `link`.
    ///
    /// This is the chain a renderer highlights as active.
    pub fn active_trail(&self, link: &str) -> Option<Vec<&str>> {
        let mut trail = Vec::new();
        trail_to(&self.sidebar, link, &mut trail).then_some(trail)
    }

    /// Deepest nesting level; a flat list of leaves has depth 1.
    pub fn depth(&self) -> usize {
        fn depth_of(nodes: &[SidebarNode]) -> usize {
            nodes
                .iter()
                .map(|n| 1 + depth_of(&n.children))
                .max()
                .unwrap_or(0)
        }
        depth_of(&self.sidebar)
    }
}

fn walk<'a, F: FnMut(&'a SidebarNode)>(nodes: &'a [SidebarNode], f: &mut F) {
    for node in nodes {
        f(node);
        walk(&node.children, f);
    }
}

fn trail_to<'a>(nodes: &'a [SidebarNode], link: &str, trail: &mut Vec<&'a str>) -> bool {
    for node in nodes {
        trail.push(node.text.as_str());
        if node.link.as_deref() == Some(link) || trail_to(&node.children, link, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteMeta;

    fn notes() -> SiteConfig {
        let mut config = SiteConfig::new(SiteMeta::new("Notes", ""));
        config.sidebar = vec![
            SidebarNode::group(
                "HTML",
                vec![SidebarNode::leaf("defer、async", "/html/defer-async")],
            )
            .with_link("/html"),
            SidebarNode::group(
                "JS",
                vec![
                    SidebarNode::group(
                        "Async",
                        vec![
                            SidebarNode::leaf("Promise", "/js/promise"),
                            SidebarNode::leaf("Event loop", "/js/event-loop"),
                        ],
                    ),
                    SidebarNode::leaf("Closures", "/js/closures"),
                ],
            ),
        ];
        crate::loader::load(config).unwrap()
    }

    #[test]
    fn test_leaves_keep_display_order() {
        let config = notes();
        let texts: Vec<_> = config.leaves().iter().map(|n| n.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["defer、async", "Promise", "Event loop", "Closures"]
        );
    }

    #[test]
    fn test_links_include_group_pages() {
        let config = notes();
        assert_eq!(
            config.links(),
            vec![
                "/html",
                "/html/defer-async",
                "/js/promise",
                "/js/event-loop",
                "/js/closures"
            ]
        );
    }

    #[test]
    fn test_find_by_link() {
        let config = notes();
        assert_eq!(config.find("/js/promise").unwrap().text, "Promise");
        assert_eq!(config.find("/html").unwrap().children.len(), 1);
        assert!(config.find("/missing").is_none());
    }

    #[test]
    fn test_active_trail() {
        let config = notes();
        assert_eq!(
            config.active_trail("/js/event-loop"),
            Some(vec!["JS", "Async", "Event loop"])
        );
        assert_eq!(config.active_trail("/html"), Some(vec!["HTML"]));
        assert_eq!(config.active_trail("/nope"), None);
    }

    #[test]
    fn test_depth() {
        assert_eq!(notes().depth(), 3);
        assert_eq!(SiteConfig::new(SiteMeta::new("Empty", "")).depth(), 0);
    }
}
