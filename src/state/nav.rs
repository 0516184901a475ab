//! Site navigation panel state

/// Page shown for an empty path
pub const INDEX_PAGE: &str = "index.html";

/// Pages linked from the site navigation
pub const SITE_PAGES: &[(&str, &str)] = &[
    ("index.html", "Home"),
    ("about.html", "About"),
    ("projects.html", "Projects"),
    ("contact.html", "Contact"),
];

/// A navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub label: String,
    /// Carries the "current page" marker
    pub current: bool,
}

/// Mobile navigation panel and its links
#[derive(Debug, Clone)]
pub struct NavState {
    pub open: bool,
    pub links: Vec<NavLink>,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(SITE_PAGES)
    }
}

impl NavState {
    pub fn new(pages: &[(&str, &str)]) -> Self {
        Self {
            open: false,
            links: pages
                .iter()
                .map(|(href, label)| NavLink {
                    href: href.to_string(),
                    label: label.to_string(),
                    current: false,
                })
                .collect(),
        }
    }

    /// Flip the panel open/closed
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Expanded-state indicator for the toggle control
    pub fn aria_expanded(&self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// Mark the link matching the page path as current; unmark the rest
    pub fn mark_current(&mut self, path: &str) {
        let page = current_page(path);
        for link in &mut self.links {
            link.current = link.href == page;
        }
    }

    pub fn current_link(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.current)
    }
}

/// Last segment of a URL path, or the index page when it is empty
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => INDEX_PAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        let nav = NavState::default();
        assert!(!nav.open);
        assert_eq!(nav.aria_expanded(), "false");
    }

    #[test]
    fn test_toggle_flips_open_and_expanded_together() {
        let mut nav = NavState::default();
        nav.toggle();
        assert!(nav.open);
        assert_eq!(nav.aria_expanded(), "true");
        nav.toggle();
        assert!(!nav.open);
        assert_eq!(nav.aria_expanded(), "false");
    }

    #[test]
    fn test_current_page_takes_last_segment() {
        assert_eq!(current_page("/site/contact.html"), "contact.html");
        assert_eq!(current_page("about.html"), "about.html");
        assert_eq!(current_page("/"), INDEX_PAGE);
        assert_eq!(current_page(""), INDEX_PAGE);
    }

    #[test]
    fn test_mark_current_marks_exactly_one_link() {
        let mut nav = NavState::default();
        nav.mark_current("/projects.html");
        assert_eq!(nav.current_link().unwrap().label, "Projects");
        nav.mark_current("/");
        assert_eq!(nav.current_link().unwrap().href, "index.html");
        assert_eq!(nav.links.iter().filter(|l| l.current).count(), 1);
    }

    #[test]
    fn test_unknown_page_marks_nothing() {
        let mut nav = NavState::default();
        nav.mark_current("/blog.html");
        assert!(nav.current_link().is_none());
    }
}
