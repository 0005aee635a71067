//! The navigation route table.
//!
//! Both the `<Routes>` declarations in [`crate::App`] and the header links are
//! generated from [`Page::ALL`], so the two cannot drift apart.

/// A top-level page reachable from the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Apps,
    Contact,
    Privacy,
}

impl Page {
    /// Route order, which is also the header's link order.
    pub const ALL: [Page; 4] = [Page::Home, Page::Apps, Page::Contact, Page::Privacy];

    /// Absolute path of the page, relative to the router base.
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Apps => "/apps",
            Page::Contact => "/contact",
            Page::Privacy => "/privacy",
        }
    }

    /// The single static segment matched by the router (`""` for the root).
    pub const fn segment(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Apps => "apps",
            Page::Contact => "contact",
            Page::Privacy => "privacy",
        }
    }

    /// Label used in the header navigation.
    pub const fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Início",
            Page::Apps => "Apps",
            Page::Contact => "Contato",
            Page::Privacy => "Privacidade",
        }
    }

    /// Section name used in the document title.
    pub const fn title(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Apps => "Apps",
            Page::Contact => "Contato",
            Page::Privacy => "Política de Privacidade",
        }
    }

    /// Resolve a location path to its page. A single trailing slash is
    /// tolerated; anything else unknown yields `None`.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(rest) => rest,
        };
        Page::ALL.into_iter().find(|page| page.path() == trimmed)
    }

    /// Page shown at a browser location that may still carry the router base.
    pub fn from_location(pathname: &str, base: &str) -> Option<Page> {
        let path = pathname.strip_prefix(base).unwrap_or(pathname);
        Page::from_path(if path.is_empty() { "/" } else { path })
    }

    /// Link target for the page under the configured router base.
    ///
    /// `<A>` leaves absolute hrefs alone, so the base has to be part of them
    /// or the router treats the click as leaving the app.
    pub fn href(self) -> String {
        self.href_under(crate::config::base_path())
    }

    pub fn href_under(self, base: &str) -> String {
        format!("{base}{}", self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_page_resolves_from_its_own_path() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
    }

    #[test]
    fn paths_and_segments_agree() {
        for page in Page::ALL {
            assert_eq!(page.path(), format!("/{}", page.segment()));
        }
    }

    #[test]
    fn paths_are_distinct() {
        let paths: HashSet<_> = Page::ALL.iter().map(|p| p.path()).collect();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn trailing_slash_is_tolerated() {
        assert_eq!(Page::from_path("/apps/"), Some(Page::Apps));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
    }

    #[test]
    fn unknown_paths_have_no_page() {
        assert_eq!(Page::from_path("/blog"), None);
        assert_eq!(Page::from_path("/apps/1"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn hrefs_stay_under_the_base() {
        assert_eq!(Page::Apps.href_under("/appfolio"), "/appfolio/apps");
        assert_eq!(Page::Home.href_under("/appfolio"), "/appfolio/");
        assert_eq!(Page::Contact.href_under(""), "/contact");
        for page in Page::ALL {
            let href = page.href_under("/appfolio");
            assert!(href.starts_with("/appfolio/"), "{href}");
            assert_eq!(Page::from_location(&href, "/appfolio"), Some(page));
        }
    }

    #[test]
    fn default_hrefs_use_the_configured_base() {
        for page in Page::ALL {
            assert_eq!(page.href(), page.href_under(crate::config::base_path()));
        }
    }

    #[test]
    fn locations_resolve_with_or_without_the_base() {
        assert_eq!(Page::from_location("/appfolio", "/appfolio"), Some(Page::Home));
        assert_eq!(Page::from_location("/privacy", "/appfolio"), Some(Page::Privacy));
        assert_eq!(Page::from_location("/contact", ""), Some(Page::Contact));
        assert_eq!(Page::from_location("/appfolio/blog", "/appfolio"), None);
    }
}
