//! Site-wide settings: who the site belongs to and where it is deployed.

/// Identity and contact details shown across the pages.
#[derive(Debug, Clone, Copy)]
pub struct SiteConfig {
    pub owner: &'static str,
    pub initials: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub website: &'static str,
    pub copyright_year: u16,
}

pub const SITE: SiteConfig = SiteConfig {
    owner: "João Silva",
    initials: "JS",
    tagline: "Desenvolvedor de aplicativos móveis",
    email: "joao.silva@exemplo.com",
    phone: "+55 (11) 99999-9999",
    location: "São Paulo, Brasil",
    website: "www.joaosilva.dev",
    copyright_year: 2024,
};

/// Base path the router is mounted under.
///
/// Debug builds are served from the root by `trunk serve`. Release builds
/// default to the GitHub Pages project path, unless `APPFOLIO_BASE_PATH` is set
/// at compile time.
pub fn base_path() -> &'static str {
    if cfg!(debug_assertions) {
        ""
    } else {
        normalize_base(option_env!("APPFOLIO_BASE_PATH").unwrap_or("/appfolio"))
    }
}

// "/" and "" both mean "mounted at the root"; the router wants no trailing slash.
fn normalize_base(raw: &'static str) -> &'static str {
    raw.trim_end_matches('/')
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

/// Document title for a page, e.g. `"Apps | João Silva"`.
pub fn page_title(section: &str) -> String {
    if section.is_empty() {
        SITE.owner.to_string()
    } else {
        format!("{section} | {}", SITE.owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_path_has_no_trailing_slash() {
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base("/appfolio/"), "/appfolio");
        assert_eq!(normalize_base("/appfolio"), "/appfolio");
        assert!(!base_path().ends_with('/'));
    }

    #[test]
    fn titles_include_owner() {
        assert_eq!(page_title(""), "João Silva");
        assert_eq!(page_title("Contato"), "Contato | João Silva");
    }
}
