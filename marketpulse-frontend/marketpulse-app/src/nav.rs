/// One entry of the top navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

/// The search entry is rendered as a dialog trigger rather than a link.
pub const SEARCH_HREF: &str = "/search";

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        href: "/",
        label: "Dashboard",
    },
    NavItem {
        href: SEARCH_HREF,
        label: "Search",
    },
    NavItem {
        href: "/watchlist",
        label: "Watchlist",
    },
];

/// Whether the link to `href` should be highlighted on `pathname`.
///
/// The root only matches itself, every other link matches by prefix.
pub fn is_active_route(pathname: &str, href: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname.starts_with(href)
    }
}
