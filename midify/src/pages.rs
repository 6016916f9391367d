/// Pages reachable from the sidebar navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Page {
    #[default]
    Home,
    Dashboard,
    Tracks,
    Remap,
    Browser,
    Settings,
    Help,
}

impl Page {
    /// Navigation order, one sidebar link per entry.
    pub(crate) const ALL: [Page; 7] = [
        Page::Home,
        Page::Dashboard,
        Page::Tracks,
        Page::Remap,
        Page::Browser,
        Page::Settings,
        Page::Help,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Dashboard",
            Page::Tracks => "Tracks",
            Page::Remap => "Remap",
            Page::Browser => "Browser",
            Page::Settings => "Settings",
            Page::Help => "Help",
        }
    }

    /// Short glyph shown when the sidebar is collapsed.
    pub(crate) fn glyph(self) -> &'static str {
        match self {
            Page::Home => "⌂",
            Page::Dashboard => "▦",
            Page::Tracks => "♫",
            Page::Remap => "⇄",
            Page::Browser => "☰",
            Page::Settings => "⚙",
            Page::Help => "?",
        }
    }

    pub(crate) fn nav_index(self) -> usize {
        Page::ALL
            .iter()
            .position(|page| *page == self)
            .unwrap_or_default()
    }

    /// Whether loading this page fetches the server file listing.
    pub(crate) fn lists_files(self) -> bool {
        self == Page::Browser
    }
}

#[cfg(test)]
mod tests {
    use super::Page;

    #[test]
    fn given_every_page_when_indexed_then_index_matches_nav_order() {
        for (index, page) in Page::ALL.iter().enumerate() {
            assert_eq!(page.nav_index(), index);
        }
    }

    #[test]
    fn given_pages_when_checking_listing_then_only_browser_fetches_files() {
        let listing: Vec<Page> = Page::ALL
            .into_iter()
            .filter(|page| page.lists_files())
            .collect();

        assert_eq!(listing, vec![Page::Browser]);
    }
}
