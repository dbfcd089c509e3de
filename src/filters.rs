//! Filter & Pagination State
//!
//! Selection state for the upcoming-games listing: one list of selected
//! option names per filter dimension plus the current 1-based page.
//! Dimensions never interact client-side; the server combines them
//! conjunctively.

/// Items per listing page
pub const PER_PAGE: u32 = 12;

/// One independently filterable facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Developers,
    Platforms,
    Genres,
    Languages,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Developers,
        Dimension::Platforms,
        Dimension::Genres,
        Dimension::Languages,
    ];

    /// Query-string key and request parameter name
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Developers => "developers",
            Dimension::Platforms => "platforms",
            Dimension::Genres => "genres",
            Dimension::Languages => "languages",
        }
    }

    /// Vocabulary endpoint path
    pub fn endpoint(self) -> &'static str {
        match self {
            Dimension::Developers => "/developers",
            Dimension::Platforms => "/platforms",
            Dimension::Genres => "/genres",
            Dimension::Languages => "/languages",
        }
    }

    /// Heading shown on the filter dropdown
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Developers => "Developers",
            Dimension::Platforms => "Platforms",
            Dimension::Genres => "Genres",
            Dimension::Languages => "Languages",
        }
    }
}

/// Active filter selections and current page for the listing.
///
/// Selections keep insertion order so the URL encoding is stable; equality
/// treats each dimension as a set.
#[derive(Debug, Clone)]
pub struct FilterState {
    developers: Vec<String>,
    platforms: Vec<String>,
    genres: Vec<String>,
    languages: Vec<String>,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            developers: Vec::new(),
            platforms: Vec::new(),
            genres: Vec::new(),
            languages: Vec::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn selected(&self, dim: Dimension) -> &[String] {
        match dim {
            Dimension::Developers => &self.developers,
            Dimension::Platforms => &self.platforms,
            Dimension::Genres => &self.genres,
            Dimension::Languages => &self.languages,
        }
    }

    fn selected_mut(&mut self, dim: Dimension) -> &mut Vec<String> {
        match dim {
            Dimension::Developers => &mut self.developers,
            Dimension::Platforms => &mut self.platforms,
            Dimension::Genres => &mut self.genres,
            Dimension::Languages => &mut self.languages,
        }
    }

    /// Add or remove one option. Changing filters invalidates the page
    /// position, so the page returns to 1.
    pub fn toggle(&mut self, dim: Dimension, name: &str) {
        let selected = self.selected_mut(dim);
        if let Some(pos) = selected.iter().position(|n| n == name) {
            selected.remove(pos);
        } else {
            selected.push(name.to_string());
        }
        self.page = 1;
    }

    /// Insert without the page reset; used when rebuilding state from a URL
    pub(crate) fn insert(&mut self, dim: Dimension, name: &str) {
        let selected = self.selected_mut(dim);
        if !selected.iter().any(|n| n == name) {
            selected.push(name.to_string());
        }
    }

    /// Clear every dimension and return to the first page
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Clamp to the known page range; an unknown total counts as one page
    pub fn set_page(&mut self, page: u32, total_pages: Option<u32>) {
        let last = total_pages.unwrap_or(1).max(1);
        self.page = page.clamp(1, last);
    }

    pub fn has_filters(&self) -> bool {
        Dimension::ALL.iter().any(|dim| !self.selected(*dim).is_empty())
    }
}

impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        fn as_set(values: &[String]) -> std::collections::BTreeSet<&str> {
            values.iter().map(String::as_str).collect()
        }
        self.page == other.page
            && Dimension::ALL
                .iter()
                .all(|dim| as_set(self.selected(*dim)) == as_set(other.selected(*dim)))
    }
}

impl Eq for FilterState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_keeps_values_toggled_an_odd_number_of_times() {
        let mut state = FilterState::default();
        state.toggle(Dimension::Genres, "RPG");
        state.toggle(Dimension::Genres, "Shooter");
        state.toggle(Dimension::Genres, "RPG");
        assert_eq!(state.selected(Dimension::Genres).to_vec(), ["Shooter"]);
    }

    #[test]
    fn toggle_resets_page_to_first() {
        let mut state = FilterState::default();
        state.set_page(3, Some(5));
        state.toggle(Dimension::Platforms, "PC");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn set_page_clamps_to_known_range() {
        let mut state = FilterState::default();
        state.set_page(99, Some(3));
        assert_eq!(state.page, 3);
        state.set_page(0, Some(3));
        assert_eq!(state.page, 1);
        state.set_page(5, None);
        assert_eq!(state.page, 1);
        state.set_page(2, Some(0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn set_page_leaves_selections_alone() {
        let mut state = FilterState::default();
        state.toggle(Dimension::Developers, "Valve");
        state.set_page(2, Some(4));
        assert_eq!(state.selected(Dimension::Developers).to_vec(), ["Valve"]);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn reset_restores_the_default_state() {
        let mut state = FilterState::default();
        state.toggle(Dimension::Languages, "Swedish");
        state.toggle(Dimension::Genres, "RPG");
        state.set_page(4, Some(9));
        state.reset();
        assert_eq!(state, FilterState::default());
        assert!(!state.has_filters());
    }

    #[test]
    fn equality_ignores_selection_order() {
        let mut first = FilterState::default();
        first.toggle(Dimension::Platforms, "PC");
        first.toggle(Dimension::Platforms, "Switch");
        let mut second = FilterState::default();
        second.toggle(Dimension::Platforms, "Switch");
        second.toggle(Dimension::Platforms, "PC");
        assert_eq!(first, second);
    }
}
