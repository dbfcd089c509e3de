//! Game Catalog Calls

use crate::error::FetchError;
use crate::filters::{Dimension, FilterState, PER_PAGE};
use crate::models::{FilterOption, Game, Paginated};
use crate::url_state;

use super::get_json;

/// Query string for the listing endpoint: page and page size always, plus
/// one comma-joined parameter per constrained dimension
fn listing_query(filters: &FilterState) -> String {
    let mut query = format!("page={}&perPage={}", filters.page, PER_PAGE);
    for dim in Dimension::ALL {
        let values = filters.selected(dim);
        if !values.is_empty() {
            query.push_str(&format!("&{}={}", dim.key(), url_state::join_encoded(values)));
        }
    }
    query
}

/// One page of upcoming games under the given filters. A 404 means the
/// filtered set is empty, not a failure.
pub async fn fetch_upcoming_games(filters: &FilterState) -> Result<Paginated<Game>, FetchError> {
    match get_json(&format!("/upcoming-games?{}", listing_query(filters))).await {
        Err(FetchError::NotFound) => Ok(Paginated::empty(filters.page, PER_PAGE)),
        result => result,
    }
}

/// Full option vocabulary for one filter dimension
pub async fn fetch_vocabulary(dim: Dimension) -> Result<Vec<FilterOption>, FetchError> {
    get_json(dim.endpoint()).await
}

/// Single game for the detail page
pub async fn fetch_game(id: u32) -> Result<Game, FetchError> {
    get_json(&format!("/games/{id}")).await
}

/// Server-side search passthrough
pub async fn search_games(query: &str) -> Result<Vec<Game>, FetchError> {
    get_json(&format!("/search?q={}", url_state::encode_value(query))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_query_without_filters_sends_only_paging() {
        assert_eq!(listing_query(&FilterState::default()), "page=1&perPage=12");
    }

    #[test]
    fn listing_query_joins_and_escapes_dimension_values() {
        let mut filters = FilterState::default();
        filters.toggle(Dimension::Developers, "Valve");
        filters.toggle(Dimension::Developers, "Id Software");
        filters.toggle(Dimension::Genres, "RPG");
        filters.set_page(2, Some(5));
        assert_eq!(
            listing_query(&filters),
            "page=2&perPage=12&developers=Valve,Id%20Software&genres=RPG"
        );
    }
}
