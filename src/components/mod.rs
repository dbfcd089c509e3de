//! UI Components
//!
//! Reusable Leptos components.

mod filter_dropdown;
mod footer;
mod game_card;
mod navbar;
mod pagination;
mod search_dropdown;
mod spinner;

pub use filter_dropdown::FilterDropdown;
pub use footer::Footer;
pub use game_card::GameCard;
pub use navbar::Navbar;
pub use pagination::Pagination;
pub use search_dropdown::SearchDropdown;
pub use spinner::Spinner;
