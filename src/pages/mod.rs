//! Route Pages

mod event_detail;
mod events;
mod game_detail;
mod not_found;
mod upcoming_games;

pub use event_detail::EventDetailPage;
pub use events::EventsPage;
pub use game_detail::GameDetailPage;
pub use not_found::NotFoundPage;
pub use upcoming_games::UpcomingGamesPage;
