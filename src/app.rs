//! Gamerfeeds App
//!
//! Root component: constructs the stores, provides them via context and
//! renders the router shell.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Navbar};
use crate::pages::{
    EventDetailPage, EventsPage, GameDetailPage, NotFoundPage, UpcomingGamesPage,
};
use crate::store::{EventStore, GameStore, SearchStore, ThemeStore};

#[component]
pub fn App() -> impl IntoView {
    let theme = ThemeStore::new();
    provide_context(theme);
    provide_context(GameStore::new());
    provide_context(EventStore::new());
    provide_context(SearchStore::new());

    // Theme class on the document root so the CSS variables switch site-wide
    Effect::new(move |_| {
        let dark = theme.is_dark.get();
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let class_list = root.class_list();
            let _ = if dark {
                class_list.add_1("dark")
            } else {
                class_list.remove_1("dark")
            };
        }
    });

    view! {
        <Router>
            <Navbar />
            <main class="page-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=UpcomingGamesPage />
                    <Route path=path!("/upcominggames") view=UpcomingGamesPage />
                    <Route path=path!("/games/:id") view=GameDetailPage />
                    <Route path=path!("/events") view=EventsPage />
                    <Route path=path!("/events/:id") view=EventDetailPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
