//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session, search and toast state live here as `RwSignal` contexts. The
//! navbar and toast host sit outside `<Routes>` so they persist across
//! navigation; pages read the contexts they need with `expect_context`.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast_host::ToastHost;
use crate::pages::{login::LoginPage, room_detail::RoomDetailPage, room_list::RoomListPage};
use crate::state::{search::SearchState, session::SessionState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="vi">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let search = RwSignal::new(SearchState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(search);
    provide_context(toasts);

    // Storage is browser-only; SSR renders the logged-out navbar and the
    // stored session is applied once mounted.
    Effect::new(move || {
        session.set(SessionState::restore());
    });

    let on_search = Callback::new(move |query: String| search.update(|s| s.query = query));

    view! {
        <Stylesheet id="leptos" href="/pkg/homify.css"/>
        <Title text="HomifyMe"/>

        <Router>
            <Navbar on_search=on_search/>
            <main class="app-main">
                <Routes fallback=|| "Không tìm thấy trang.".into_view()>
                    <Route path=StaticSegment("") view=RoomListPage/>
                    <Route path=StaticSegment("house-list") view=RoomListPage/>
                    <Route path=(StaticSegment("house-list"), ParamSegment("id")) view=RoomDetailPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
