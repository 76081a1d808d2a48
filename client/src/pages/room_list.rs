//! Room list page: one read of `/rooms/all`, rendered as a card grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/` and `/house-list`. The navbar search text narrows the grid;
//! with an empty query every fetched room gets a card.

use leptos::prelude::*;

use crate::components::room_card::RoomCard;
use crate::state::rooms::RoomListState;
use crate::state::search::SearchState;

#[component]
pub fn RoomListPage() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchState>>();
    let state = RwSignal::new(RoomListState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::components::toast_host::notify;
        use crate::state::rooms::ROOM_LIST_ERROR_TOAST;
        use crate::state::toast::{ToastKind, ToastState};

        let toasts = expect_context::<RwSignal<ToastState>>();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::ApiClient::default().fetch_rooms().await;
            if let Err(e) = &result {
                log::warn!("room list fetch failed: {e}");
                notify(toasts, ToastKind::Error, ROOM_LIST_ERROR_TOAST);
            }
            state.try_update(|s| s.finish(result));
        });
    }

    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let visible = move || {
        let needle = search.with(SearchState::needle);
        state.with(|s| s.visible(needle.as_deref()))
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="status status--loading">"Đang tải..."</div> }
        >
            {move || match error.get() {
                Some(message) => view! { <div class="status status--error">"Lỗi: " {message}</div> }.into_any(),
                None => {
                    view! {
                        <div class="room-list-page">
                            <h1 class="page-title">"Danh sách phòng"</h1>
                            <div class="room-grid">
                                {move || {
                                    visible()
                                        .into_iter()
                                        .map(|room| view! { <RoomCard room=room/> })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </Show>
    }
}
