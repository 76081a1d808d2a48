//! Room detail page: one authenticated read of `/rooms/{id}` per route id.
//!
//! SYSTEM CONTEXT
//! ==============
//! Re-reads whenever the `id` route param changes; responses for a previous
//! id are dropped by the state's generation guard. A submitted comment swaps
//! in the full room aggregate returned by the backend, with no refetch.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::comment_form::CommentForm;
use crate::components::comment_list::CommentList;
use crate::components::icon::{Icon, IconKind};
use crate::components::image_gallery::ImageGallery;
use crate::components::room_map::RoomMap;
use crate::config::CONTACT_PHONE;
use crate::net::types::Room;
use crate::state::room_detail::RoomDetailState;
use crate::util::format::detail_price_label;

#[component]
pub fn RoomDetailPage() -> impl IntoView {
    let params = use_params_map();
    let room_id = Memo::new(move |_| params.with(|p| p.get("id")).unwrap_or_default());
    let state = RwSignal::new(RoomDetailState::default());

    #[cfg(feature = "hydrate")]
    {
        use crate::components::toast_host::notify;
        use crate::state::room_detail::{FetchOutcome, ROOM_DETAIL_ERROR};
        use crate::state::toast::{ToastKind, ToastState};

        let toasts = expect_context::<RwSignal<ToastState>>();
        Effect::new(move || {
            let id = room_id.get();
            let Some(generation) = state.try_update(RoomDetailState::begin) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let token = crate::state::session::stored_token();
                let result = crate::net::api::ApiClient::default()
                    .fetch_room(&id, token.as_deref())
                    .await;
                if let Err(e) = &result {
                    log::warn!("room {id} fetch failed: {e}");
                }
                let outcome = state.try_update(|s| s.finish(generation, result));
                if outcome == Some(FetchOutcome::Failed) {
                    notify(toasts, ToastKind::Error, ROOM_DETAIL_ERROR);
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = room_id;

    let on_comment_added = Callback::new(move |room: Room| state.update(|s| s.replace_room(room)));

    let loading = Memo::new(move |_| state.with(|s| s.loading));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let room = Memo::new(move |_| state.with(|s| s.room.clone()));

    view! {
        <div class="room-detail-page">
            {move || {
                if loading.get() {
                    return view! { <div class="status status--loading status--full">"Đang tải..."</div> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! { <div class="status status--error status--full">"Lỗi: " {message}</div> }.into_any();
                }
                match room.get() {
                    Some(room) => view! { <RoomDetailBody room=room on_comment_added=on_comment_added/> }.into_any(),
                    None => view! { <p>"Không có thông tin phòng để hiển thị"</p> }.into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn RoomDetailBody(room: Room, on_comment_added: Callback<Room>) -> impl IntoView {
    let addresses = room
        .address
        .iter()
        .map(|a| view! { <p class="room-detail__address">{a.one_line()}</p> })
        .collect_view();
    let has_address = !room.address.is_empty();
    let price = detail_price_label(&room);
    let primary_address = room.primary_address().cloned();

    view! {
        <article class="room-detail">
            <h1 class="room-detail__name">{room.name.to_uppercase()}</h1>

            <Show when=move || has_address>
                <div class="room-detail__addresses">
                    <h3 class="room-detail__label">
                        <Icon kind=IconKind::MapPin class="icon--md icon--red"/>
                        "Địa chỉ:"
                    </h3>
                </div>
            </Show>
            <div class="room-detail__address-list">{addresses}</div>

            <ImageGallery images=room.images.clone()/>

            <section class="panel room-detail__summary">
                <div class="room-detail__price-row">
                    <div class="room-detail__price">
                        <Icon kind=IconKind::Currency class="icon--lg icon--green"/>
                        <p>
                            <span class="room-detail__label">"Giá chỉ từ:"</span>
                            " "
                            <span class="room-detail__price-value">{price}</span>
                        </p>
                    </div>
                    <button class="btn btn--success room-detail__contact">
                        <Icon kind=IconKind::Phone class="icon--md"/>
                        {format!("Liên hệ: {CONTACT_PHONE}")}
                    </button>
                </div>
                <div class="room-detail__fact">
                    <Icon kind=IconKind::Bed class="icon--md icon--blue"/>
                    <p>
                        <span class="room-detail__label">"Loại phòng:"</span>
                        " "
                        {room.room_type.clone()}
                    </p>
                </div>
                <div class="room-detail__fact">
                    <Icon kind=IconKind::ClipboardList class="icon--md icon--purple"/>
                    <p>
                        <span class="room-detail__label">"Số lượng phòng:"</span>
                        " "
                        {room.room_quantity}
                    </p>
                </div>
            </section>

            <section class="panel">
                <h2 class="panel__title">
                    <Icon kind=IconKind::Info class="icon--md icon--blue"/>
                    "Thông tin chi tiết:"
                </h2>
                <p class="room-detail__description">{room.description.clone()}</p>
            </section>

            <RoomMap address=primary_address/>

            <CommentForm room_id=room.id.clone() on_comment_added=on_comment_added/>

            <CommentList comments=room.comments.clone()/>
        </article>
    }
}
