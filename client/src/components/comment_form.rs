//! Comment submission form for the room detail page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Posts a comment with the stored bearer token and hands the backend's full
//! updated room aggregate to `on_comment_added`. The parent replaces its
//! snapshot with that payload; nothing is appended locally.

#[cfg(test)]
#[path = "comment_form_test.rs"]
mod comment_form_test;

use leptos::prelude::*;

use crate::net::types::{NewComment, Room};
#[cfg(feature = "hydrate")]
use crate::state::toast::ToastState;

pub const LOGIN_REQUIRED_MESSAGE: &str = "Vui lòng đăng nhập để bình luận.";
pub const EMPTY_CONTENT_MESSAGE: &str = "Nội dung bình luận không được để trống.";
pub const COMMENT_ERROR_TOAST: &str = "Không thể gửi bình luận.";
pub const COMMENT_ADDED_TOAST: &str = "Đã thêm bình luận.";

/// Default and maximum selectable rating.
pub const DEFAULT_RATING: i64 = 5;

/// Check the draft before posting.
///
/// # Errors
///
/// Returns the message to show when no token is stored or the trimmed content
/// is empty.
pub fn validate_comment(token: Option<&str>, content: &str, rating: i64) -> Result<NewComment, &'static str> {
    if token.is_none_or(|t| t.trim().is_empty()) {
        return Err(LOGIN_REQUIRED_MESSAGE);
    }
    let content = content.trim();
    if content.is_empty() {
        return Err(EMPTY_CONTENT_MESSAGE);
    }
    Ok(NewComment { content: content.to_owned(), rating: rating.clamp(1, DEFAULT_RATING) })
}

/// Parse the rating `<select>` value, falling back to the default.
pub fn parse_rating(raw: &str) -> i64 {
    raw.trim().parse().map_or(DEFAULT_RATING, |r: i64| r.clamp(1, DEFAULT_RATING))
}

#[component]
pub fn CommentForm(room_id: String, on_comment_added: Callback<Room>) -> impl IntoView {
    let content = RwSignal::new(String::new());
    let rating = RwSignal::new(DEFAULT_RATING);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let room_id = StoredValue::new(room_id);

    #[cfg(feature = "hydrate")]
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let token = crate::state::session::stored_token();
        let body = match validate_comment(token.as_deref(), &content.get_untracked(), rating.get_untracked()) {
            Ok(body) => body,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        info.set(String::new());
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toast_host::notify;
            use crate::state::toast::ToastKind;

            let id = room_id.get_value();
            match crate::net::api::ApiClient::default().post_comment(&id, &body, token.as_deref()).await {
                Ok(room) => {
                    content.set(String::new());
                    rating.set(DEFAULT_RATING);
                    notify(toasts, ToastKind::Success, COMMENT_ADDED_TOAST);
                    on_comment_added.run(room);
                }
                Err(e) => {
                    log::warn!("comment submission failed: {e}");
                    notify(toasts, ToastKind::Error, COMMENT_ERROR_TOAST);
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, room_id, on_comment_added);
            busy.set(false);
        }
    };

    view! {
        <form class="panel comment-form" on:submit=on_submit>
            <h2 class="panel__title">"Viết bình luận"</h2>
            <textarea
                class="comment-form__content"
                placeholder="Chia sẻ cảm nhận của bạn..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <div class="comment-form__row">
                <label class="comment-form__label">
                    "Đánh giá: "
                    <select
                        class="comment-form__rating"
                        prop:value=move || rating.get().to_string()
                        on:change=move |ev| rating.set(parse_rating(&event_target_value(&ev)))
                    >
                        {(1..=DEFAULT_RATING)
                            .rev()
                            .map(|r| view! { <option value=r.to_string()>{format!("{r} ★")}</option> })
                            .collect_view()}
                    </select>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Gửi bình luận"
                </button>
            </div>
            <Show when=move || !info.get().is_empty()>
                <p class="comment-form__message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
