//! Room comments with author, time and star rating.

use leptos::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::net::types::Comment;
use crate::util::format::comment_time_label;
use crate::util::rating::star_split;

#[component]
pub fn CommentList(comments: Vec<Comment>) -> impl IntoView {
    let empty = comments.is_empty();

    view! {
        <section class="panel comments">
            <h2 class="panel__title">"Bình luận về phòng:"</h2>
            <Show when=move || !empty fallback=|| view! { <p class="comments__empty">"Chưa có bình luận nào."</p> }>
                {comments
                    .clone()
                    .into_iter()
                    .map(|comment| view! { <CommentItem comment=comment/> })
                    .collect_view()}
            </Show>
        </section>
    }
}

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    let author = format!("{}:", comment.user_id.display_name());
    let time = comment_time_label(&comment.created_at);

    view! {
        <div class="comment">
            <div class="comment__meta">
                <strong class="comment__author">{author}</strong>
                <span class="comment__time">{time}</span>
            </div>
            <p class="comment__content">{comment.content}</p>
            <StarRating rating=comment.rating/>
        </div>
    }
}

/// Exactly five stars: `rating` filled, the rest empty.
#[component]
pub fn StarRating(rating: i64) -> impl IntoView {
    let split = star_split(rating);
    let filled = (0..split.filled).map(|_| view! { <Icon kind=IconKind::Star class="star star--filled"/> });
    let empty = (0..split.empty).map(|_| view! { <Icon kind=IconKind::Star class="star star--empty"/> });

    view! { <div class="stars" aria-label=format!("{} / 5", split.filled)>{filled.collect_view()} {empty.collect_view()}</div> }
}
