//! Card component for the room list grid.

use leptos::prelude::*;

use crate::net::types::Room;
use crate::state::rooms::room_href;
use crate::util::format::{availability_label, card_price_label};

/// A clickable room summary linking to `/house-list/{id}`.
#[component]
pub fn RoomCard(room: Room) -> impl IntoView {
    let href = room_href(&room.id);
    let status_class = if room.status { "room-card__status room-card__status--free" } else { "room-card__status room-card__status--taken" };

    view! {
        <div class="room-card">
            <a class="room-card__link" href=href>
                <h2 class="room-card__name">{room.name}</h2>
                <p class="room-card__line">{card_price_label(room.price)}</p>
                <div class="room-card__line room-card__line--status">
                    <span>"Trạng thái: "</span>
                    <p class=status_class>{availability_label(room.status)}</p>
                </div>
                <p class="room-card__line">"Số lượng còn lại: " {room.room_quantity}</p>
            </a>
        </div>
    }
}
