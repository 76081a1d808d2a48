//! Embedded map pin for a room address.

#[cfg(test)]
#[path = "room_map_test.rs"]
mod room_map_test;

use leptos::prelude::*;
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};

use crate::net::types::Address;

/// Google Maps embed URL searching for the address line.
pub fn map_embed_url(address: &Address) -> String {
    let line = address.one_line();
    let query = utf8_percent_encode(&line, NON_ALPHANUMERIC);
    format!("https://maps.google.com/maps?q={query}&z=15&output=embed")
}

/// Map for one address; renders nothing when the room has no address.
#[component]
pub fn RoomMap(address: Option<Address>) -> impl IntoView {
    address.map(|address| {
        let src = map_embed_url(&address);
        let title = address.one_line();
        view! {
            <section class="panel room-map">
                <iframe class="room-map__frame" src=src title=title></iframe>
            </section>
        }
    })
}
