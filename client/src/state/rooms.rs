//! Room list view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the room list page. One read of `/rooms/all` per mount; no cache
//! is shared with other views.

#[cfg(test)]
#[path = "rooms_test.rs"]
mod rooms_test;

use crate::net::api::ApiError;
use crate::net::types::Room;

/// Toast shown when the list read fails.
pub const ROOM_LIST_ERROR_TOAST: &str = "Không thể lấy danh sách phòng.";

#[derive(Clone, Debug, PartialEq)]
pub struct RoomListState {
    pub rooms: Vec<Room>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for RoomListState {
    fn default() -> Self {
        Self { rooms: Vec::new(), loading: true, error: None }
    }
}

impl RoomListState {
    /// Store the outcome of the list read and stop loading.
    pub fn finish(&mut self, result: Result<Vec<Room>, ApiError>) {
        match result {
            Ok(rooms) => {
                self.rooms = rooms;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
        self.loading = false;
    }

    /// Rooms matching `needle` (already lower-cased); all rooms when `None`.
    pub fn visible(&self, needle: Option<&str>) -> Vec<Room> {
        match needle {
            None => self.rooms.clone(),
            Some(needle) => self.rooms.iter().filter(|r| matches_needle(r, needle)).cloned().collect(),
        }
    }
}

/// Case-insensitive match on name, room type and any address line.
pub fn matches_needle(room: &Room, needle: &str) -> bool {
    room.name.to_lowercase().contains(needle)
        || room.room_type.to_lowercase().contains(needle)
        || room
            .address
            .iter()
            .any(|a| a.one_line().to_lowercase().contains(needle))
}

/// Detail route for a room card.
pub fn room_href(room_id: &str) -> String {
    format!("/house-list/{room_id}")
}
