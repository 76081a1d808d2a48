//! Room detail view state.
//!
//! DESIGN
//! ======
//! Each read is tagged with a generation. When the route's room id changes
//! before an earlier read resolves, the earlier response is dropped instead
//! of overwriting the newer view. Comment submission replaces the whole
//! snapshot with the aggregate the backend returns.

#[cfg(test)]
#[path = "room_detail_test.rs"]
mod room_detail_test;

use crate::net::api::ApiError;
use crate::net::types::Room;

/// Stored error and toast text when the detail read fails.
pub const ROOM_DETAIL_ERROR: &str = "Không thể lấy thông tin phòng.";

#[derive(Clone, Debug, PartialEq)]
pub struct RoomDetailState {
    pub room: Option<Room>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl Default for RoomDetailState {
    fn default() -> Self {
        Self { room: None, loading: true, error: None, generation: 0 }
    }
}

/// Result of applying a detail response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded,
    Failed,
    Stale,
}

impl RoomDetailState {
    /// Start a read; returns the generation the response must carry.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply a response tagged with `generation`.
    pub fn finish(&mut self, generation: u64, result: Result<Room, ApiError>) -> FetchOutcome {
        if generation != self.generation {
            return FetchOutcome::Stale;
        }
        self.loading = false;
        match result {
            Ok(room) => {
                self.room = Some(room);
                FetchOutcome::Loaded
            }
            Err(_) => {
                self.error = Some(ROOM_DETAIL_ERROR.to_owned());
                FetchOutcome::Failed
            }
        }
    }

    /// Replace the snapshot with a full aggregate returned by a sub-action.
    pub fn replace_room(&mut self, room: Room) {
        self.room = Some(room);
    }
}
