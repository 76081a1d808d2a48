use super::*;
use crate::net::types::Comment;

fn room(id: &str, quantity: i64) -> Room {
    Room { id: id.to_owned(), room_quantity: quantity, ..Room::default() }
}

#[test]
fn default_state_is_loading_without_room() {
    let state = RoomDetailState::default();
    assert!(state.loading);
    assert!(state.room.is_none());
}

#[test]
fn finish_current_generation_loads_room() {
    let mut state = RoomDetailState::default();
    let generation = state.begin();
    assert_eq!(state.finish(generation, Ok(room("r1", 0))), FetchOutcome::Loaded);
    assert!(!state.loading);
    assert_eq!(state.room.as_ref().map(|r| r.id.as_str()), Some("r1"));
}

#[test]
fn finish_failure_sets_fixed_error() {
    let mut state = RoomDetailState::default();
    let generation = state.begin();
    let outcome = state.finish(generation, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome, FetchOutcome::Failed);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(ROOM_DETAIL_ERROR));
}

#[test]
fn stale_response_is_dropped() {
    let mut state = RoomDetailState::default();
    let first = state.begin();
    let second = state.begin();
    assert_eq!(state.finish(first, Ok(room("old", 1))), FetchOutcome::Stale);
    assert!(state.loading);
    assert!(state.room.is_none());
    assert_eq!(state.finish(second, Ok(room("new", 1))), FetchOutcome::Loaded);
    assert_eq!(state.room.as_ref().map(|r| r.id.as_str()), Some("new"));
}

#[test]
fn begin_clears_previous_error() {
    let mut state = RoomDetailState::default();
    let generation = state.begin();
    state.finish(generation, Err(ApiError::Status(404)));
    state.begin();
    assert!(state.error.is_none());
    assert!(state.loading);
}

#[test]
fn replace_room_swaps_whole_snapshot() {
    let mut state = RoomDetailState::default();
    let generation = state.begin();
    state.finish(generation, Ok(room("r1", 2)));

    let mut updated = room("r1", 2);
    updated.comments.push(Comment { content: "Mới".to_owned(), rating: 5, ..Comment::default() });
    state.replace_room(updated.clone());
    assert_eq!(state.room, Some(updated));
}
