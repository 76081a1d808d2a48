use super::*;
use crate::net::types::Address;

fn room(id: &str, name: &str) -> Room {
    Room { id: id.to_owned(), name: name.to_owned(), ..Room::default() }
}

fn rooms() -> Vec<Room> {
    let mut near_school = room("r2", "Phòng gần trường");
    near_school.address.push(Address {
        detail: "5 Nguyễn Trãi".to_owned(),
        ward: "Phường 2".to_owned(),
        district: "Quận 5".to_owned(),
        city: "HCM".to_owned(),
    });
    let mut studio = room("r3", "Căn hộ");
    studio.room_type = "Studio".to_owned();
    vec![room("r1", "Phòng A"), near_school, studio]
}

#[test]
fn default_state_is_loading() {
    let state = RoomListState::default();
    assert!(state.loading);
    assert!(state.rooms.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn finish_success_stores_rooms() {
    let mut state = RoomListState::default();
    state.finish(Ok(rooms()));
    assert!(!state.loading);
    assert_eq!(state.rooms.len(), 3);
    assert!(state.error.is_none());
}

#[test]
fn finish_failure_stores_message_and_stops_loading() {
    let mut state = RoomListState::default();
    state.finish(Err(ApiError::Status(503)));
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("request failed with status 503"));
    assert!(state.rooms.is_empty());
}

#[test]
fn visible_without_needle_returns_every_room_in_order() {
    let mut state = RoomListState::default();
    state.finish(Ok(rooms()));
    let ids: Vec<_> = state.visible(None).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["r1", "r2", "r3"]);
}

#[test]
fn visible_matches_name_type_and_address() {
    let mut state = RoomListState::default();
    state.finish(Ok(rooms()));
    assert_eq!(state.visible(Some("phòng a"))[0].id, "r1");
    assert_eq!(state.visible(Some("quận 5"))[0].id, "r2");
    assert_eq!(state.visible(Some("studio"))[0].id, "r3");
    assert!(state.visible(Some("biệt thự")).is_empty());
}

#[test]
fn room_href_points_at_detail_route() {
    assert_eq!(room_href("r1"), "/house-list/r1");
}
