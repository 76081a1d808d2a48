use super::*;

// =============================================================
// Helpers
// =============================================================

fn full_room_json() -> serde_json::Value {
    serde_json::json!({
        "_id": "r1",
        "name": "Phòng A",
        "price": 1_000_000,
        "status": true,
        "room_quantity": 2,
        "room_type": "Studio",
        "description": "Gần trường",
        "address": [
            { "detail": "12 Lê Lợi", "ward": "Bến Nghé", "district": "Quận 1", "city": "HCM" }
        ],
        "images": [
            { "url": "a.png", "default": true },
            { "url": "b.png", "default": false }
        ],
        "comments": [
            {
                "_id": "c1",
                "user_id": { "_id": "u1", "username": "lan" },
                "content": "Đẹp",
                "rating": 4,
                "created_at": "2024-05-01T10:20:30.000Z"
            }
        ]
    })
}

// =============================================================
// Room
// =============================================================

#[test]
fn room_deserializes_full_aggregate() {
    let room: Room = serde_json::from_value(full_room_json()).unwrap();
    assert_eq!(room.id, "r1");
    assert_eq!(room.price, 1_000_000);
    assert!(room.status);
    assert_eq!(room.room_quantity, 2);
    assert_eq!(room.address.len(), 1);
    assert_eq!(room.images.len(), 2);
    assert!(room.images[0].is_default);
    assert!(!room.images[1].is_default);
    assert_eq!(room.comments[0].user_id.display_name(), "lan");
    assert_eq!(room.comments[0].rating, 4);
}

#[test]
fn room_missing_collections_default_to_empty() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "name": "A",
        "price": 1_000_000,
        "status": true,
        "room_quantity": 2
    }))
    .unwrap();
    assert!(room.images.is_empty());
    assert!(room.address.is_empty());
    assert!(room.comments.is_empty());
    assert!(room.primary_address().is_none());
}

#[test]
fn room_null_collections_default_to_empty() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "images": null,
        "address": null,
        "comments": null
    }))
    .unwrap();
    assert!(room.images.is_empty());
    assert!(room.address.is_empty());
    assert!(room.comments.is_empty());
}

#[test]
fn room_accepts_integer_valued_floats() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "price": 2_500_000.0,
        "room_quantity": 3.0
    }))
    .unwrap();
    assert_eq!(room.price, 2_500_000);
    assert_eq!(room.room_quantity, 3);
}

#[test]
fn room_rounds_fractional_price() {
    let room: Room = serde_json::from_value(serde_json::json!({ "_id": "r1", "price": 1_500_000.5 })).unwrap();
    assert_eq!(room.price, 1_500_001);
}

#[test]
fn room_null_numbers_read_as_zero() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "price": null,
        "room_quantity": null
    }))
    .unwrap();
    assert_eq!(room.price, 0);
    assert_eq!(room.room_quantity, 0);
    assert!(!room.has_stock());
}

#[test]
fn room_null_strings_and_status_read_as_defaults() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "name": null,
        "status": null,
        "room_type": null,
        "description": null,
        "address": [{ "detail": null, "ward": "W", "district": null, "city": "C" }],
        "images": [{ "url": null, "default": null }]
    }))
    .unwrap();
    assert_eq!(room.name, "");
    assert!(!room.status);
    assert_eq!(room.description, "");
    assert_eq!(room.address[0].one_line(), ", W, , C");
    assert_eq!(room.images[0], Image::default());
}

#[test]
fn room_rejects_string_quantity() {
    let result = serde_json::from_value::<Room>(serde_json::json!({ "_id": "r1", "room_quantity": "2" }));
    assert!(result.is_err());
}

#[test]
fn room_has_stock_follows_quantity() {
    let mut room = Room { room_quantity: 1, ..Room::default() };
    assert!(room.has_stock());
    room.room_quantity = 0;
    assert!(!room.has_stock());
}

// =============================================================
// Room list
// =============================================================

#[test]
fn room_list_keeps_rooms_with_rounded_prices() {
    let values = vec![
        serde_json::json!({ "_id": "r1", "price": 1_000_000 }),
        serde_json::json!({ "_id": "r2", "price": 1_500_000.5 }),
    ];
    let rooms = rooms_from_values(values);
    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[1].price, 1_500_001);
}

#[test]
fn room_list_skips_undecodable_entries() {
    let values = vec![
        serde_json::json!({ "_id": "r1", "name": "A" }),
        serde_json::json!({ "_id": "r2", "room_quantity": "2" }),
        serde_json::json!({ "name": "no id" }),
        serde_json::json!({ "_id": "r3", "name": "C" }),
    ];
    let ids: Vec<_> = rooms_from_values(values).into_iter().map(|r| r.id).collect();
    assert_eq!(ids, vec!["r1".to_owned(), "r3".to_owned()]);
}

// =============================================================
// Address
// =============================================================

#[test]
fn address_one_line_joins_all_parts() {
    let address = Address {
        detail: "12 Lê Lợi".to_owned(),
        ward: "Bến Nghé".to_owned(),
        district: "Quận 1".to_owned(),
        city: "HCM".to_owned(),
    };
    assert_eq!(address.one_line(), "12 Lê Lợi, Bến Nghé, Quận 1, HCM");
}

// =============================================================
// CommentAuthor
// =============================================================

#[test]
fn comment_author_accepts_bare_reference() {
    let comment: Comment = serde_json::from_value(serde_json::json!({
        "_id": "c1",
        "user_id": "u1",
        "content": "ok",
        "rating": 3
    }))
    .unwrap();
    assert_eq!(comment.user_id, CommentAuthor::Reference("u1".to_owned()));
    assert_eq!(comment.user_id.display_name(), "Ẩn danh");
}

#[test]
fn comment_null_author_and_fields_are_anonymous() {
    let room: Room = serde_json::from_value(serde_json::json!({
        "_id": "r1",
        "comments": [{
            "_id": "c1",
            "user_id": null,
            "content": null,
            "rating": null,
            "created_at": null
        }]
    }))
    .unwrap();
    let comment = &room.comments[0];
    assert_eq!(comment.user_id.display_name(), "Ẩn danh");
    assert_eq!(comment.content, "");
    assert_eq!(comment.rating, 0);
    assert_eq!(comment.created_at, "");
}

#[test]
fn comment_author_null_username_is_anonymous() {
    let author: CommentAuthor = serde_json::from_value(serde_json::json!({ "_id": "u1", "username": null })).unwrap();
    assert_eq!(author.display_name(), "Ẩn danh");
}

#[test]
fn comment_author_blank_username_is_anonymous() {
    let author = CommentAuthor::Populated { id: "u1".to_owned(), username: "  ".to_owned() };
    assert_eq!(author.display_name(), "Ẩn danh");
}

#[test]
fn comment_missing_author_defaults_to_empty_reference() {
    let comment: Comment = serde_json::from_value(serde_json::json!({ "content": "hi" })).unwrap();
    assert_eq!(comment.user_id, CommentAuthor::default());
    assert_eq!(comment.rating, 0);
}

// =============================================================
// Profile
// =============================================================

#[test]
fn profile_reads_camel_case_avatar_and_admin_flag() {
    let profile: Profile = serde_json::from_value(serde_json::json!({
        "_id": "u1",
        "username": "lan",
        "admin": true,
        "avatarUrl": "https://example.com/a.png"
    }))
    .unwrap();
    assert!(profile.admin);
    assert_eq!(profile.avatar_url.as_deref(), Some("https://example.com/a.png"));
}

#[test]
fn profile_admin_defaults_to_false() {
    let profile: Profile = serde_json::from_value(serde_json::json!({ "username": "lan" })).unwrap();
    assert!(!profile.admin);
    assert!(profile.avatar_url.is_none());
}

#[test]
fn new_comment_serializes_content_and_rating() {
    let body = NewComment { content: "Tốt".to_owned(), rating: 5 };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({ "content": "Tốt", "rating": 5 })
    );
}
