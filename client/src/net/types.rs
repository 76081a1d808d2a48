//! Typed REST DTOs for the rental backend.
//!
//! DESIGN
//! ======
//! The backend is a document store that omits or nulls nested collections
//! freely. Normalization happens here, at the boundary: missing or `null`
//! fields read as their defaults (empty strings and vectors, `false`, 0),
//! numeric fields accept any JSON number and round it, and a comment author
//! may arrive populated, as a bare reference id, or as `null` once the user
//! is gone. Views never see an absent collection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A rentable room aggregate as returned by `/rooms/all` and `/rooms/{id}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Backend document identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub name: String,
    /// Monthly price in VND.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub price: i64,
    /// `true` while the room is still available.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub status: bool,
    /// Units of this room type still available.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub room_quantity: i64,
    /// Free-text room category.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub room_type: String,
    /// Free-text description.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub address: Vec<Address>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub images: Vec<Image>,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub comments: Vec<Comment>,
}

impl Room {
    /// Whether the room can still be rented (`room_quantity > 0`).
    pub fn has_stock(&self) -> bool {
        self.room_quantity > 0
    }

    /// First address record, used by the map renderer.
    pub fn primary_address(&self) -> Option<&Address> {
        self.address.first()
    }
}

/// A room image. `is_default` selects primary gallery placement.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub url: String,
    #[serde(rename = "default", default, deserialize_with = "deserialize_null_as_default")]
    pub is_default: bool,
}

/// A postal address. Fields are free text and never normalized client-side.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub detail: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub ward: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub district: String,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub city: String,
}

impl Address {
    /// `"detail, ward, district, city"`.
    pub fn one_line(&self) -> String {
        format!("{}, {}, {}, {}", self.detail, self.ward, self.district, self.city)
    }
}

/// A user comment attached to a room.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_null_as_default")]
    pub id: String,
    /// Author reference; populated by the backend on room reads.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub user_id: CommentAuthor,
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub content: String,
    /// Star rating. Not validated here; rendering clamps it to `0..=5`.
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub rating: i64,
    /// Creation timestamp, RFC 3339 as sent by the backend.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub created_at: String,
}

/// Comment author as either a populated user document or a bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommentAuthor {
    Populated {
        #[serde(rename = "_id", default, deserialize_with = "deserialize_null_as_default")]
        id: String,
        #[serde(default, deserialize_with = "deserialize_null_as_default")]
        username: String,
    },
    Reference(String),
}

impl Default for CommentAuthor {
    fn default() -> Self {
        Self::Reference(String::new())
    }
}

impl CommentAuthor {
    /// Label shown next to the comment.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Populated { username, .. } if !username.trim().is_empty() => username,
            _ => "Ẩn danh",
        }
    }
}

/// Current session's user profile as persisted by the login flow.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// Gates the dashboard link.
    #[serde(default, deserialize_with = "deserialize_null_as_default")]
    pub admin: bool,
    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
}

/// Body for `POST /rooms/{id}/comments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    pub rating: i64,
}

/// Decode a `/rooms/all` payload room by room. Entries that still fail to
/// decode are dropped so one malformed document cannot hide the rest.
pub fn rooms_from_values(values: Vec<serde_json::Value>) -> Vec<Room> {
    values
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

fn deserialize_null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integer fields: `null` reads as 0 and fractional values round to the
/// nearest integer.
fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(0),
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64().map(f64::round)
                && float.is_finite()
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}
