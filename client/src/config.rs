//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle talks to one fixed REST origin. The origin can be
//! swapped at compile time with `HOMIFY_API_BASE_URL`; everything else here is
//! a constant shared by views (storage keys, placeholder assets, contact info).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// REST origin used when no override is compiled in.
pub const DEFAULT_API_BASE_URL: &str = "https://backendtest-5r9m.onrender.com/";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// `localStorage` key holding the JSON-encoded session profile.
pub const PROFILE_STORAGE_KEY: &str = "profile";

/// Shown in gallery slots that have no image.
pub const NO_IMAGE_URL: &str = "/no-image.png";

/// Shown in the navbar when the profile carries no avatar.
pub const DEFAULT_AVATAR_URL: &str = "/default-avatar.png";

/// Phone number rendered on the room detail contact button.
pub const CONTACT_PHONE: &str = "0343690062";

/// Resolve the REST origin, preferring the compile-time override.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("HOMIFY_API_BASE_URL"))
}

fn resolve_base_url(override_value: Option<&'static str>) -> &'static str {
    match override_value.map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_API_BASE_URL,
    }
}
