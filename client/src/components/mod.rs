//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the navigation chrome, room cards and the detail-page
//! sections while reading/writing shared state from Leptos context providers.

pub mod comment_form;
pub mod comment_list;
pub mod icon;
pub mod image_gallery;
pub mod navbar;
pub mod room_card;
pub mod room_map;
pub mod toast_host;
