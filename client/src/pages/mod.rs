//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and view state and delegates
//! rendering details to `components`.

pub mod login;
pub mod room_detail;
pub mod room_list;
