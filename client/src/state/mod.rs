//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `search`, `toast`, per-view room
//! state) so individual components can depend on small focused models.
//! App-wide models are provided as `RwSignal` contexts by the root component.

pub mod room_detail;
pub mod rooms;
pub mod search;
pub mod session;
pub mod toast;
