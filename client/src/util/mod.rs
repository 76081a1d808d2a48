//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and display rules
//! from page and component logic to improve reuse and testability.

pub mod format;
pub mod gallery;
pub mod rating;
pub mod storage;
