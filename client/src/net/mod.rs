//! Networking modules for the rental REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the preconfigured HTTP client and `types` defines the typed,
//! normalized wire schema for rooms, images, addresses and comments.

pub mod api;
pub mod types;
