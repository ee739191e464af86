//! HTTP client for the Tourify API and a headless tour-builder session.
//!
//! [`api::ApiClient`] wraps the REST endpoints. [`session::BuilderSession`]
//! couples it with the core [`TourBuilder`](tourify_core::tour_builder::TourBuilder)
//! state so hotspot edits and scene changes are persisted the same way the
//! web builder persists them.

pub mod api;
pub mod error;
pub mod session;
