//! Domain types and pure logic shared by the store, the API server and the
//! builder client.

pub mod error;
pub mod marker;
pub mod tour_builder;
pub mod types;
