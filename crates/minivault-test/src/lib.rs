//! Test helpers for the minivault crates.

mod api;

pub use api::start_api_mock;
