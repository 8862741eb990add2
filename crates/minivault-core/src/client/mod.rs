//! The core [Client] type, its settings and internal state.

#[allow(clippy::module_inception)]
mod client;
mod client_settings;
pub(crate) mod internal;

pub use client::Client;
pub use client_settings::ClientSettings;
