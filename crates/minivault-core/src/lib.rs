#![doc = include_str!("../README.md")]

pub mod auth;
mod client;
mod error;
pub mod generator;
pub mod vault;

pub use client::{
    Client, ClientSettings,
    internal::{ApiConfigurations, InternalClient},
};
pub use error::{ApiError, NotAuthenticatedError};
