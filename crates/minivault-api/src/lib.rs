#![doc = include_str!("../README.md")]

pub mod apis;
pub mod models;

pub use apis::{ApiClient, Error, ResponseContent, configuration::Configuration};
