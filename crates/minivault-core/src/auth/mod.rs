//! Account registration and login.

mod auth_client;
mod login;
mod register;

pub use auth_client::AuthClient;
pub use login::{LoginError, LoginRequest, LoginResponse};
pub use register::{RegisterError, RegisterRequest};
