//! Local password generation and strength checking.

mod generator_client;
mod password;
mod strength;

pub use generator_client::GeneratorClient;
pub use password::PasswordGeneratorRequest;
pub use strength::PasswordStrength;
