use super::{
    password::{PasswordGeneratorRequest, password},
    strength::{PasswordStrength, check_strength},
};
use crate::Client;

/// Password generation and strength checks. Everything here runs locally,
/// no request is sent to the server.
pub struct GeneratorClient;

impl GeneratorClient {
    /// Generate a random password from the requested character classes.
    pub fn password(&self, input: &PasswordGeneratorRequest) -> String {
        password(input)
    }

    /// Score a password and collect feedback on how to improve it.
    pub fn check_strength(&self, password: &str) -> PasswordStrength {
        check_strength(password)
    }
}

impl Client {
    /// Access to generator functionality.
    pub fn generator(&self) -> GeneratorClient {
        GeneratorClient
    }
}
