use serde::{Deserialize, Serialize};

/// Body of `POST /api/passwords` and `PUT /api/passwords/{id}`.
///
/// The password is sent in the clear; the server encrypts it with the user's
/// key before storing it.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordEntryRequestModel {
    /// Site or service the credentials belong to.
    pub account: String,
    /// Username at that site.
    pub username: String,
    /// Plaintext password for the account.
    pub password: String,
}
