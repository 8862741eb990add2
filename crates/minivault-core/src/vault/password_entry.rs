use minivault_api::models::{PasswordEntryRequestModel, PasswordEntryResponseModel};
use serde::{Deserialize, Serialize};

/// A password entry as returned by the server.
///
/// The password itself is stored encrypted server-side with a per-user key;
/// the client only ever sees the ciphertext.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordEntryView {
    /// Server-assigned entry id.
    pub id: i32,
    /// Site or service the credentials belong to.
    pub account: String,
    /// Username at that site.
    pub username: String,
    /// Ciphertext of the stored password. Opaque to the client.
    pub encrypted_password: String,
}

impl From<PasswordEntryResponseModel> for PasswordEntryView {
    fn from(model: PasswordEntryResponseModel) -> Self {
        Self {
            id: model.id,
            account: model.account,
            username: model.username,
            encrypted_password: model.encrypted_password,
        }
    }
}

/// Request to add or edit a password entry.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PasswordEntryAddEditRequest {
    /// Site or service the credentials belong to.
    pub account: String,
    /// Username at that site.
    pub username: String,
    /// Plaintext password. The server encrypts it before storage.
    pub password: String,
}

impl From<&PasswordEntryAddEditRequest> for PasswordEntryRequestModel {
    fn from(request: &PasswordEntryAddEditRequest) -> Self {
        Self {
            account: request.account.clone(),
            username: request.username.clone(),
            password: request.password.clone(),
        }
    }
}
