use serde::{Deserialize, Serialize};

/// One element of the `GET /api/passwords` response.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordEntryResponseModel {
    /// Server-assigned entry id.
    pub id: i32,
    /// Site or service the credentials belong to.
    pub account: String,
    /// Username at that site.
    pub username: String,
    /// Password as stored by the server. Opaque to the client.
    pub encrypted_password: String,
}
