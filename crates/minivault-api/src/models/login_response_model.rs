use serde::{Deserialize, Serialize};

/// Successful response of `POST /api/login`.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponseModel {
    /// Bearer token to be attached to authenticated requests.
    pub token: String,
    /// Username the token was issued for.
    pub username: String,
}
