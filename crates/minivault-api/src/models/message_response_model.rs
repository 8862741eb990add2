use serde::{Deserialize, Serialize};

/// Generic `{"message": ...}` response returned by most write endpoints.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponseModel {
    #[allow(missing_docs)]
    pub message: String,
}
