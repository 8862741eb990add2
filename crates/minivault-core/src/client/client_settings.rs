use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Basic client behavior settings. These specify the target server and how the
/// client identifies itself. They are optional and uneditable once the client
/// is initialized.
///
/// Defaults to
///
/// ```
/// # use minivault_core::ClientSettings;
/// let settings = ClientSettings {
///     api_url: "http://localhost:5000".to_string(),
///     user_agent: "Minivault Rust-SDK".to_string(),
/// };
/// let default = ClientSettings::default();
/// ```
#[derive(Serialize, Deserialize, Debug, JsonSchema)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientSettings {
    /// The url of the targeted minivault server, without the `/api` prefix.
    /// Defaults to `http://localhost:5000`
    pub api_url: String,
    /// The user_agent to send to the server. Defaults to `Minivault Rust-SDK`
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:5000".into(),
            user_agent: "Minivault Rust-SDK".into(),
        }
    }
}
