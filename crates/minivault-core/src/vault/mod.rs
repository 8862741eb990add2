//! Password entry management.

mod create;
mod delete;
mod edit;
mod list;
mod password_entry;
mod vault_client;

pub use create::CreatePasswordError;
pub use delete::DeletePasswordError;
pub use edit::EditPasswordError;
pub use list::ListPasswordsError;
pub use password_entry::{PasswordEntryAddEditRequest, PasswordEntryView};
pub use vault_client::VaultClient;
