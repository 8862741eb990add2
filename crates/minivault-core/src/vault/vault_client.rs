use std::sync::Arc;

use super::{
    create::{CreatePasswordError, create_password},
    delete::{DeletePasswordError, delete_password},
    edit::{EditPasswordError, edit_password},
    list::{ListPasswordsError, list_passwords},
    password_entry::{PasswordEntryAddEditRequest, PasswordEntryView},
};
use crate::{ApiConfigurations, Client, NotAuthenticatedError};

/// Password entry operations. All of them require a prior login.
pub struct VaultClient {
    pub(crate) client: Client,
}

impl VaultClient {
    /// Fetch all password entries belonging to the logged-in user.
    pub async fn list(&self) -> Result<Vec<PasswordEntryView>, ListPasswordsError> {
        list_passwords(&self.configurations()?.api_client).await
    }

    /// Store a new password entry.
    pub async fn create(
        &self,
        request: &PasswordEntryAddEditRequest,
    ) -> Result<(), CreatePasswordError> {
        create_password(&self.configurations()?.api_client, request).await
    }

    /// Replace an existing password entry.
    pub async fn edit(
        &self,
        id: i32,
        request: &PasswordEntryAddEditRequest,
    ) -> Result<(), EditPasswordError> {
        edit_password(&self.configurations()?.api_client, id, request).await
    }

    /// Delete a password entry.
    pub async fn delete(&self, id: i32) -> Result<(), DeletePasswordError> {
        delete_password(&self.configurations()?.api_client, id).await
    }

    fn configurations(&self) -> Result<Arc<ApiConfigurations>, NotAuthenticatedError> {
        if !self.client.internal.is_authenticated() {
            return Err(NotAuthenticatedError);
        }
        Ok(self.client.internal.get_api_configurations())
    }
}

impl Client {
    /// Access to password entry functionality.
    pub fn vault(&self) -> VaultClient {
        VaultClient {
            client: self.clone(),
        }
    }
}
