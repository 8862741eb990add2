//! Request and response models for the minivault server API.

pub mod login_request_model;
pub mod login_response_model;
pub mod message_response_model;
pub mod password_entry_request_model;
pub mod password_entry_response_model;
pub mod register_request_model;

pub use login_request_model::LoginRequestModel;
pub use login_response_model::LoginResponseModel;
pub use message_response_model::MessageResponseModel;
pub use password_entry_request_model::PasswordEntryRequestModel;
pub use password_entry_response_model::PasswordEntryResponseModel;
pub use register_request_model::RegisterRequestModel;
