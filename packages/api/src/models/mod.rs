//! Data models for the application.

mod registration;

#[cfg(feature = "server")]
pub use registration::Registration;
pub use registration::{ErrorBody, RegisterRequest, RegisterSuccess, TestConnectionBody};
