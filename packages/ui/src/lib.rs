//! This crate contains all shared UI for the workspace.

pub mod colors;
pub mod components;

mod form;
pub use form::SubmitState;

pub use components::{Button, ButtonVariant, Input, Label};
