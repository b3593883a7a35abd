//! Common reusable UI components

pub mod message;
pub mod modal;

pub use message::{StatusMessage, failure_text, status_class};
pub use modal::{BaseModal, ConfirmModal, open_confirm};
