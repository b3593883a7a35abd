pub mod common;
pub mod theme;

pub use common::{BaseModal, ConfirmModal, StatusMessage};
pub use theme::{ThemeContext, ThemeToggle, provide_theme_context, use_theme_context};
