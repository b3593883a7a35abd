//! Session handling for the member-management client
//!
//! This module provides:
//! - Bearer token persistence
//! - Token claims decoding (roles, subject)
//! - Role-based page guards

pub mod claims;
pub mod guard;
pub mod session;

pub use claims::{Claims, ROLE_ADMIN, ROLE_USER, decode_claims};
pub use guard::{ADMIN_DASHBOARD_PATH, USER_DASHBOARD_PATH, dashboard_for};
pub use session::SessionStore;
