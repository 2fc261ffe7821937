//! Authentication
//!
//! Session cookies and the admin route guard.

pub mod admin;
pub mod cookies;

pub use admin::require_admin;
pub use cookies::session_cookies;
