//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod content;
pub mod pricing;
pub mod registration;
pub mod wire;


pub use content::{
    create_content, delete_content, get_content, homepage, list_content, update_content,
};
pub use pricing::{create_plan, delete_plan, get_plan, list_plans, update_plan};
pub use registration::register_user;
