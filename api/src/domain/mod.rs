//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `ports`: Trait definitions for external dependencies
//! - `pricing`: Final-price derivation for pricing plans
//! - `registration`: Registration rule pipeline
//! - `validation`: Field-keyed validation error map

pub mod entities;
pub mod ports;
pub mod pricing;
pub mod registration;
pub mod validation;

pub use validation::ValidationErrors;
