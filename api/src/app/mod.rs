//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod content_service;
pub mod pricing_service;
pub mod registration_service;

pub use content_service::ContentService;
pub use pricing_service::PricingPlanService;
pub use registration_service::RegistrationService;
