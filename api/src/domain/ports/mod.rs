//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod auth;
pub mod email;
pub mod repositories;

pub use auth::{PasswordHasher, TokenIssuer, TokenPair};
pub use email::{DisposableEmailList, DomainResolver};
pub use repositories::{ContentRepository, PricingPlanRepository, UserRepository};
