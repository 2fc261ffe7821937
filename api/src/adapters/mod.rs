//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod auth;
pub mod email;
pub mod postgres;

pub use auth::{Argon2PasswordHasher, JwtTokenIssuer};
pub use email::{DohDomainResolver, StaticDisposableEmailList};
pub use postgres::{
    PostgresArticleRepository, PostgresPricingPlanRepository, PostgresReviewRepository,
    PostgresTeamRepository, PostgresUserRepository,
};
