//! PostgreSQL adapters
//!
//! Implementations of repository traits using SeaORM and PostgreSQL.

pub mod article_repo;
pub mod pricing_plan_repo;
mod publication;
pub mod review_repo;
pub mod team_repo;
pub mod user_repo;


pub use article_repo::PostgresArticleRepository;
pub use pricing_plan_repo::PostgresPricingPlanRepository;
pub use review_repo::PostgresReviewRepository;
pub use team_repo::PostgresTeamRepository;
pub use user_repo::PostgresUserRepository;
