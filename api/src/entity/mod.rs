//! SeaORM entities
//!
//! Table models mirroring `migrations/0001_init.sql`. Repositories in
//! `adapters::postgres` convert these into domain entities.

pub mod articles;
pub mod pricing_plans;
pub mod reviews;
pub mod team_members;
pub mod users;
