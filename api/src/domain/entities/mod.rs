//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod article;
pub mod content;
pub mod pricing_plan;
pub mod review;
pub mod team_member;
pub mod user;

pub use article::{Article, ArticleDraft};
pub use content::{
    ContentId, MarketingContent, Publication, PublicationSettings, Timestamps,
};
pub use pricing_plan::{NewPricingPlan, PricingPlan, PricingPlanId, PricingPlanInput};
pub use review::{Review, ReviewDraft};
pub use team_member::{TeamMember, TeamMemberDraft};
pub use user::{NewUser, RegistrationRequest, Role, User, UserId};
