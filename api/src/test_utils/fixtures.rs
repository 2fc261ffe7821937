//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::Utc;

use crate::domain::entities::{
    ArticleDraft, PricingPlan, PricingPlanId, RegistrationRequest, ReviewDraft, Role,
    TeamMemberDraft, User, UserId,
};

/// Create a test candidate
pub fn test_user() -> User {
    User {
        id: UserId(1),
        email: "candidate@example.com".to_string(),
        encrypted_password: "hashed:candidate-password".to_string(),
        first_name: "Test".to_string(),
        last_name: "Candidate".to_string(),
        role: Role::Candidate,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Create a test admin
pub fn test_admin() -> User {
    User {
        id: UserId(2),
        email: "admin@example.com".to_string(),
        first_name: "Test".to_string(),
        last_name: "Admin".to_string(),
        role: Role::Admin,
        ..test_user()
    }
}

/// Create a test plan: 150 at 20% off
pub fn test_plan() -> PricingPlan {
    PricingPlan {
        id: PricingPlanId(1),
        name: "Pro".to_string(),
        original_price: 150.0,
        discount_percent: 20.0,
        final_price: Some(120.0),
        description: "For active job seekers".to_string(),
    }
}

/// A registration that passes every rule
pub fn valid_registration() -> RegistrationRequest {
    RegistrationRequest {
        email: "new.user@example.com".to_string(),
        password: "correct horse battery".to_string(),
        first_name: "New".to_string(),
        last_name: "User".to_string(),
    }
}

pub fn article_draft(title: &str) -> ArticleDraft {
    ArticleDraft {
        title: title.to_string(),
        content: Some("Body".to_string()),
        reading_time: Some(4),
        ..Default::default()
    }
}

pub fn review_draft(author: &str) -> ReviewDraft {
    ReviewDraft {
        author: author.to_string(),
        content: "Found a job in two weeks".to_string(),
        ..Default::default()
    }
}

pub fn team_member_draft(first_name: &str, last_name: &str) -> TeamMemberDraft {
    TeamMemberDraft {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        site_role: Some("Career coach".to_string()),
        ..Default::default()
    }
}
