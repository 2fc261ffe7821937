//! Review domain entity
//!
//! Testimonials from candidates and employers.

use serde::Serialize;

use super::content::{
    check_length, check_required, ContentId, MarketingContent, Publication, PublicationSettings,
    Timestamps,
};
use crate::domain::ValidationErrors;

#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: ContentId,
    pub author: String,
    pub content: String,
    pub avatar_url: Option<String>,
    pub publication: Publication,
    #[serde(skip)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub author: String,
    pub content: String,
    pub avatar_url: Option<String>,
    pub publication: PublicationSettings,
}

impl MarketingContent for Review {
    type Draft = ReviewDraft;

    const KIND: &'static str = "review";

    fn id(&self) -> ContentId {
        self.id
    }

    fn publication(&self) -> &Publication {
        &self.publication
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn draft_settings(draft: &ReviewDraft) -> PublicationSettings {
        draft.publication
    }

    fn validate_draft(draft: &ReviewDraft) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_required(&mut errors, "author", &draft.author);
        if draft.content.trim().is_empty() {
            errors.add("content", "content is required");
        }
        if let Some(url) = &draft.avatar_url {
            check_length(&mut errors, "avatar_url", url);
        }

        errors.into_result()
    }

    fn from_parts(
        id: ContentId,
        draft: ReviewDraft,
        publication: Publication,
        timestamps: Timestamps,
    ) -> Self {
        Review {
            id,
            author: draft.author,
            content: draft.content,
            avatar_url: draft.avatar_url,
            publication,
            timestamps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn author_and_content_are_required() {
        let errors = Review::validate_draft(&ReviewDraft::default()).unwrap_err();
        assert_eq!(errors.get("author"), Some("author is required"));
        assert_eq!(errors.get("content"), Some("content is required"));
    }

    #[test]
    fn long_content_is_allowed() {
        let draft = ReviewDraft {
            author: "Maria".to_string(),
            content: "great ".repeat(500),
            ..Default::default()
        };
        assert!(Review::validate_draft(&draft).is_ok());
    }
}
