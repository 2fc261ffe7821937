//! Article domain entity
//!
//! Blog/news articles shown on the marketing site.

use serde::Serialize;

use super::content::{
    check_length, check_required, ContentId, MarketingContent, Publication, PublicationSettings,
    Timestamps,
};
use crate::domain::ValidationErrors;

#[derive(Debug, Clone, Serialize)]
pub struct Article {
    pub id: ContentId,
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    /// Estimated reading time in minutes
    pub reading_time: Option<i32>,
    /// Frontend component that renders the article on the homepage
    pub home_component_id: Option<String>,
    pub publication: Publication,
    #[serde(skip)]
    pub timestamps: Timestamps,
}

#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
    pub author: Option<String>,
    pub reading_time: Option<i32>,
    pub home_component_id: Option<String>,
    pub publication: PublicationSettings,
}

impl MarketingContent for Article {
    type Draft = ArticleDraft;

    const KIND: &'static str = "article";

    fn id(&self) -> ContentId {
        self.id
    }

    fn publication(&self) -> &Publication {
        &self.publication
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn draft_settings(draft: &ArticleDraft) -> PublicationSettings {
        draft.publication
    }

    fn validate_draft(draft: &ArticleDraft) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_required(&mut errors, "title", &draft.title);
        for (field, value) in [
            ("image_url", &draft.image_url),
            ("author", &draft.author),
            ("home_component_id", &draft.home_component_id),
        ] {
            if let Some(value) = value {
                check_length(&mut errors, field, value);
            }
        }
        if matches!(draft.reading_time, Some(minutes) if minutes < 0) {
            errors.add("reading_time", "reading time cannot be negative");
        }

        errors.into_result()
    }

    fn from_parts(
        id: ContentId,
        draft: ArticleDraft,
        publication: Publication,
        timestamps: Timestamps,
    ) -> Self {
        Article {
            id,
            title: draft.title,
            content: draft.content,
            image_url: draft.image_url,
            author: draft.author,
            reading_time: draft.reading_time,
            home_component_id: draft.home_component_id,
            publication,
            timestamps,
        }
    }
}
