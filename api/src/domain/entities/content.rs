//! Shared shape of marketing content
//!
//! Articles, reviews and team members are plain mutable records with the same
//! publish-state flags. `ContentService` handles all three through the
//! `MarketingContent` trait.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ValidationErrors;

/// Maximum length of short text columns (titles, names, urls)
pub const SHORT_TEXT_MAX_LEN: usize = 255;

/// Unique identifier for a marketing content record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContentId(pub i64);

impl From<i64> for ContentId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ContentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Publish flags as submitted by an editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PublicationSettings {
    pub is_published: bool,
    pub show_on_homepage: bool,
    pub display_order: i32,
}

/// Publish state of a stored record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Publication {
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub show_on_homepage: bool,
    pub display_order: i32,
}

impl Publication {
    /// Publish state of a freshly created record
    pub fn initial(settings: PublicationSettings, now: DateTime<Utc>) -> Self {
        Self::default().transition(settings, now)
    }

    /// Next publish state after an edit.
    ///
    /// `published_at` is stamped when a record becomes published, kept while
    /// it stays published and cleared when it is unpublished.
    pub fn transition(&self, settings: PublicationSettings, now: DateTime<Utc>) -> Self {
        let published_at = match (self.is_published, settings.is_published) {
            (false, true) => Some(now),
            (true, true) => self.published_at.or(Some(now)),
            (_, false) => None,
        };

        Self {
            is_published: settings.is_published,
            published_at,
            show_on_homepage: settings.show_on_homepage,
            display_order: settings.display_order,
        }
    }

    /// Whether the record belongs on the public homepage
    pub fn is_featured(&self) -> bool {
        self.is_published && self.show_on_homepage
    }
}

/// Audit timestamps maintained by the persistence adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Timestamps {
    pub fn now() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
        }
    }
}

/// A marketing content record type
pub trait MarketingContent: std::fmt::Debug + Clone + Send + Sync + 'static {
    /// Editable fields, used for both create and update
    type Draft: std::fmt::Debug + Clone + Send + Sync + 'static;

    /// Human-readable kind, used in messages and logs
    const KIND: &'static str;

    fn id(&self) -> ContentId;

    fn publication(&self) -> &Publication;

    fn timestamps(&self) -> &Timestamps;

    fn draft_settings(draft: &Self::Draft) -> PublicationSettings;

    fn validate_draft(draft: &Self::Draft) -> Result<(), ValidationErrors>;

    /// Assemble a stored record from its parts
    fn from_parts(
        id: ContentId,
        draft: Self::Draft,
        publication: Publication,
        timestamps: Timestamps,
    ) -> Self;
}

/// Require a non-blank short text field
pub(crate) fn check_required(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, format!("{} is required", field.replace('_', " ")));
    } else {
        check_length(errors, field, value);
    }
}

/// Limit an optional short text field
pub(crate) fn check_length(errors: &mut ValidationErrors, field: &str, value: &str) {
    if value.chars().count() > SHORT_TEXT_MAX_LEN {
        errors.add(
            field,
            format!(
                "{} must be at most {} characters",
                field.replace('_', " "),
                SHORT_TEXT_MAX_LEN
            ),
        );
    }
}
