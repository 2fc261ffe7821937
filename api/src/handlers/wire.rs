//! Shared wire-format pieces for handler DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Publication, PublicationSettings, Timestamps};

/// `yyyy-MM-ddTHH:mm:ss.SSSSSS`, no offset
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.format(TIMESTAMP_FORMAT).to_string()
}

/// Publish flags accepted on create and update; missing flags are off
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct PublicationRequest {
    pub is_published: bool,
    pub show_on_homepage: bool,
    pub display_order: i32,
}

impl From<PublicationRequest> for PublicationSettings {
    fn from(req: PublicationRequest) -> Self {
        PublicationSettings {
            is_published: req.is_published,
            show_on_homepage: req.show_on_homepage,
            display_order: req.display_order,
        }
    }
}

/// Publish state and audit timestamps, flattened into content responses
#[derive(Debug, Serialize)]
pub struct RecordStateResponse {
    pub is_published: bool,
    pub show_on_homepage: bool,
    pub display_order: i32,
    pub published_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl RecordStateResponse {
    pub fn new(publication: &Publication, timestamps: &Timestamps) -> Self {
        Self {
            is_published: publication.is_published,
            show_on_homepage: publication.show_on_homepage,
            display_order: publication.display_order,
            published_at: publication.published_at.as_ref().map(format_timestamp),
            created_at: format_timestamp(&timestamps.created_at),
            updated_at: format_timestamp(&timestamps.updated_at),
        }
    }
}
