//! Column helpers shared by the marketing content repositories

use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;

use crate::domain::entities::{Publication, Timestamps};

pub(super) fn publication_from_columns(
    is_published: bool,
    published_at: Option<DateTimeWithTimeZone>,
    show_on_homepage: bool,
    display_order: i32,
) -> Publication {
    Publication {
        is_published,
        published_at: published_at.map(|dt| dt.with_timezone(&Utc)),
        show_on_homepage,
        display_order,
    }
}

pub(super) fn timestamps_from_columns(
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
) -> Timestamps {
    Timestamps {
        created_at: created_at.with_timezone(&Utc),
        updated_at: updated_at.with_timezone(&Utc),
    }
}

pub(super) fn published_at_column(publication: &Publication) -> Option<DateTimeWithTimeZone> {
    publication.published_at.map(|dt| dt.fixed_offset())
}
