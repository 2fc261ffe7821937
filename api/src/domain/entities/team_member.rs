//! Team member domain entity

use serde::Serialize;

use super::content::{
    check_length, check_required, ContentId, MarketingContent, Publication, PublicationSettings,
    Timestamps,
};
use crate::domain::ValidationErrors;

#[derive(Debug, Clone, Serialize)]
pub struct TeamMember {
    pub id: ContentId,
    pub first_name: String,
    pub last_name: String,
    /// Role shown on the site, e.g. "Career coach"
    pub site_role: Option<String>,
    /// Internal role, e.g. "mentor"
    pub system_role: Option<String>,
    pub avatar_url: Option<String>,
    pub publication: Publication,
    #[serde(skip)]
    pub timestamps: Timestamps,
}

impl TeamMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TeamMemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub site_role: Option<String>,
    pub system_role: Option<String>,
    pub avatar_url: Option<String>,
    pub publication: PublicationSettings,
}

impl MarketingContent for TeamMember {
    type Draft = TeamMemberDraft;

    const KIND: &'static str = "team member";

    fn id(&self) -> ContentId {
        self.id
    }

    fn publication(&self) -> &Publication {
        &self.publication
    }

    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn draft_settings(draft: &TeamMemberDraft) -> PublicationSettings {
        draft.publication
    }

    fn validate_draft(draft: &TeamMemberDraft) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        check_required(&mut errors, "first_name", &draft.first_name);
        check_required(&mut errors, "last_name", &draft.last_name);
        for (field, value) in [
            ("site_role", &draft.site_role),
            ("system_role", &draft.system_role),
            ("avatar_url", &draft.avatar_url),
        ] {
            if let Some(value) = value {
                check_length(&mut errors, field, value);
            }
        }

        errors.into_result()
    }

    fn from_parts(
        id: ContentId,
        draft: TeamMemberDraft,
        publication: Publication,
        timestamps: Timestamps,
    ) -> Self {
        TeamMember {
            id,
            first_name: draft.first_name,
            last_name: draft.last_name,
            site_role: draft.site_role,
            system_role: draft.system_role,
            avatar_url: draft.avatar_url,
            publication,
            timestamps,
        }
    }
}
