//! PostgreSQL adapter for team member content

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use super::publication::{publication_from_columns, published_at_column, timestamps_from_columns};
use crate::domain::entities::{ContentId, Publication, TeamMember, TeamMemberDraft};
use crate::domain::ports::ContentRepository;
use crate::entity::team_members;
use crate::error::DomainError;

/// PostgreSQL implementation of ContentRepository<TeamMember>
pub struct PostgresTeamRepository {
    db: DatabaseConnection,
}

impl PostgresTeamRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(draft: &TeamMemberDraft, publication: &Publication) -> team_members::ActiveModel {
    team_members::ActiveModel {
        first_name: Set(draft.first_name.trim().to_string()),
        last_name: Set(draft.last_name.trim().to_string()),
        site_role: Set(draft.site_role.clone()),
        system_role: Set(draft.system_role.clone()),
        avatar_url: Set(draft.avatar_url.clone()),
        is_published: Set(publication.is_published),
        published_at: Set(published_at_column(publication)),
        show_on_homepage: Set(publication.show_on_homepage),
        display_order: Set(publication.display_order),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

#[async_trait]
impl ContentRepository<TeamMember> for PostgresTeamRepository {
    async fn list(&self) -> Result<Vec<TeamMember>, DomainError> {
        let results = team_members::Entity::find()
            .order_by_asc(team_members::Column::DisplayOrder)
            .order_by_asc(team_members::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<TeamMember>, DomainError> {
        let result = team_members::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(
        &self,
        draft: &TeamMemberDraft,
        publication: &Publication,
    ) -> Result<TeamMember, DomainError> {
        let mut model = active_model(draft, publication);
        model.created_at = Set(Utc::now().fixed_offset());

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(
        &self,
        id: ContentId,
        draft: &TeamMemberDraft,
        publication: &Publication,
    ) -> Result<Option<TeamMember>, DomainError> {
        let mut model = active_model(draft, publication);
        model.id = Set(id.0);

        match model.update(&self.db).await {
            Ok(result) => Ok(Some(result.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn delete(&self, id: ContentId) -> Result<bool, DomainError> {
        let result = team_members::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

impl From<team_members::Model> for TeamMember {
    fn from(model: team_members::Model) -> Self {
        TeamMember {
            id: ContentId(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            site_role: model.site_role,
            system_role: model.system_role,
            avatar_url: model.avatar_url,
            publication: publication_from_columns(
                model.is_published,
                model.published_at,
                model.show_on_homepage,
                model.display_order,
            ),
            timestamps: timestamps_from_columns(model.created_at, model.updated_at),
        }
    }
}
