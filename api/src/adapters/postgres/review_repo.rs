//! PostgreSQL adapter for review content

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use super::publication::{publication_from_columns, published_at_column, timestamps_from_columns};
use crate::domain::entities::{ContentId, Publication, Review, ReviewDraft};
use crate::domain::ports::ContentRepository;
use crate::entity::reviews;
use crate::error::DomainError;

/// PostgreSQL implementation of ContentRepository<Review>
pub struct PostgresReviewRepository {
    db: DatabaseConnection,
}

impl PostgresReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(draft: &ReviewDraft, publication: &Publication) -> reviews::ActiveModel {
    reviews::ActiveModel {
        author: Set(draft.author.trim().to_string()),
        content: Set(draft.content.clone()),
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
impl ContentRepository<Review> for PostgresReviewRepository {
    async fn list(&self) -> Result<Vec<Review>, DomainError> {
        let results = reviews::Entity::find()
            .order_by_asc(reviews::Column::DisplayOrder)
            .order_by_asc(reviews::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<Review>, DomainError> {
        let result = reviews::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(
        &self,
        draft: &ReviewDraft,
        publication: &Publication,
    ) -> Result<Review, DomainError> {
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
        draft: &ReviewDraft,
        publication: &Publication,
    ) -> Result<Option<Review>, DomainError> {
        let mut model = active_model(draft, publication);
        model.id = Set(id.0);

        match model.update(&self.db).await {
            Ok(result) => Ok(Some(result.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn delete(&self, id: ContentId) -> Result<bool, DomainError> {
        let result = reviews::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

impl From<reviews::Model> for Review {
    fn from(model: reviews::Model) -> Self {
        Review {
            id: ContentId(model.id),
            author: model.author,
            content: model.content,
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
