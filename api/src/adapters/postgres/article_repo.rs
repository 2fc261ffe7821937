//! PostgreSQL adapter for article content

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};

use super::publication::{publication_from_columns, published_at_column, timestamps_from_columns};
use crate::domain::entities::{Article, ArticleDraft, ContentId, Publication};
use crate::domain::ports::ContentRepository;
use crate::entity::articles;
use crate::error::DomainError;

/// PostgreSQL implementation of ContentRepository<Article>
pub struct PostgresArticleRepository {
    db: DatabaseConnection,
}

impl PostgresArticleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(draft: &ArticleDraft, publication: &Publication) -> articles::ActiveModel {
    articles::ActiveModel {
        title: Set(draft.title.trim().to_string()),
        content: Set(draft.content.clone()),
        image_url: Set(draft.image_url.clone()),
        author: Set(draft.author.clone()),
        reading_time: Set(draft.reading_time),
        home_component_id: Set(draft.home_component_id.clone()),
        is_published: Set(publication.is_published),
        published_at: Set(published_at_column(publication)),
        show_on_homepage: Set(publication.show_on_homepage),
        display_order: Set(publication.display_order),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    }
}

#[async_trait]
impl ContentRepository<Article> for PostgresArticleRepository {
    async fn list(&self) -> Result<Vec<Article>, DomainError> {
        let results = articles::Entity::find()
            .order_by_asc(articles::Column::DisplayOrder)
            .order_by_asc(articles::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<Article>, DomainError> {
        let result = articles::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(
        &self,
        draft: &ArticleDraft,
        publication: &Publication,
    ) -> Result<Article, DomainError> {
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
        draft: &ArticleDraft,
        publication: &Publication,
    ) -> Result<Option<Article>, DomainError> {
        let mut model = active_model(draft, publication);
        model.id = Set(id.0);

        match model.update(&self.db).await {
            Ok(result) => Ok(Some(result.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(DomainError::Database(e.to_string())),
        }
    }

    async fn delete(&self, id: ContentId) -> Result<bool, DomainError> {
        let result = articles::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

impl From<articles::Model> for Article {
    fn from(model: articles::Model) -> Self {
        Article {
            id: ContentId(model.id),
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            author: model.author,
            reading_time: model.reading_time,
            home_component_id: model.home_component_id,
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
