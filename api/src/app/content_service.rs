//! Marketing content service
//!
//! One generic service drives articles, reviews and team members.

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{ContentId, MarketingContent, Publication};
use crate::domain::ports::ContentRepository;
use crate::error::{AppError, DomainError};

/// Service for managing one kind of marketing content
pub struct ContentService<C, R: ?Sized> {
    items: Arc<R>,
    _content: PhantomData<fn() -> C>,
}

impl<C, R> ContentService<C, R>
where
    C: MarketingContent,
    R: ContentRepository<C> + ?Sized,
{
    pub fn new(items: Arc<R>) -> Self {
        Self {
            items,
            _content: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<C>, AppError> {
        Ok(self.items.list().await?)
    }

    /// Published records flagged for the homepage, by display order then id
    pub async fn list_homepage(&self) -> Result<Vec<C>, AppError> {
        let mut featured: Vec<C> = self
            .items
            .list()
            .await?
            .into_iter()
            .filter(|item| item.publication().is_featured())
            .collect();
        featured.sort_by_key(|item| (item.publication().display_order, item.id()));
        Ok(featured)
    }

    pub async fn get(&self, id: ContentId) -> Result<C, AppError> {
        self.items
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found::<C>(id))
    }

    pub async fn create(&self, draft: C::Draft) -> Result<C, AppError> {
        C::validate_draft(&draft).map_err(AppError::Validation)?;

        let publication = Publication::initial(C::draft_settings(&draft), Utc::now());
        let item = self.items.create(&draft, &publication).await?;

        tracing::info!(kind = C::KIND, id = %item.id(), "Content created");
        Ok(item)
    }

    /// Replace the editable fields and move the publish state forward
    pub async fn update(&self, id: ContentId, draft: C::Draft) -> Result<C, AppError> {
        C::validate_draft(&draft).map_err(AppError::Validation)?;

        let existing = self.get(id).await?;
        let publication = existing
            .publication()
            .transition(C::draft_settings(&draft), Utc::now());

        let item = self
            .items
            .update(id, &draft, &publication)
            .await?
            .ok_or_else(|| not_found::<C>(id))?;

        tracing::info!(kind = C::KIND, id = %id, "Content updated");
        Ok(item)
    }

    pub async fn delete(&self, id: ContentId) -> Result<(), AppError> {
        if !self.items.delete(id).await? {
            return Err(not_found::<C>(id));
        }
        tracing::info!(kind = C::KIND, id = %id, "Content deleted");
        Ok(())
    }
}

fn not_found<C: MarketingContent>(id: ContentId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("{} {}", C::KIND, id)))
}
