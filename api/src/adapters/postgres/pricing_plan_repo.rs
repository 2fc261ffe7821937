//! PostgreSQL adapter for PricingPlanRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use crate::domain::entities::{NewPricingPlan, PricingPlan, PricingPlanId};
use crate::domain::ports::PricingPlanRepository;
use crate::entity::pricing_plans;
use crate::error::DomainError;

/// PostgreSQL implementation of PricingPlanRepository
pub struct PostgresPricingPlanRepository {
    db: DatabaseConnection,
}

impl PostgresPricingPlanRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PricingPlanRepository for PostgresPricingPlanRepository {
    async fn list(&self) -> Result<Vec<PricingPlan>, DomainError> {
        let results = pricing_plans::Entity::find()
            .order_by_asc(pricing_plans::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }

    async fn find_by_id(&self, id: PricingPlanId) -> Result<Option<PricingPlan>, DomainError> {
        let result = pricing_plans::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn create(&self, plan: &NewPricingPlan) -> Result<PricingPlan, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = pricing_plans::ActiveModel {
            name: Set(plan.name.clone()),
            original_price: Set(plan.original_price),
            discount_percent: Set(plan.discount_percent),
            final_price: Set(plan.final_price),
            description: Set(plan.description.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.into())
    }

    async fn update(&self, plan: &PricingPlan) -> Result<PricingPlan, DomainError> {
        let result = pricing_plans::ActiveModel {
            id: Set(plan.id.0),
            name: Set(plan.name.clone()),
            original_price: Set(plan.original_price),
            discount_percent: Set(plan.discount_percent),
            final_price: Set(plan.final_price),
            description: Set(plan.description.clone()),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => {
                DomainError::NotFound(format!("Pricing plan {}", plan.id))
            }
            e => DomainError::Database(e.to_string()),
        })?;

        Ok(result.into())
    }

    async fn delete(&self, id: PricingPlanId) -> Result<bool, DomainError> {
        let result = pricing_plans::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}

impl From<pricing_plans::Model> for PricingPlan {
    fn from(model: pricing_plans::Model) -> Self {
        PricingPlan {
            id: PricingPlanId(model.id),
            name: model.name,
            original_price: model.original_price,
            discount_percent: model.discount_percent,
            final_price: model.final_price,
            description: model.description,
        }
    }
}
