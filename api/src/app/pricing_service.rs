//! Pricing plan service
//!
//! The only write path for pricing plans. Every insert and update derives
//! `final_price` before anything reaches the repository.

use std::sync::Arc;

use crate::domain::entities::{PricingPlan, PricingPlanId, PricingPlanInput};
use crate::domain::ports::PricingPlanRepository;
use crate::error::{AppError, DomainError};

/// Service for managing pricing plans
pub struct PricingPlanService<R: ?Sized> {
    plans: Arc<R>,
}

impl<R> PricingPlanService<R>
where
    R: PricingPlanRepository + ?Sized,
{
    pub fn new(plans: Arc<R>) -> Self {
        Self { plans }
    }

    pub async fn list(&self) -> Result<Vec<PricingPlan>, AppError> {
        Ok(self.plans.list().await?)
    }

    pub async fn get(&self, id: PricingPlanId) -> Result<PricingPlan, AppError> {
        self.plans
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Validate, derive the final price, then insert
    pub async fn create(&self, input: PricingPlanInput) -> Result<PricingPlan, AppError> {
        input.validate_for_create().map_err(AppError::Validation)?;

        let new_plan = input.into_new_plan().map_err(DomainError::from)?;
        let plan = self.plans.create(&new_plan).await?;

        tracing::info!(
            plan_id = %plan.id,
            final_price = ?plan.final_price,
            "Pricing plan created"
        );
        Ok(plan)
    }

    /// Merge the present fields into the stored plan, re-derive the final
    /// price, then save
    pub async fn update(
        &self,
        id: PricingPlanId,
        input: PricingPlanInput,
    ) -> Result<PricingPlan, AppError> {
        input.validate_for_update().map_err(AppError::Validation)?;

        let mut plan = self.get(id).await?;
        plan.apply(input);
        plan.recalculate().map_err(DomainError::from)?;

        let plan = self.plans.update(&plan).await?;

        tracing::info!(
            plan_id = %plan.id,
            final_price = ?plan.final_price,
            "Pricing plan updated"
        );
        Ok(plan)
    }

    pub async fn delete(&self, id: PricingPlanId) -> Result<(), AppError> {
        if !self.plans.delete(id).await? {
            return Err(not_found(id));
        }
        tracing::info!(plan_id = %id, "Pricing plan deleted");
        Ok(())
    }
}

fn not_found(id: PricingPlanId) -> AppError {
    AppError::Domain(DomainError::NotFound(format!("Pricing plan {}", id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_plan, InMemoryPricingPlanRepository};

    fn create_service(
        repo: InMemoryPricingPlanRepository,
    ) -> (
        PricingPlanService<InMemoryPricingPlanRepository>,
        Arc<InMemoryPricingPlanRepository>,
    ) {
        let repo = Arc::new(repo);
        (PricingPlanService::new(repo.clone()), repo)
    }

    fn input(name: &str, original: f64, discount: f64) -> PricingPlanInput {
        PricingPlanInput {
            name: Some(name.to_string()),
            original_price: Some(original),
            discount_percent: Some(discount),
            description: None,
        }
    }

    #[tokio::test]
    async fn create_derives_final_price() {
        let (service, repo) = create_service(InMemoryPricingPlanRepository::new());

        let plan = service.create(input("Pro", 150.0, 20.0)).await.unwrap();

        assert_eq!(plan.final_price, Some(120.0));
        assert_eq!(plan.description, "");
        let stored = repo.get(plan.id).unwrap();
        assert_eq!(stored.final_price, Some(120.0));
    }

    #[tokio::test]
    async fn create_without_discount_keeps_price() {
        let (service, _) = create_service(InMemoryPricingPlanRepository::new());

        let plan = service
            .create(PricingPlanInput {
                name: Some("Basic".to_string()),
                original_price: Some(49.99),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(plan.discount_percent, 0.0);
        assert_eq!(plan.final_price, Some(49.99));
    }

    #[tokio::test]
    async fn create_rejects_invalid_input_without_writing() {
        let (service, repo) = create_service(InMemoryPricingPlanRepository::new());

        let result = service.create(input("", -100.0, 0.0)).await;

        match result {
            Err(AppError::Validation(errors)) => {
                assert!(errors.contains("name"));
                assert!(errors.contains("original_price"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(repo.count(), 0);
    }

    #[tokio::test]
    async fn update_recomputes_final_price() {
        let (service, repo) =
            create_service(InMemoryPricingPlanRepository::new().with_plan(test_plan()));
        let id = test_plan().id;

        let plan = service
            .update(
                id,
                PricingPlanInput {
                    original_price: Some(200.0),
                    discount_percent: Some(25.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(plan.name, test_plan().name);
        assert_eq!(plan.final_price, Some(150.0));
        assert_eq!(repo.get(id).unwrap().final_price, Some(150.0));
    }

    #[tokio::test]
    async fn update_with_only_discount_uses_stored_price() {
        let (service, _) =
            create_service(InMemoryPricingPlanRepository::new().with_plan(test_plan()));

        let plan = service
            .update(
                test_plan().id,
                PricingPlanInput {
                    discount_percent: Some(100.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(plan.final_price, Some(0.0));
    }

    #[tokio::test]
    async fn update_missing_plan_is_not_found() {
        let (service, _) = create_service(InMemoryPricingPlanRepository::new());

        let result = service
            .update(PricingPlanId(404), input("Pro", 10.0, 0.0))
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn corrupt_stored_price_aborts_update() {
        let mut plan = test_plan();
        plan.original_price = -5.0;
        let id = plan.id;
        let (service, repo) = create_service(InMemoryPricingPlanRepository::new().with_plan(plan));

        let result = service
            .update(
                id,
                PricingPlanInput {
                    name: Some("Renamed".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::Domain(DomainError::InvalidArgument(_)))
        ));
        assert_eq!(repo.get(id).unwrap().name, test_plan().name);
    }

    #[tokio::test]
    async fn delete_removes_plan() {
        let (service, repo) =
            create_service(InMemoryPricingPlanRepository::new().with_plan(test_plan()));

        service.delete(test_plan().id).await.unwrap();

        assert_eq!(repo.count(), 0);
        assert!(matches!(
            service.delete(test_plan().id).await,
            Err(AppError::Domain(DomainError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let (service, _) = create_service(InMemoryPricingPlanRepository::new());
        service.create(input("A", 10.0, 0.0)).await.unwrap();
        service.create(input("B", 20.0, 0.0)).await.unwrap();

        let names: Vec<_> = service
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
