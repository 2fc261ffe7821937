//! Pricing plan handlers
//!
//! Admin endpoints for the pricing section. Writes redirect back to the plan
//! list the way the admin UI expects.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{PricingPlan, PricingPlanId, PricingPlanInput};
use crate::error::AppError;
use crate::AppState;

/// Admin plan list; target of every write redirect
pub const PRICING_PATH: &str = "/admin/marketing/pricing";

/// Create or update body. `final_price` is derived and never read from input.
#[derive(Debug, Default, Deserialize)]
pub struct PricingPlanRequest {
    pub name: Option<String>,
    pub original_price: Option<f64>,
    pub discount_percent: Option<f64>,
    pub description: Option<String>,
}

impl From<PricingPlanRequest> for PricingPlanInput {
    fn from(req: PricingPlanRequest) -> Self {
        PricingPlanInput {
            name: req.name,
            original_price: req.original_price,
            discount_percent: req.discount_percent,
            description: req.description,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PricingPlanResponse {
    pub id: i64,
    pub name: String,
    pub original_price: f64,
    pub discount_percent: f64,
    pub final_price: Option<f64>,
    pub description: String,
}

impl From<PricingPlan> for PricingPlanResponse {
    fn from(plan: PricingPlan) -> Self {
        Self {
            id: plan.id.0,
            name: plan.name,
            original_price: plan.original_price,
            discount_percent: plan.discount_percent,
            final_price: plan.final_price,
            description: plan.description,
        }
    }
}

/// GET /admin/marketing/pricing
pub async fn list_plans(
    State(state): State<AppState>,
) -> Result<Json<Vec<PricingPlanResponse>>, AppError> {
    let plans = state.pricing_service.list().await?;
    Ok(Json(plans.into_iter().map(Into::into).collect()))
}

/// GET /admin/marketing/pricing/:id
pub async fn get_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PricingPlanResponse>, AppError> {
    let plan = state.pricing_service.get(PricingPlanId(id)).await?;
    Ok(Json(plan.into()))
}

/// POST /admin/marketing/pricing
///
/// Responds 302 to the plan list.
pub async fn create_plan(
    State(state): State<AppState>,
    Json(req): Json<PricingPlanRequest>,
) -> Result<Response, AppError> {
    state.pricing_service.create(req.into()).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, PRICING_PATH)]).into_response())
}

/// PUT /admin/marketing/pricing/:id
///
/// Absent fields keep their stored values. Responds 303 to the plan list.
pub async fn update_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PricingPlanRequest>,
) -> Result<Redirect, AppError> {
    state
        .pricing_service
        .update(PricingPlanId(id), req.into())
        .await?;
    Ok(Redirect::to(PRICING_PATH))
}

/// DELETE /admin/marketing/pricing/:id
pub async fn delete_plan(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.pricing_service.delete(PricingPlanId(id)).await?;
    Ok(Redirect::to(PRICING_PATH))
}
