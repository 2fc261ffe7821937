//! Pricing plan domain entity
//!
//! A plan shown in the pricing section of the marketing site. `final_price`
//! is derived from `original_price` and `discount_percent` and never set
//! directly; see `domain::pricing`.

use serde::{Deserialize, Serialize};

use crate::domain::pricing::calculate_final_price;
use crate::domain::ValidationErrors;
use crate::error::PricingError;

/// Maximum length of a plan name
pub const NAME_MAX_LEN: usize = 100;

/// Maximum length of a plan description
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Unique identifier for a pricing plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PricingPlanId(pub i64);

impl From<i64> for PricingPlanId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PricingPlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored pricing plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingPlan {
    pub id: PricingPlanId,
    pub name: String,
    pub original_price: f64,
    pub discount_percent: f64,
    pub final_price: Option<f64>,
    pub description: String,
}

impl PricingPlan {
    /// Recompute `final_price` from the current price and discount
    pub fn recalculate(&mut self) -> Result<(), PricingError> {
        self.final_price =
            calculate_final_price(Some(self.original_price), Some(self.discount_percent))?;
        Ok(())
    }

    /// Overwrite the fields present in `input`. Call `recalculate` afterwards.
    pub fn apply(&mut self, input: PricingPlanInput) {
        if let Some(name) = input.name {
            self.name = name.trim().to_string();
        }
        if let Some(original_price) = input.original_price {
            self.original_price = original_price;
        }
        if let Some(discount_percent) = input.discount_percent {
            self.discount_percent = discount_percent;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
    }
}

/// Data needed to insert a pricing plan, with the final price already derived
#[derive(Debug, Clone, PartialEq)]
pub struct NewPricingPlan {
    pub name: String,
    pub original_price: f64,
    pub discount_percent: f64,
    pub final_price: Option<f64>,
    pub description: String,
}

/// Create or update payload for a pricing plan.
///
/// Every field is optional so the same type serves partial updates; creation
/// requires `name` and `original_price`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricingPlanInput {
    pub name: Option<String>,
    pub original_price: Option<f64>,
    pub discount_percent: Option<f64>,
    pub description: Option<String>,
}

impl PricingPlanInput {
    pub fn validate_for_create(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.is_none() {
            errors.add("name", "name is required");
        }
        if self.original_price.is_none() {
            errors.add("original_price", "original price is required");
        }
        self.check_present_fields(&mut errors);

        errors.into_result()
    }

    pub fn validate_for_update(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        self.check_present_fields(&mut errors);
        errors.into_result()
    }

    fn check_present_fields(&self, errors: &mut ValidationErrors) {
        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                errors.add("name", "name is required");
            } else if name.chars().count() > NAME_MAX_LEN {
                errors.add(
                    "name",
                    format!("name must be at most {} characters", NAME_MAX_LEN),
                );
            }
        }

        if let Some(price) = self.original_price {
            if !price.is_finite() {
                errors.add("original_price", "original price must be a number");
            } else if price < 0.0 {
                errors.add("original_price", "original price cannot be negative");
            }
        }

        if let Some(discount) = self.discount_percent {
            if !discount.is_finite() {
                errors.add("discount_percent", "discount percent must be a number");
            } else if discount < 0.0 {
                errors.add("discount_percent", "discount percent cannot be negative");
            }
        }

        if let Some(description) = &self.description {
            if description.chars().count() > DESCRIPTION_MAX_LEN {
                errors.add(
                    "description",
                    format!(
                        "description must be at most {} characters",
                        DESCRIPTION_MAX_LEN
                    ),
                );
            }
        }
    }

    /// Build the insert payload, deriving the final price.
    ///
    /// Missing optional fields fall back to the column defaults: no discount
    /// and an empty description.
    pub fn into_new_plan(self) -> Result<NewPricingPlan, PricingError> {
        let original_price = self.original_price.unwrap_or(0.0);
        let discount_percent = self.discount_percent.unwrap_or(0.0);
        let final_price = calculate_final_price(Some(original_price), Some(discount_percent))?;

        Ok(NewPricingPlan {
            name: self.name.unwrap_or_default().trim().to_string(),
            original_price,
            discount_percent,
            final_price,
            description: self.description.unwrap_or_default(),
        })
    }
}
