//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    ContentId, MarketingContent, NewPricingPlan, NewUser, PricingPlan, PricingPlanId,
    Publication, Timestamps, User, UserId,
};
use crate::domain::ports::{
    ContentRepository, DisposableEmailList, DomainResolver, PasswordHasher,
    PricingPlanRepository, TokenIssuer, TokenPair, UserRepository,
};
use crate::error::{AuthError, DomainError, EmailCheckError};

// ============================================================================
// In-Memory User Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
    next_id: AtomicI64,
    unique_violation_on_create: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a user for testing
    pub fn with_user(self, user: User) -> Self {
        self.next_id.fetch_max(user.id.0, Ordering::SeqCst);
        self.users.write().unwrap().push(user);
        self
    }

    /// Fail every insert as if a concurrent sign-up took the email first
    pub fn with_unique_violation_on_create(mut self) -> Self {
        self.unique_violation_on_create = true;
        self
    }

    pub fn count(&self) -> usize {
        self.users.read().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = email.to_lowercase();
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email.to_lowercase() == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        if self.unique_violation_on_create || self.exists_by_email(&user.email).await? {
            return Err(DomainError::AlreadyExists(format!(
                "User with email '{}'",
                user.email
            )));
        }

        let now = Utc::now();
        let created = User {
            id: UserId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            email: user.email.clone(),
            encrypted_password: user.encrypted_password.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        self.users.write().unwrap().push(created.clone());
        Ok(created)
    }
}

// ============================================================================
// In-Memory Pricing Plan Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryPricingPlanRepository {
    plans: Arc<RwLock<HashMap<PricingPlanId, PricingPlan>>>,
    next_id: AtomicI64,
}

impl InMemoryPricingPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with a plan for testing
    pub fn with_plan(self, plan: PricingPlan) -> Self {
        self.next_id.fetch_max(plan.id.0, Ordering::SeqCst);
        self.plans.write().unwrap().insert(plan.id, plan);
        self
    }

    pub fn get(&self, id: PricingPlanId) -> Option<PricingPlan> {
        self.plans.read().unwrap().get(&id).cloned()
    }

    pub fn count(&self) -> usize {
        self.plans.read().unwrap().len()
    }
}

#[async_trait]
impl PricingPlanRepository for InMemoryPricingPlanRepository {
    async fn list(&self) -> Result<Vec<PricingPlan>, DomainError> {
        let mut plans: Vec<_> = self.plans.read().unwrap().values().cloned().collect();
        plans.sort_by_key(|p| p.id.0);
        Ok(plans)
    }

    async fn find_by_id(&self, id: PricingPlanId) -> Result<Option<PricingPlan>, DomainError> {
        Ok(self.get(id))
    }

    async fn create(&self, plan: &NewPricingPlan) -> Result<PricingPlan, DomainError> {
        let id = PricingPlanId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let created = PricingPlan {
            id,
            name: plan.name.clone(),
            original_price: plan.original_price,
            discount_percent: plan.discount_percent,
            final_price: plan.final_price,
            description: plan.description.clone(),
        };
        self.plans.write().unwrap().insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, plan: &PricingPlan) -> Result<PricingPlan, DomainError> {
        let mut plans = self.plans.write().unwrap();
        match plans.get_mut(&plan.id) {
            Some(stored) => {
                *stored = plan.clone();
                Ok(plan.clone())
            }
            None => Err(DomainError::NotFound(format!("Pricing plan {}", plan.id))),
        }
    }

    async fn delete(&self, id: PricingPlanId) -> Result<bool, DomainError> {
        Ok(self.plans.write().unwrap().remove(&id).is_some())
    }
}

// ============================================================================
// In-Memory Content Repository
// ============================================================================

pub struct InMemoryContentRepository<C> {
    items: Arc<RwLock<HashMap<ContentId, C>>>,
    next_id: AtomicI64,
}

impl<C: MarketingContent> InMemoryContentRepository<C> {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            next_id: AtomicI64::new(0),
        }
    }
}

impl<C: MarketingContent> Default for InMemoryContentRepository<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<C: MarketingContent> ContentRepository<C> for InMemoryContentRepository<C> {
    async fn list(&self) -> Result<Vec<C>, DomainError> {
        let mut items: Vec<C> = self.items.read().unwrap().values().cloned().collect();
        items.sort_by_key(|item| (item.publication().display_order, item.id()));
        Ok(items)
    }

    async fn find_by_id(&self, id: ContentId) -> Result<Option<C>, DomainError> {
        Ok(self.items.read().unwrap().get(&id).cloned())
    }

    async fn create(&self, draft: &C::Draft, publication: &Publication) -> Result<C, DomainError> {
        let id = ContentId(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let item = C::from_parts(id, draft.clone(), *publication, Timestamps::now());
        self.items.write().unwrap().insert(id, item.clone());
        Ok(item)
    }

    async fn update(
        &self,
        id: ContentId,
        draft: &C::Draft,
        publication: &Publication,
    ) -> Result<Option<C>, DomainError> {
        let mut items = self.items.write().unwrap();
        let Some(stored) = items.get_mut(&id) else {
            return Ok(None);
        };

        let timestamps = Timestamps {
            created_at: stored.timestamps().created_at,
            updated_at: Utc::now(),
        };
        *stored = C::from_parts(id, draft.clone(), *publication, timestamps);
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: ContentId) -> Result<bool, DomainError> {
        Ok(self.items.write().unwrap().remove(&id).is_some())
    }
}

// ============================================================================
// Email check ports
// ============================================================================

/// Resolver with a fixed answer; `None` simulates an unreachable resolver
pub struct StaticDomainResolver {
    answer: Option<bool>,
}

impl StaticDomainResolver {
    pub fn existing() -> Self {
        Self { answer: Some(true) }
    }

    pub fn missing() -> Self {
        Self {
            answer: Some(false),
        }
    }

    pub fn failing() -> Self {
        Self { answer: None }
    }
}

#[async_trait]
impl DomainResolver for StaticDomainResolver {
    async fn domain_exists(&self, _domain: &str) -> Result<bool, EmailCheckError> {
        self.answer
            .ok_or_else(|| EmailCheckError::Malformed("resolver offline".to_string()))
    }
}

pub struct StaticDisposableList {
    domains: Vec<String>,
}

impl StaticDisposableList {
    pub fn new(domains: &[&str]) -> Self {
        Self {
            domains: domains.iter().map(|d| d.to_string()).collect(),
        }
    }
}

impl DisposableEmailList for StaticDisposableList {
    fn is_disposable(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }
}

// ============================================================================
// Credential ports
// ============================================================================

/// Reversible "hash" so tests can assert on stored passwords
pub struct PlainTextHasher;

impl PasswordHasher for PlainTextHasher {
    fn hash(&self, plaintext: &str) -> Result<String, AuthError> {
        Ok(format!("hashed:{}", plaintext))
    }

    fn verify(&self, plaintext: &str, digest: &str) -> bool {
        digest.strip_prefix("hashed:") == Some(plaintext)
    }
}

/// Tokens are `access:<subject>` and `refresh:<subject>`
pub struct FakeTokenIssuer;

impl FakeTokenIssuer {
    pub fn access_token_for(subject: &str) -> String {
        format!("access:{}", subject)
    }
}

impl TokenIssuer for FakeTokenIssuer {
    fn issue(&self, subject: &str) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access_token: Self::access_token_for(subject),
            refresh_token: format!("refresh:{}", subject),
            access_ttl_secs: 900,
            refresh_ttl_secs: 604_800,
        })
    }

    fn verify_access(&self, token: &str) -> Result<String, AuthError> {
        token
            .strip_prefix("access:")
            .map(str::to_string)
            .ok_or_else(|| AuthError::InvalidToken("not an access token".to_string()))
    }
}
