//! PostgreSQL adapter for UserRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    SqlErr,
};

use crate::domain::entities::{NewUser, User, UserId};
use crate::domain::ports::UserRepository;
use crate::entity::users;
use crate::error::DomainError;

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `lower(email) = <lowercased email>`, matching the unique index
fn email_matches(email: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(users::Column::Email))).eq(email.to_lowercase())
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let result = users::Entity::find()
            .filter(email_matches(email))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let count = users::Entity::find()
            .filter(email_matches(email))
            .count(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(count > 0)
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        let now = Utc::now().fixed_offset();

        let model = users::ActiveModel {
            email: Set(user.email.clone()),
            encrypted_password: Set(user.encrypted_password.clone()),
            first_name: Set(user.first_name.clone()),
            last_name: Set(user.last_name.clone()),
            role: Set(user.role.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(e, &user.email))?;

        Ok(result.into())
    }
}

fn insert_error(e: DbErr, email: &str) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::AlreadyExists(format!("User with email '{}'", email))
        }
        _ => DomainError::Database(e.to_string()),
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        User {
            id: UserId(model.id),
            email: model.email,
            encrypted_password: model.encrypted_password,
            first_name: model.first_name,
            last_name: model.last_name,
            role: model.role.parse().unwrap_or_default(),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}
