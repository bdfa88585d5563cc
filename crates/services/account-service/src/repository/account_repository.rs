//! Account repository backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, SqlErr,
};
use uuid::Uuid;

use super::entities::accounts::{self, to_row, Entity as AccountEntity};
use crate::infra::migrations::EMAIL_UNIQUE_INDEX;
use common::{AppError, AppResult};
use domain::Account;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage port for accounts.
///
/// There is no delete: an account leaves the service by being saved with
/// `UserStatus::Deleted`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert or update an account and return it as stored.
    ///
    /// Without an id the account is inserted and the storage layer assigns
    /// id and creation time. With an id, an existing row is updated (its
    /// creation time is kept) and a missing one is inserted.
    async fn save(&self, account: Account) -> AppResult<Account>;

    /// Find account by email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;

    /// Find account by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>>;

    /// Check whether an email is already taken
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;
}

/// Concrete implementation of AccountRepository
pub struct AccountStore {
    db: DatabaseConnection,
}

impl AccountStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AccountRepository for AccountStore {
    async fn save(&self, account: Account) -> AppResult<Account> {
        let row = to_row(&account);

        let exists = match account.id() {
            Some(id) => AccountEntity::find_by_id(id).one(&self.db).await?.is_some(),
            None => false,
        };

        let model = if exists {
            row.update(&self.db).await
        } else {
            row.insert(&self.db).await
        }
        .map_err(write_error)?;

        tracing::debug!(id = %model.id, updated = exists, "Account saved");
        Ok(Account::from(model))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        let result = AccountEntity::find()
            .filter(accounts::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        let result = AccountEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Account::from))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let count = AccountEntity::find()
            .filter(accounts::Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }
}

/// Map a failed insert/update. Unique violations become conflicts; anything
/// else stays a database error.
fn write_error(err: DbErr) -> AppError {
    let app_err = match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => unique_violation(&detail),
        _ => AppError::from(err),
    };

    tracing::debug!(code = app_err.code(), "Account write failed: {}", app_err);
    app_err
}

/// Only the email index means the address is taken; any other unique key
/// (the primary key when a caller supplies an id) is an account clash.
fn unique_violation(detail: &str) -> AppError {
    if detail.contains(EMAIL_UNIQUE_INDEX) {
        AppError::conflict("Email")
    } else {
        tracing::debug!("Unique constraint violated: {}", detail);
        AppError::conflict("Account")
    }
}
