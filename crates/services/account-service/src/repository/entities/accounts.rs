//! Account row entity for SeaORM and its mapping to the domain `Account`.
//!
//! `Model` is a stored row: id and creation time are always present.
//! `ActiveModel` is what gets written; for a new account both stay `NotSet`
//! and are filled in by `before_save` as part of the insert.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue;

use domain::{Account, AuthProvider, UserRole, UserStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub email: String,
    pub nickname: String,
    /// Hashed credential, NULL for identity-provider accounts
    pub password: Option<String>,
    pub provider: AuthProvider,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

/// Storage-side auditing: identity and creation time are assigned once, on
/// insert, and `created_at` is never part of an update.
#[async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            if self.id.is_not_set() {
                self.id = ActiveValue::Set(Uuid::new_v4());
            }
            if self.created_at.is_not_set() {
                self.created_at = ActiveValue::Set(Utc::now());
            }
        } else if let ActiveValue::Set(created_at) = self.created_at {
            self.created_at = ActiveValue::Unchanged(created_at);
        }

        Ok(self)
    }
}

/// Copy every account field into a row to be written.
pub fn to_row(account: &Account) -> ActiveModel {
    ActiveModel {
        id: account.id().map_or(ActiveValue::NotSet, ActiveValue::Set),
        email: ActiveValue::Set(account.email().to_string()),
        nickname: ActiveValue::Set(account.nickname().to_string()),
        password: ActiveValue::Set(account.password().map(str::to_string)),
        provider: ActiveValue::Set(account.provider()),
        role: ActiveValue::Set(account.role()),
        status: ActiveValue::Set(account.status()),
        created_at: account.created_at().map_or(ActiveValue::NotSet, ActiveValue::Set),
    }
}

/// Rebuild the account from a stored row. Field contents are not re-validated.
pub fn to_domain(model: Model) -> Account {
    Account::from_persisted(
        model.id,
        model.email,
        model.nickname,
        model.password,
        model.provider,
        model.role,
        model.status,
        model.created_at,
    )
}

impl From<&Account> for ActiveModel {
    fn from(account: &Account) -> Self {
        to_row(account)
    }
}

impl From<Account> for ActiveModel {
    fn from(account: Account) -> Self {
        to_row(&account)
    }
}

/// Convert database model to domain entity
impl From<Model> for Account {
    fn from(model: Model) -> Self {
        to_domain(model)
    }
}
