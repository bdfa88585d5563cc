//! Enumerated account attributes.
//!
//! Every variant has a symbolic upper-case name (`LOCAL`, `ADMIN`, ...) which
//! is its only external representation: serde, `Display`/`FromStr`, and the
//! storage columns all use it, so reordering variants never changes data.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "persistence")]
use sea_orm::entity::prelude::StringLen;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Where the account signed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "persistence", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(
    feature = "persistence",
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthProvider {
    /// Email and password registered with this service
    #[cfg_attr(feature = "persistence", sea_orm(string_value = "LOCAL"))]
    Local,
    /// GitHub OAuth
    #[cfg_attr(feature = "persistence", sea_orm(string_value = "GITHUB"))]
    Github,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "LOCAL",
            AuthProvider::Github => "GITHUB",
        }
    }

    /// Third-party identity providers don't require a stored credential.
    pub fn is_third_party(&self) -> bool {
        !matches!(self, AuthProvider::Local)
    }
}

/// Authority level inside the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "persistence", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(
    feature = "persistence",
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Regular learner
    #[default]
    #[cfg_attr(feature = "persistence", sea_orm(string_value = "USER"))]
    User,
    /// Study group manager
    #[cfg_attr(feature = "persistence", sea_orm(string_value = "MANAGER"))]
    Manager,
    /// Service operator
    #[cfg_attr(feature = "persistence", sea_orm(string_value = "ADMIN"))]
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "USER",
            UserRole::Manager => "MANAGER",
            UserRole::Admin => "ADMIN",
        }
    }

    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Check if this role can access a required role
    pub fn can_access(&self, required: &UserRole) -> bool {
        self.rank() >= required.rank()
    }

    fn rank(&self) -> u8 {
        match self {
            UserRole::User => 0,
            UserRole::Manager => 1,
            UserRole::Admin => 2,
        }
    }
}

/// Account lifecycle state.
///
/// Accounts are never removed from storage; leaving the service is the
/// transition to `Deleted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "persistence", derive(sea_orm::EnumIter, sea_orm::DeriveActiveEnum))]
#[cfg_attr(
    feature = "persistence",
    sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    #[default]
    #[cfg_attr(feature = "persistence", sea_orm(string_value = "ACTIVE"))]
    Active,
    /// Dormant
    #[cfg_attr(feature = "persistence", sea_orm(string_value = "INACTIVE"))]
    Inactive,
    /// Withdrawn from the service
    #[cfg_attr(feature = "persistence", sea_orm(string_value = "DELETED"))]
    Deleted,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "ACTIVE",
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Deleted => "DELETED",
        }
    }
}

macro_rules! symbolic_name {
    ($ty:ident, $label:literal, [$($variant:ident),+]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $ty::$variant.as_str() {
                        return Ok($ty::$variant);
                    }
                )+
                Err(DomainError::invalid_format(format!("unknown {} '{}'", $label, s)))
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

symbolic_name!(AuthProvider, "provider", [Local, Github]);
symbolic_name!(UserRole, "role", [User, Manager, Admin]);
symbolic_name!(UserStatus, "status", [Active, Inactive, Deleted]);
