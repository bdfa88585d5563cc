//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod accounts;

pub use accounts::{to_domain, to_row, Entity as AccountEntity, Model as AccountModel};
