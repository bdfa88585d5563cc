//! Domain layer - Core account entity and value types.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The optional `persistence` feature only adds SeaORM column mappings to the
//! enumerated types; it does not pull storage logic into the domain.

pub mod account;
pub mod constants;
pub mod enums;
pub mod error;

pub use account::{Account, AccountBuilder, PersistenceState};
pub use enums::{AuthProvider, UserRole, UserStatus};
pub use error::{DomainError, DomainResult};
