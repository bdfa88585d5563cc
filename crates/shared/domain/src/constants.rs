//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Field names
// =============================================================================

pub const FIELD_EMAIL: &str = "email";
pub const FIELD_NICKNAME: &str = "nickname";
pub const FIELD_PROVIDER: &str = "provider";
pub const FIELD_ROLE: &str = "role";
pub const FIELD_STATUS: &str = "status";

// =============================================================================
// Validation
// =============================================================================

/// Accepted email shape: `local-part@domain.tld` with a 2+ letter TLD.
/// ASCII word characters only; the whole value must match.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9_.%+-]+@[A-Za-z0-9_.-]+\.[A-Za-z]{2,}$";

// =============================================================================
// Storage column limits
// =============================================================================

/// Maximum stored length of an email address
pub const MAX_EMAIL_LENGTH: u32 = 100;

/// Maximum stored length of a nickname
pub const MAX_NICKNAME_LENGTH: u32 = 20;

/// Width of the enumerated-string columns (provider, role, status)
pub const ENUM_COLUMN_LENGTH: u32 = 20;
