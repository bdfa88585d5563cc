//! Account domain entity.
//!
//! An [`Account`] can only be obtained through validation ([`Account::new`] or
//! [`AccountBuilder::build`]) or from an already persisted row
//! ([`Account::from_persisted`]). Fields are private and there are no
//! setters; the `with_*` methods return a new instance.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{
    EMAIL_PATTERN, FIELD_EMAIL, FIELD_NICKNAME, FIELD_PROVIDER, FIELD_ROLE, FIELD_STATUS,
};
use crate::enums::{AuthProvider, UserRole, UserStatus};
use crate::error::{DomainError, DomainResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Whether the storage layer has assigned an identity to the account yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistenceState {
    /// Built in memory, no id and no creation time yet
    Transient,
    /// Stored at least once; id and creation time are set
    Persisted,
}

/// User account of the learning platform.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AccountBuilder")]
pub struct Account {
    id: Option<Uuid>,
    email: String,
    nickname: String,
    /// Pre-hashed credential; `None` for identity-provider sign ups
    #[serde(skip_serializing)]
    password: Option<String>,
    provider: AuthProvider,
    role: UserRole,
    status: UserStatus,
    created_at: Option<DateTime<Utc>>,
}

// Don't expose the credential in debug output
impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("nickname", &self.nickname)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .field("provider", &self.provider)
            .field("role", &self.role)
            .field("status", &self.status)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl Account {
    /// Create a validated account.
    ///
    /// # Errors
    /// `InvalidFormat` if the email does not look like `local@domain.tld`
    /// or the nickname is blank.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: Option<Uuid>,
        email: impl Into<String>,
        nickname: impl Into<String>,
        password: Option<String>,
        provider: AuthProvider,
        role: UserRole,
        status: UserStatus,
        created_at: Option<DateTime<Utc>>,
    ) -> DomainResult<Self> {
        AccountBuilder {
            id,
            email: Some(email.into()),
            nickname: Some(nickname.into()),
            password,
            provider: Some(provider),
            role: Some(role),
            status: Some(status),
            created_at,
        }
        .build()
    }

    /// Start building an account from optional parts.
    pub fn builder() -> AccountBuilder {
        AccountBuilder::default()
    }

    /// Rebuild an account from a stored row.
    ///
    /// Stored rows are trusted: no validation runs here, so a row written
    /// under older rules is still readable.
    #[allow(clippy::too_many_arguments)]
    pub fn from_persisted(
        id: Uuid,
        email: String,
        nickname: String,
        password: Option<String>,
        provider: AuthProvider,
        role: UserRole,
        status: UserStatus,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Some(id),
            email,
            nickname,
            password,
            provider,
            role,
            status,
            created_at: Some(created_at),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn provider(&self) -> AuthProvider {
        self.provider
    }

    pub fn role(&self) -> UserRole {
        self.role
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// True when a non-blank credential is stored, i.e. the account can
    /// log in with a password rather than only through an identity provider.
    pub fn has_credential(&self) -> bool {
        self.password
            .as_deref()
            .is_some_and(|password| !is_blank(password))
    }

    /// Check if account has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    pub fn is_deleted(&self) -> bool {
        self.status == UserStatus::Deleted
    }

    pub fn state(&self) -> PersistenceState {
        match (self.id, self.created_at) {
            (Some(_), Some(_)) => PersistenceState::Persisted,
            _ => PersistenceState::Transient,
        }
    }

    /// Copy of this account with another lifecycle status.
    pub fn with_status(&self, status: UserStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    /// Copy of this account with another role.
    pub fn with_role(&self, role: UserRole) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }

    /// Copy of this account with another nickname; the nickname is validated.
    pub fn with_nickname(&self, nickname: impl Into<String>) -> DomainResult<Self> {
        let nickname = nickname.into();
        validate_nickname(&nickname)?;
        Ok(Self {
            nickname,
            ..self.clone()
        })
    }
}

/// Collects account parts, any of which may be missing, and validates them
/// in one go.
///
/// Also the deserialization shape of [`Account`], so a payload with a null
/// or absent required field is rejected with the same error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountBuilder {
    #[serde(default)]
    id: Option<Uuid>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    nickname: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    provider: Option<AuthProvider>,
    #[serde(default)]
    role: Option<UserRole>,
    #[serde(default)]
    status: Option<UserStatus>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
}

impl AccountBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn provider(mut self, provider: AuthProvider) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn status(mut self, status: UserStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Validate the collected parts.
    ///
    /// Presence of email, nickname, provider, role and status is checked
    /// first, in that order, then the email format, then the nickname.
    /// Values are stored exactly as given.
    pub fn build(self) -> DomainResult<Account> {
        let email = self.email.ok_or(DomainError::missing(FIELD_EMAIL))?;
        let nickname = self.nickname.ok_or(DomainError::missing(FIELD_NICKNAME))?;
        let provider = self.provider.ok_or(DomainError::missing(FIELD_PROVIDER))?;
        let role = self.role.ok_or(DomainError::missing(FIELD_ROLE))?;
        let status = self.status.ok_or(DomainError::missing(FIELD_STATUS))?;

        validate_email(&email)?;
        validate_nickname(&nickname)?;

        Ok(Account {
            id: self.id,
            email,
            nickname,
            password: self.password,
            provider,
            role,
            status,
            created_at: self.created_at,
        })
    }
}

impl TryFrom<AccountBuilder> for Account {
    type Error = DomainError;

    fn try_from(builder: AccountBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}

/// Check an email against the accepted `local@domain.tld` shape.
pub fn validate_email(email: &str) -> DomainResult<()> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(DomainError::invalid_format("email must look like local-part@domain.tld"))
    }
}

/// Nicknames may not be empty or whitespace only.
pub fn validate_nickname(nickname: &str) -> DomainResult<()> {
    if is_blank(nickname) {
        Err(DomainError::invalid_format("nickname must not be blank"))
    } else {
        Ok(())
    }
}

/// Blank means empty or made only of whitespace characters.
fn is_blank(value: &str) -> bool {
    value.chars().all(is_whitespace_char)
}

/// Separator-style whitespace: the ASCII controls `\t` to `\r` and
/// `U+001C`..`U+001F`, plus Unicode space/line/paragraph separators.
/// Non-breaking spaces (`U+00A0`, `U+2007`, `U+202F`) and `U+0085` are content.
fn is_whitespace_char(c: char) -> bool {
    match c {
        '\u{001C}'..='\u{001F}' => true,
        '\u{0085}' | '\u{00A0}' | '\u{2007}' | '\u{202F}' => false,
        c => c.is_whitespace(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn valid_builder() -> AccountBuilder {
        Account::builder()
            .email("user@example.com")
            .nickname("nickname")
            .password("encrypted")
            .provider(AuthProvider::Local)
            .role(UserRole::User)
            .status(UserStatus::Active)
    }

    fn with_password(password: Option<&str>) -> Account {
        Account::new(
            None,
            "user@example.com",
            "nickname",
            password.map(str::to_string),
            AuthProvider::Local,
            UserRole::User,
            UserStatus::Active,
            Some(now()),
        )
        .unwrap()
    }

    #[test]
    fn test_creates_account_with_valid_fields() {
        let id = Uuid::parse_str("123e4567-e89b-12d3-a456-426614174000").unwrap();
        let account = Account::new(
            Some(id),
            "user@example.com",
            "nickname",
            Some("encrypted".to_string()),
            AuthProvider::Local,
            UserRole::User,
            UserStatus::Active,
            Some(now()),
        )
        .unwrap();

        assert_eq!(account.id(), Some(id));
        assert_eq!(account.email(), "user@example.com");
        assert_eq!(account.nickname(), "nickname");
        assert_eq!(account.password(), Some("encrypted"));
        assert_eq!(account.provider(), AuthProvider::Local);
        assert_eq!(account.role(), UserRole::User);
        assert_eq!(account.status(), UserStatus::Active);
        assert_eq!(account.created_at(), Some(now()));
        assert_eq!(account.state(), PersistenceState::Persisted);
    }

    #[test]
    fn test_missing_fields_are_named() {
        let cases = [
            (AccountBuilder { email: None, ..valid_builder() }, "email"),
            (AccountBuilder { nickname: None, ..valid_builder() }, "nickname"),
            (AccountBuilder { provider: None, ..valid_builder() }, "provider"),
            (AccountBuilder { role: None, ..valid_builder() }, "role"),
            (AccountBuilder { status: None, ..valid_builder() }, "status"),
        ];

        for (builder, field) in cases {
            let err = builder.build().unwrap_err();
            assert_eq!(err, DomainError::MissingField(field));
            assert_eq!(err.to_string(), format!("{} is required", field));
        }
    }

    #[test]
    fn test_missing_field_checked_before_format() {
        let err = Account::builder()
            .email("invalid-email")
            .provider(AuthProvider::Local)
            .role(UserRole::User)
            .status(UserStatus::Active)
            .build()
            .unwrap_err();

        assert_eq!(err.field(), Some("nickname"));
    }

    #[test]
    fn test_rejects_invalid_email() {
        for email in ["invalid-email", "user@example", "user@example.c", "@example.com", "us er@example.com", ""] {
            let err = valid_builder().email(email).build().unwrap_err();
            assert!(matches!(err, DomainError::InvalidFormat(_)), "{email}");
        }
    }

    #[test]
    fn test_accepts_email_shapes() {
        for email in ["user@example.com", "first.last+tag@mail.example.co.kr", "a_b%c-d@sub-domain.io"] {
            assert!(valid_builder().email(email).build().is_ok(), "{email}");
        }
    }

    #[test]
    fn test_rejects_blank_nickname() {
        for nickname in ["", " ", "\t\n"] {
            let err = valid_builder().nickname(nickname).build().unwrap_err();
            assert!(matches!(err, DomainError::InvalidFormat(_)));
        }
    }

    #[test]
    fn test_blank_follows_separator_whitespace() {
        for nickname in ["\u{001F}", "\u{001C}\u{001D}", "\u{2028}", "\u{3000}", "\u{000B}\u{000C}"] {
            let err = valid_builder().nickname(nickname).build().unwrap_err();
            assert!(matches!(err, DomainError::InvalidFormat(_)), "{:?}", nickname);
        }

        // Non-breaking spaces count as content
        for nickname in ["\u{00A0}", "\u{2007}", "\u{202F}", "\u{0085}"] {
            assert!(valid_builder().nickname(nickname).build().is_ok(), "{:?}", nickname);
        }

        assert!(!with_password(Some("\u{001F}")).has_credential());
        assert!(with_password(Some("\u{00A0}")).has_credential());
    }

    #[test]
    fn test_values_stored_as_given() {
        let account = valid_builder()
            .email("Mixed.Case@Example.COM")
            .nickname("  padded  ")
            .build()
            .unwrap();

        assert_eq!(account.email(), "Mixed.Case@Example.COM");
        assert_eq!(account.nickname(), "  padded  ");
    }

    #[test]
    fn test_has_credential() {
        assert!(!with_password(None).has_credential());
        assert!(!with_password(Some(" ")).has_credential());
        assert!(!with_password(Some("")).has_credential());
        assert!(with_password(Some("secret123")).has_credential());
    }

    #[test]
    fn test_identity_provider_account_without_password() {
        let account = Account::builder()
            .email("octocat@github.com")
            .nickname("octocat")
            .provider(AuthProvider::Github)
            .role(UserRole::User)
            .status(UserStatus::Active)
            .build()
            .unwrap();

        assert!(!account.has_credential());
        assert_eq!(account.state(), PersistenceState::Transient);
    }

    #[test]
    fn test_with_methods_return_new_instance() {
        let original = valid_builder().build().unwrap();

        let deleted = original.with_status(UserStatus::Deleted);
        assert!(deleted.is_deleted());
        assert!(original.is_active());

        let admin = original.with_role(UserRole::Admin);
        assert!(admin.is_admin());
        assert_eq!(original.role(), UserRole::User);

        let renamed = original.with_nickname("renamed").unwrap();
        assert_eq!(renamed.nickname(), "renamed");
        assert_eq!(original.nickname(), "nickname");
        assert!(original.with_nickname(" ").is_err());
    }

    #[test]
    fn test_value_equality() {
        let a = valid_builder().build().unwrap();
        let b = valid_builder().build().unwrap();
        assert_eq!(a, b);
        assert_ne!(a, b.with_status(UserStatus::Inactive));
    }

    #[test]
    fn test_from_persisted_skips_validation() {
        let account = Account::from_persisted(
            Uuid::new_v4(),
            "legacy-address".to_string(),
            "legacy".to_string(),
            None,
            AuthProvider::Local,
            UserRole::User,
            UserStatus::Inactive,
            now(),
        );

        assert_eq!(account.email(), "legacy-address");
        assert_eq!(account.state(), PersistenceState::Persisted);
    }

    #[test]
    fn test_debug_redacts_password() {
        let output = format!("{:?}", with_password(Some("secret123")));
        assert!(!output.contains("secret123"));
        assert!(output.contains("[REDACTED]"));
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{
            "email": "alice@example.com",
            "nickname": "alice",
            "password": "secret123",
            "provider": "LOCAL",
            "role": "USER",
            "status": "ACTIVE"
        }"#;
        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.email(), "alice@example.com");
        assert!(account.id().is_none());

        let missing = r#"{"email": null, "nickname": "alice", "provider": "LOCAL", "role": "USER", "status": "ACTIVE"}"#;
        let err = serde_json::from_str::<Account>(missing).unwrap_err();
        assert!(err.to_string().contains("email is required"));
    }

    #[test]
    fn test_serialize_omits_password() {
        let json = serde_json::to_value(with_password(Some("secret123"))).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["provider"], "LOCAL");
    }
}
