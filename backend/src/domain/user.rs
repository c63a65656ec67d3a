//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned by the [`User`] constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// Identifier was empty.
    EmptyId,
    /// Identifier was not a canonical UUID string.
    InvalidId,
    /// First name was empty once trimmed of whitespace.
    EmptyFirstName,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyFirstName => write!(f, "User's first name is empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an already parsed UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Given name of the user.
///
/// The value is kept exactly as supplied; only blankness is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FirstName(String);

impl FirstName {
    /// Validate and construct a [`FirstName`] from owned input.
    pub fn new(first_name: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(first_name.into())
    }

    fn from_owned(first_name: String) -> Result<Self, UserValidationError> {
        if first_name.trim().is_empty() {
            return Err(UserValidationError::EmptyFirstName);
        }
        Ok(Self(first_name))
    }
}

impl AsRef<str> for FirstName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FirstName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<FirstName> for String {
    fn from(value: FirstName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FirstName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Registered user.
///
/// ## Invariants
/// - `id` must be a valid UUID string.
/// - `first_name` must be non-empty once trimmed of whitespace.
///
/// `last_name` and `email` are carried verbatim; sign-up does not validate
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    first_name: FirstName,
    last_name: String,
    email: String,
}

impl User {
    /// Build a new [`User`] from validated components.
    #[must_use]
    pub fn new(
        id: UserId,
        first_name: FirstName,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Fallible constructor enforcing identifier and first name invariants.
    ///
    /// Prefer [`User::new`] when components are already validated.
    pub fn try_from_strings(
        id: impl AsRef<str>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let id = UserId::new(id)?;
        let first_name = FirstName::new(first_name)?;

        Ok(Self::new(id, first_name, last_name, email))
    }

    /// Stable user identifier.
    #[must_use]
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Given name.
    #[must_use]
    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    /// Family name, as supplied at sign-up.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Contact address the confirmation email is sent to.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    #[serde(alias = "first_name")]
    first_name: String,
    #[serde(alias = "last_name")]
    last_name: String,
    email: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            first_name,
            last_name,
            email,
        } = value;
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name,
            email,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_strings(value.id, value.first_name, value.last_name, value.email)
    }
}
