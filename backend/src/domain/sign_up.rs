//! Raw sign-up input as submitted by a caller.
//!
//! The form is not validated here; the registration service owns every check.

use std::fmt;

use zeroize::Zeroizing;

/// Fields collected by a sign-up form.
///
/// ## Password fields
/// `password` and `repeat_password` are accepted and wiped on drop, but they
/// are never compared with each other and never stored on the created user.
/// Password matching and credential storage are not implemented yet.
///
/// # Examples
/// ```
/// use backend::domain::SignUpForm;
///
/// let form = SignUpForm::new("Bruno", "Affeldt", "email@email.com", "1234560", "1234560");
/// assert_eq!(form.first_name(), "Bruno");
/// assert_eq!(form.password(), form.repeat_password());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SignUpForm {
    first_name: String,
    last_name: String,
    email: String,
    password: Zeroizing<String>,
    repeat_password: Zeroizing<String>,
}

impl SignUpForm {
    /// Capture the raw field values.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        repeat_password: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            password: Zeroizing::new(password.into()),
            repeat_password: Zeroizing::new(repeat_password.into()),
        }
    }

    /// First name exactly as submitted.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Last name exactly as submitted.
    #[must_use]
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Email address exactly as submitted.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password as submitted.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Password confirmation as submitted.
    #[must_use]
    pub fn repeat_password(&self) -> &str {
        self.repeat_password.as_str()
    }
}

impl fmt::Debug for SignUpForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpForm")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("repeat_password", &"<redacted>")
            .finish()
    }
}
