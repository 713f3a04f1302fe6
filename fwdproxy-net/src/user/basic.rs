use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as ENGINE;
use bytes::Bytes;
use http::HeaderValue;
use std::fmt;

#[derive(Clone, Default, PartialEq, Eq, Hash)]
/// Basic credentials of a proxy.
///
/// Both username and password may be empty. A credential is only
/// used for authorization when at least one of them is not.
pub struct Basic {
    username: String,
    password: String,
}

impl fmt::Debug for Basic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Basic")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Basic {
    /// Creates a new [`Basic`] credential.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// View the decoded username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Set or overwrite the username with the given value.
    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set or overwrite the username with the given value.
    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = username.into();
        self
    }

    /// View the decoded password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Set or overwrite the password with the given value.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set or overwrite the password with the given value.
    pub fn set_password(&mut self, password: impl Into<String>) -> &mut Self {
        self.password = password.into();
        self
    }

    /// Returns true if both username and password are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }

    /// Serialize this [`Basic`] credential as an encoded header string,
    /// e.g. `Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ==`.
    #[must_use]
    pub fn as_header_string(&self) -> String {
        let encoded = ENGINE.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {encoded}")
    }

    /// Serialize this [`Basic`] credential as the value of a
    /// `Proxy-Authorization` (or `Authorization`) header.
    ///
    /// The value is marked as sensitive.
    #[must_use]
    #[expect(
        clippy::expect_used,
        reason = "the scheme and the base64 alphabet are visible ascii, always a valid header value"
    )]
    pub fn as_header_value(&self) -> HeaderValue {
        let mut value = HeaderValue::from_maybe_shared(Bytes::from(self.as_header_string()))
            .expect("encoded basic credential to be a valid header value");
        value.set_sensitive(true);
        value
    }
}
