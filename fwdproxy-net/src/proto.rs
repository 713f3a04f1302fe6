use fwdproxy_core::error::static_str_error;
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Protocols a forward proxy can be reached over.
pub struct Protocol(ProtocolKind);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum ProtocolKind {
    /// The `http` protocol.
    Http,
    /// The `https` protocol.
    Https,
}

impl Protocol {
    /// `HTTP` protocol scheme
    pub const HTTP_SCHEME: &str = "http";
    /// `HTTP` protocol default port
    pub const HTTP_DEFAULT_PORT: u16 = 80;
    /// `HTTP` protocol.
    pub const HTTP: Self = Self(ProtocolKind::Http);

    /// `HTTPS` protocol scheme
    pub const HTTPS_SCHEME: &str = "https";
    /// `HTTPS` protocol default port
    pub const HTTPS_DEFAULT_PORT: u16 = 443;
    /// `HTTPS` protocol.
    pub const HTTPS: Self = Self(ProtocolKind::Https);

    /// Create the [`Protocol`] matching the (end-to-end) security of a connection.
    #[must_use]
    pub const fn from_secure(secure: bool) -> Self {
        if secure { Self::HTTPS } else { Self::HTTP }
    }

    /// Returns `true` if this protocol is "secure" by itself.
    #[must_use]
    pub const fn is_secure(&self) -> bool {
        matches!(self.0, ProtocolKind::Https)
    }

    /// Returns the default port for this [`Protocol`].
    #[must_use]
    pub const fn default_port(&self) -> u16 {
        match self.0 {
            ProtocolKind::Http => Self::HTTP_DEFAULT_PORT,
            ProtocolKind::Https => Self::HTTPS_DEFAULT_PORT,
        }
    }

    /// Returns the [`Protocol`] as its scheme str.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self.0 {
            ProtocolKind::Http => Self::HTTP_SCHEME,
            ProtocolKind::Https => Self::HTTPS_SCHEME,
        }
    }
}

static_str_error! {
    /// Returned for schemes other than `http` and `https`.
    pub struct InvalidProtocolStr = "invalid or unsupported protocol scheme";
}

impl TryFrom<&str> for Protocol {
    type Error = InvalidProtocolStr;

    /// Matches the scheme case-insensitive; a single trailing colon
    /// (as in `"https:"`) is tolerated.
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.strip_suffix(':').unwrap_or(s);
        if s.eq_ignore_ascii_case(Self::HTTPS_SCHEME) {
            Ok(Self::HTTPS)
        } else if s.eq_ignore_ascii_case(Self::HTTP_SCHEME) {
            Ok(Self::HTTP)
        } else {
            Err(InvalidProtocolStr)
        }
    }
}

impl FromStr for Protocol {
    type Err = InvalidProtocolStr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split the scheme of an URI-like string from its remainder.
///
/// Returns `None` as protocol if the input has no `scheme://` prefix.
pub(crate) fn try_to_extract_protocol_from_uri_scheme(
    s: &str,
) -> Result<(Option<Protocol>, &str), InvalidProtocolStr> {
    match s.split_once("://") {
        Some((scheme, rest))
            if !scheme.is_empty()
                && scheme
                    .bytes()
                    .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')) =>
        {
            Ok((Some(scheme.try_into()?), rest))
        }
        _ => Ok((None, s)),
    }
}
