use fwdproxy_core::error::{ErrorContext, OpaqueError};
use std::{
    fmt,
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// A domain name, normalised to ASCII lowercase.
pub struct Domain(String);

impl Domain {
    const MAX_LEN: usize = 253;

    /// Domain of the local machine, used when no destination host is known.
    #[must_use]
    pub fn localhost() -> Self {
        Self("localhost".to_owned())
    }

    /// View the domain as a str.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Domain {
    type Error = OpaqueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(OpaqueError::from_display("empty domain"));
        }
        if value.len() > Self::MAX_LEN {
            return Err(OpaqueError::from_display("domain exceeds max length"));
        }
        if !value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_'))
        {
            return Err(OpaqueError::from_display(format!(
                "invalid character in domain: {value:?}"
            )));
        }
        if value.starts_with('.') || value.contains("..") {
            return Err(OpaqueError::from_display(format!(
                "empty label in domain: {value:?}"
            )));
        }
        Ok(Self(value.to_ascii_lowercase()))
    }
}

impl FromStr for Domain {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Either a [`Domain`] or an [`IpAddr`].
pub enum Host {
    /// A domain name.
    Name(Domain),
    /// An IP address.
    Address(IpAddr),
}

impl Host {
    /// Local loopback address (IPv4).
    pub const LOCALHOST_IPV4: Self = Self::Address(IpAddr::V4(Ipv4Addr::LOCALHOST));
    /// Local loopback address (IPv6).
    pub const LOCALHOST_IPV6: Self = Self::Address(IpAddr::V6(Ipv6Addr::LOCALHOST));

    /// The `localhost` domain.
    #[must_use]
    pub fn localhost() -> Self {
        Self::Name(Domain::localhost())
    }

    /// Returns true if this host is an IPv6 address,
    /// which needs brackets when combined with a port.
    #[must_use]
    pub fn is_ipv6(&self) -> bool {
        matches!(self, Self::Address(IpAddr::V6(_)))
    }

    /// Format the host as it would appear in the authority of an URI.
    #[must_use]
    pub fn to_uri_host(&self) -> String {
        match self {
            Self::Address(IpAddr::V6(ip)) => format!("[{ip}]"),
            host => host.to_string(),
        }
    }
}

impl From<Domain> for Host {
    fn from(domain: Domain) -> Self {
        Self::Name(domain)
    }
}

impl From<IpAddr> for Host {
    fn from(ip: IpAddr) -> Self {
        Self::Address(ip)
    }
}

impl From<Ipv4Addr> for Host {
    fn from(ip: Ipv4Addr) -> Self {
        Self::Address(IpAddr::V4(ip))
    }
}

impl From<Ipv6Addr> for Host {
    fn from(ip: Ipv6Addr) -> Self {
        Self::Address(IpAddr::V6(ip))
    }
}

impl TryFrom<&str> for Host {
    type Error = OpaqueError;

    /// Parse a host, accepting IPv6 literals with or without brackets.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if let Some(inner) = value.strip_prefix('[') {
            let inner = inner
                .strip_suffix(']')
                .context("missing closing bracket for ipv6 host")?;
            let ip: Ipv6Addr = inner.parse().context("parse bracketed ipv6 host")?;
            return Ok(ip.into());
        }
        if let Ok(ip) = value.parse::<IpAddr>() {
            return Ok(ip.into());
        }
        Ok(Self::Name(value.try_into()?))
    }
}

impl FromStr for Host {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(domain) => fmt::Display::fmt(domain, f),
            Self::Address(ip) => fmt::Display::fmt(ip, f),
        }
    }
}

impl serde::Serialize for Host {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for Host {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
