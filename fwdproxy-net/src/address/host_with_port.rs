use super::{Host, split_host_and_opt_port};
use fwdproxy_core::error::{ErrorContext, OpaqueError};
use std::{
    fmt,
    net::{IpAddr, SocketAddr},
    str::FromStr,
};

/// A [`Host`] with an associated port.
///
/// ## Examples
///
/// - `example.com:80`
/// - `127.0.0.1:80`
/// - `[::1]:80`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostWithPort {
    pub host: Host,
    pub port: u16,
}

impl HostWithPort {
    /// Creates a new [`HostWithPort`].
    #[must_use]
    #[inline(always)]
    pub const fn new(host: Host, port: u16) -> Self {
        Self { host, port }
    }

    /// creates a new local ipv4 [`HostWithPort`] for the given port
    ///
    /// # Example
    ///
    /// ```
    /// use fwdproxy_net::address::HostWithPort;
    ///
    /// let addr = HostWithPort::local_ipv4(8080);
    /// assert_eq!("127.0.0.1:8080", addr.to_string());
    /// ```
    #[must_use]
    #[inline(always)]
    pub const fn local_ipv4(port: u16) -> Self {
        Self {
            host: Host::LOCALHOST_IPV4,
            port,
        }
    }

    /// creates a new local ipv6 [`HostWithPort`] for the given port.
    ///
    /// # Example
    ///
    /// ```
    /// use fwdproxy_net::address::HostWithPort;
    ///
    /// let addr = HostWithPort::local_ipv6(8080);
    /// assert_eq!("[::1]:8080", addr.to_string());
    /// ```
    #[must_use]
    #[inline(always)]
    pub const fn local_ipv6(port: u16) -> Self {
        Self {
            host: Host::LOCALHOST_IPV6,
            port,
        }
    }
}

impl From<(Host, u16)> for HostWithPort {
    fn from((host, port): (Host, u16)) -> Self {
        Self { host, port }
    }
}

impl From<(IpAddr, u16)> for HostWithPort {
    #[inline]
    fn from((ip, port): (IpAddr, u16)) -> Self {
        Self::new(Host::Address(ip), port)
    }
}

impl From<SocketAddr> for HostWithPort {
    fn from(addr: SocketAddr) -> Self {
        Self::new(Host::Address(addr.ip()), addr.port())
    }
}

impl From<HostWithPort> for Host {
    fn from(hwp: HostWithPort) -> Self {
        hwp.host
    }
}

impl TryFrom<&str> for HostWithPort {
    type Error = OpaqueError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (host, port) = split_host_and_opt_port(value)?;
        let port = port.context("missing port")?;
        Ok(Self { host, port })
    }
}

impl FromStr for HostWithPort {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl fmt::Display for HostWithPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.is_ipv6() {
            write!(f, "[{}]:{}", self.host, self.port)
        } else {
            write!(f, "{}:{}", self.host, self.port)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_brackets_ipv6() {
        let addr: HostWithPort = "[2001:db8::1]:3128".parse().unwrap();
        assert_eq!(addr.port, 3128);
        assert_eq!(addr.to_string(), "[2001:db8::1]:3128");
    }

    #[test]
    fn parse_requires_port() {
        assert!("example.com".parse::<HostWithPort>().is_err());
        let addr: HostWithPort = "Example.com:80".parse().unwrap();
        assert_eq!(addr.to_string(), "example.com:80");
    }

    #[test]
    fn from_socket_addr() {
        let addr = HostWithPort::from(SocketAddr::from(([127, 0, 0, 1], 1080)));
        assert_eq!(addr, HostWithPort::local_ipv4(1080));
    }
}
