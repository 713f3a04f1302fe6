use super::Host;
use fwdproxy_core::error::{ErrorContext, OpaqueError};

/// Split an authority-like `host[:port]` str into its [`Host`] and optional port.
///
/// IPv6 hosts have to be bracketed when a port is given.
///
/// ```
/// use fwdproxy_net::address::{Host, split_host_and_opt_port};
///
/// let (host, port) = split_host_and_opt_port("[::1]:8080").unwrap();
/// assert_eq!(host, Host::LOCALHOST_IPV6);
/// assert_eq!(port, Some(8080));
/// ```
pub fn split_host_and_opt_port(s: &str) -> Result<(Host, Option<u16>), OpaqueError> {
    if s.starts_with('[') {
        let end = s.find(']').context("missing closing bracket for ipv6 host")?;
        let host: Host = s[..=end].parse()?;
        let rest = &s[end + 1..];
        if rest.is_empty() {
            return Ok((host, None));
        }
        let port = rest
            .strip_prefix(':')
            .context("unexpected data after bracketed ipv6 host")?;
        return Ok((host, Some(parse_port(port)?)));
    }

    match s.rsplit_once(':') {
        // more than one colon: unbracketed ipv6 literal without port
        Some((host, _)) if host.contains(':') => Ok((s.parse()?, None)),
        Some((host, port)) => Ok((host.parse()?, Some(parse_port(port)?))),
        None => Ok((s.parse()?, None)),
    }
}

fn parse_port(s: &str) -> Result<u16, OpaqueError> {
    s.parse::<u16>()
        .with_context(|| format!("parse port {s:?}"))
}
