//! Options forwarded verbatim to the transport layer.

use crate::address::Host;
use serde::{Deserialize, Serialize};
use std::{net::IpAddr, time::Duration};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Options used to open a transport connection.
///
/// Deserializes from a (partial) map, missing fields take their default:
///
/// ```
/// use fwdproxy_net::transport::ConnectOptions;
/// use std::time::Duration;
///
/// let opts: ConnectOptions = serde_json::from_str(r#"{"connect_timeout": 1500}"#).unwrap();
/// assert_eq!(opts.connect_timeout, Some(Duration::from_millis(1500)));
/// assert!(opts.tcp_nodelay);
/// ```
pub struct ConnectOptions {
    /// Upper bound for the entire connect (dns, tcp and tls handshake),
    /// serialized in milliseconds.
    #[serde(with = "duration_ms")]
    pub connect_timeout: Option<Duration>,
    /// Local address to bind the socket to before connecting.
    pub bind_address: Option<IpAddr>,
    /// Disable Nagle's algorithm on the socket.
    pub tcp_nodelay: bool,
    /// Options for encrypted transports.
    pub tls: TlsClientOptions,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            connect_timeout: None,
            bind_address: None,
            tcp_nodelay: true,
            tls: TlsClientOptions::default(),
        }
    }
}

impl ConnectOptions {
    /// Create default [`ConnectOptions`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the connect timeout.
    pub fn set_connect_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Set the local address to bind to.
    #[must_use]
    pub fn with_bind_address(mut self, addr: IpAddr) -> Self {
        self.bind_address = Some(addr);
        self
    }

    /// Set the local address to bind to.
    pub fn set_bind_address(&mut self, addr: IpAddr) -> &mut Self {
        self.bind_address = Some(addr);
        self
    }

    /// Enable or disable `TCP_NODELAY`.
    #[must_use]
    pub fn with_tcp_nodelay(mut self, nodelay: bool) -> Self {
        self.tcp_nodelay = nodelay;
        self
    }

    /// Enable or disable `TCP_NODELAY`.
    pub fn set_tcp_nodelay(&mut self, nodelay: bool) -> &mut Self {
        self.tcp_nodelay = nodelay;
        self
    }

    /// Set the [`TlsClientOptions`].
    #[must_use]
    pub fn with_tls(mut self, tls: TlsClientOptions) -> Self {
        self.tls = tls;
        self
    }

    /// Set the [`TlsClientOptions`].
    pub fn set_tls(&mut self, tls: TlsClientOptions) -> &mut Self {
        self.tls = tls;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Tls options used when the transport is encrypted.
pub struct TlsClientOptions {
    /// Accept any server certificate. Only meant for testing.
    pub insecure_skip_verify: bool,
    /// Server name to use for SNI and verification,
    /// defaults to the host being connected to.
    pub server_name: Option<Host>,
}

impl TlsClientOptions {
    /// Accept any server certificate.
    #[must_use]
    pub fn with_insecure_skip_verify(mut self, skip: bool) -> Self {
        self.insecure_skip_verify = skip;
        self
    }

    /// Override the server name.
    #[must_use]
    pub fn with_server_name(mut self, server_name: Host) -> Self {
        self.server_name = Some(server_name);
        self
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub(super) fn serialize<S>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        value
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .serialize(serializer)
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
