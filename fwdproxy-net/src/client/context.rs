use crate::{Protocol, address::Host};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Describes the true origin a single request is meant for.
///
/// Supplied by the caller for every connect, never stored by a connector.
pub struct ConnectContext {
    /// Destination host, if known.
    ///
    /// Connectors fall back to the `Host` header of the request when absent.
    pub host: Option<Host>,
    /// Destination port.
    pub port: u16,
    /// Whether the request is meant to be encrypted end-to-end.
    pub secure_endpoint: bool,
}

impl ConnectContext {
    /// Create a new [`ConnectContext`].
    #[must_use]
    pub const fn new(host: Option<Host>, port: u16, secure_endpoint: bool) -> Self {
        Self {
            host,
            port,
            secure_endpoint,
        }
    }

    /// Create a [`ConnectContext`] for the given host,
    /// using the default port of the protocol implied by `secure_endpoint`.
    #[must_use]
    pub fn for_host(host: Host, secure_endpoint: bool) -> Self {
        Self {
            host: Some(host),
            port: Protocol::from_secure(secure_endpoint).default_port(),
            secure_endpoint,
        }
    }

    /// The [`Protocol`] the destination speaks.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        Protocol::from_secure(self.secure_endpoint)
    }

    /// Set the destination port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}
