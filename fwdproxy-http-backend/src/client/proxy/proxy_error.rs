use fwdproxy_core::error::BoxError;
use fwdproxy_http::InvalidRequestTarget;
use std::fmt;

#[derive(Debug)]
/// Error returned by the [`HttpForwardProxyConnector`].
///
/// [`HttpForwardProxyConnector`]: super::HttpForwardProxyConnector
pub enum ForwardProxyError {
    /// The request target could not be resolved into an absolute URI.
    ///
    /// Returned before any connection attempt is made.
    InvalidRequestTarget(InvalidRequestTarget),
    /// The transport connection to the proxy could not be established
    /// (e.g. dns, refused, timeout or tls handshake failure).
    ///
    /// Composite callers can treat this as "try the next proxy".
    ProxyConnectionFailed(BoxError),
}

impl ForwardProxyError {
    /// Returns true if this is a [`ForwardProxyError::ProxyConnectionFailed`] error.
    #[must_use]
    pub fn is_proxy_connection_failed(&self) -> bool {
        matches!(self, Self::ProxyConnectionFailed(_))
    }

    /// Returns true if this is a [`ForwardProxyError::InvalidRequestTarget`] error.
    #[must_use]
    pub fn is_invalid_request_target(&self) -> bool {
        matches!(self, Self::InvalidRequestTarget(_))
    }
}

impl fmt::Display for ForwardProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRequestTarget(err) => write!(f, "forward proxy error: {err}"),
            Self::ProxyConnectionFailed(err) => {
                write!(f, "forward proxy error: proxy connection failed: {err}")
            }
        }
    }
}

impl From<InvalidRequestTarget> for ForwardProxyError {
    fn from(value: InvalidRequestTarget) -> Self {
        Self::InvalidRequestTarget(value)
    }
}

impl std::error::Error for ForwardProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidRequestTarget(err) => Some(err),
            Self::ProxyConnectionFailed(err) => Some(err.as_ref()),
        }
    }
}
