use fwdproxy_core::telemetry::{TraceEvent, tracing};
use fwdproxy_net::address::HostWithPort;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Events recorded by the [`HttpForwardProxyConnector`] into its
/// [`EventLog`], in the order they happen during a single connect.
///
/// Credentials never end up in an event.
///
/// [`HttpForwardProxyConnector`]: super::HttpForwardProxyConnector
/// [`EventLog`]: fwdproxy_core::telemetry::EventLog
pub enum ForwardProxyEvent {
    /// The request target got rewritten into absolute-form.
    TargetRewritten {
        /// The new request target.
        target: String,
        /// Whether a `Proxy-Authorization` header was set.
        proxy_authorization: bool,
    },
    /// An early serialized head got replaced by the rewritten one.
    HeadersReconciled {
        /// Length of the replaced head.
        stale_len: usize,
        /// Length of the new head.
        fresh_len: usize,
        /// Amount of body bytes kept.
        preserved_len: usize,
    },
    /// A transport connection to the proxy is being opened.
    Connecting {
        /// Address of the proxy.
        proxy: HostWithPort,
        /// Whether the transport is encrypted.
        secure: bool,
    },
    /// The transport connection to the proxy is ready.
    Connected {
        /// Address of the proxy.
        proxy: HostWithPort,
        /// Whether the transport is encrypted.
        secure: bool,
    },
    /// The transport connection to the proxy failed.
    ConnectFailed {
        /// Address of the proxy.
        proxy: HostWithPort,
        /// Rendered transport error.
        error: String,
    },
}

impl TraceEvent for ForwardProxyEvent {
    fn trace(&self) {
        match self {
            Self::TargetRewritten {
                target,
                proxy_authorization,
            } => tracing::trace!(
                url.full = %target,
                proxy.authorization = proxy_authorization,
                "forward proxy: request target rewritten",
            ),
            Self::HeadersReconciled {
                stale_len,
                fresh_len,
                preserved_len,
            } => tracing::debug!(
                stale_len,
                fresh_len,
                preserved_len,
                "forward proxy: replaced early serialized request head",
            ),
            Self::Connecting { proxy, secure } => tracing::trace!(
                proxy.address = %proxy.host,
                proxy.port = proxy.port,
                proxy.secure = secure,
                "forward proxy: connecting to proxy",
            ),
            Self::Connected { proxy, secure } => tracing::debug!(
                proxy.address = %proxy.host,
                proxy.port = proxy.port,
                proxy.secure = secure,
                "forward proxy: connection to proxy established",
            ),
            Self::ConnectFailed { proxy, error } => tracing::debug!(
                proxy.address = %proxy.host,
                proxy.port = proxy.port,
                "forward proxy: failed to connect to proxy: {error}",
            ),
        }
    }
}
