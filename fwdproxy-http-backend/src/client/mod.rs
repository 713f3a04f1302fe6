//! Connectors establishing the transport for a [`PendingRequest`].
//!
//! Both the [`proxy::HttpForwardProxyConnector`] and the [`DirectConnector`]
//! implement [`RequestConnector`], so a client can pick either by composition.
//!
//! [`PendingRequest`]: fwdproxy_http::PendingRequest
//! [`RequestConnector`]: fwdproxy_net::client::RequestConnector

use fwdproxy_tcp::{TcpConnector, TcpStream};
use fwdproxy_tls_rustls::client::{AutoTlsStream, TlsConnector};

pub mod proxy;

mod direct;
#[doc(inline)]
pub use direct::DirectConnector;

/// The transport used by default: tcp, secured with rustls when requested.
pub type DefaultTransport = TlsConnector<TcpConnector>;

/// Connection returned by connectors using the [`DefaultTransport`],
/// either a plain or a tls secured tcp stream.
pub type ProxyConnection = AutoTlsStream<TcpStream>;
