//! TCP transport for fwdproxy.
//!
//! [`TcpConnector`] is the plain [`TransportConnector`] used to reach
//! a proxy (or origin). Encrypted transports wrap it.
//!
//! [`TransportConnector`]: fwdproxy_net::client::TransportConnector

#![cfg_attr(docsrs, feature(doc_cfg))]

#[doc(inline)]
pub use tokio::net::TcpStream;

pub mod client;
#[doc(inline)]
pub use client::{TcpConnectTimeout, TcpConnector, tcp_connect};
