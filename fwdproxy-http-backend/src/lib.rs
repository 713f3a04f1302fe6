//! Http client connectors for fwdproxy.
//!
//! The heart of this crate is the [`HttpForwardProxyConnector`]: it rewrites
//! a pending request into the absolute-form expected by a forward proxy and
//! hands back a ready transport connection to that proxy.
//!
//! [`HttpForwardProxyConnector`]: client::proxy::HttpForwardProxyConnector

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod client;
