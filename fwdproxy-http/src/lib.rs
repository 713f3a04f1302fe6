//! Http request types for fwdproxy.
//!
//! - [`PendingRequest`]: an outgoing HTTP/1 request whose head is only
//!   serialized once asked for;
//! - [`rewrite`]: the request rewriter turning an origin-form target into
//!   the absolute-form target expected by forward proxies;
//! - [`reconcile`]: compatibility shim patching early serialized heads.

#![cfg_attr(docsrs, feature(doc_cfg))]

#[doc(inline)]
pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, Uri, Version, header};

pub mod head;
pub mod reconcile;
pub mod rewrite;

mod request;
#[doc(inline)]
pub use request::PendingRequest;

#[doc(inline)]
pub use rewrite::{InvalidRequestTarget, RewrittenTarget};
