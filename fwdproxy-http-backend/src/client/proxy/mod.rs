//! Http forward proxy support.
//!
//! Requests sent through a forward proxy carry an absolute-form target
//! (`GET http://example.com:80/ HTTP/1.1`) and, when credentials are
//! configured, a `Proxy-Authorization` header. The connection itself goes
//! to the proxy, plain or encrypted depending on the proxy's own scheme.
//! No `CONNECT` tunnel is ever negotiated.

mod connector;
#[doc(inline)]
pub use connector::HttpForwardProxyConnector;

mod layer;
#[doc(inline)]
pub use layer::HttpForwardProxyLayer;

mod proxy_error;
#[doc(inline)]
pub use proxy_error::ForwardProxyError;

mod event;
#[doc(inline)]
pub use event::ForwardProxyEvent;
