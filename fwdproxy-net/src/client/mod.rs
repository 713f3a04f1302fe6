//! Client-side connector vocabulary.

mod context;
#[doc(inline)]
pub use context::ConnectContext;

mod conn;
#[doc(inline)]
pub use conn::{RequestConnector, TransportConnector, TransportRequest};
