//! Tls client support for fwdproxy.

/// A client-side tls stream, as produced by the [`TlsConnector`].
pub type RustlsTlsStream<S> = tokio_rustls::client::TlsStream<S>;

mod tls_stream_auto;
#[doc(inline)]
pub use tls_stream_auto::AutoTlsStream;

mod connector;
#[doc(inline)]
pub use connector::{TlsConnectTimeout, TlsConnector, TlsConnectorLayer};

mod connector_data;
#[doc(inline)]
pub use connector_data::{TlsConnectorData, TlsConnectorDataBuilder, client_root_certs};
