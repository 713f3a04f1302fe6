use super::ConnectContext;
use crate::{address::HostWithPort, stream::Stream, transport::ConnectOptions};
use fwdproxy_core::error::BoxError;
use std::sync::Arc;

/// The single-method agent interface: establish a connection for a request.
///
/// Implemented by the forward proxy connector as well as by connectors
/// going straight to the origin, so callers can pick one by composition.
/// The request is borrowed mutably, as a connector may have to rewrite it
/// (e.g. into absolute-form) before it is written to the returned connection.
pub trait RequestConnector<Request>: Send + Sync + 'static {
    /// Connection returned by the [`RequestConnector`].
    type Connection: Send + 'static;
    /// Error returned in case of connection / setup failure.
    type Error: Into<BoxError> + Send + 'static;

    /// Establish a ready connection for the given request.
    ///
    /// Only resolves once the connection is usable, or failed.
    fn connect(
        &self,
        req: &mut Request,
        ctx: &ConnectContext,
    ) -> impl Future<Output = Result<Self::Connection, Self::Error>> + Send;
}

impl<Request, C> RequestConnector<Request> for Arc<C>
where
    C: RequestConnector<Request>,
{
    type Connection = C::Connection;
    type Error = C::Error;

    fn connect(
        &self,
        req: &mut Request,
        ctx: &ConnectContext,
    ) -> impl Future<Output = Result<Self::Connection, Self::Error>> + Send {
        (**self).connect(req, ctx)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Request to open a transport connection.
pub struct TransportRequest {
    /// Authority to connect to.
    pub authority: HostWithPort,
    /// Whether the transport has to be encrypted.
    pub secure: bool,
    /// Options to connect with, forwarded as-is.
    pub options: ConnectOptions,
}

impl TransportRequest {
    /// Create a new [`TransportRequest`] with default [`ConnectOptions`].
    #[must_use]
    pub fn new(authority: HostWithPort, secure: bool) -> Self {
        Self {
            authority,
            secure,
            options: ConnectOptions::default(),
        }
    }

    /// Set the [`ConnectOptions`].
    #[must_use]
    pub fn with_options(mut self, options: ConnectOptions) -> Self {
        self.options = options;
        self
    }
}

/// Opens plain or encrypted byte streams.
///
/// The returned future only resolves once the stream is ready
/// for I/O (e.g. tcp connected and tls handshake completed).
pub trait TransportConnector: Send + Sync + 'static {
    /// Stream returned by the [`TransportConnector`].
    type Connection: Stream + Unpin;
    /// Error returned in case the stream could not be opened.
    type Error: Into<BoxError> + Send + 'static;

    /// Open a stream as described by the [`TransportRequest`].
    fn connect(
        &self,
        req: TransportRequest,
    ) -> impl Future<Output = Result<Self::Connection, Self::Error>> + Send;
}

impl<C> TransportConnector for Arc<C>
where
    C: TransportConnector,
{
    type Connection = C::Connection;
    type Error = C::Error;

    fn connect(
        &self,
        req: TransportRequest,
    ) -> impl Future<Output = Result<Self::Connection, Self::Error>> + Send {
        (**self).connect(req)
    }
}
