use super::DefaultTransport;
use fwdproxy_core::error::BoxError;
use fwdproxy_core::telemetry::tracing;
use fwdproxy_http::{PendingRequest, rewrite::destination_host};
use fwdproxy_net::{
    address::HostWithPort,
    client::{ConnectContext, RequestConnector, TransportConnector, TransportRequest},
    transport::ConnectOptions,
};

/// A [`RequestConnector`] connecting straight to the destination of a request.
///
/// The request is left as-is: its target stays in origin-form
/// and no proxy headers are added.
#[derive(Debug, Clone, Default)]
pub struct DirectConnector<T = DefaultTransport> {
    transport: T,
    options: ConnectOptions,
}

impl<T> DirectConnector<T> {
    /// Create a new [`DirectConnector`] using the given transport connector.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            options: ConnectOptions::default(),
        }
    }

    /// Set the [`ConnectOptions`] forwarded to the transport for each connection.
    #[must_use]
    pub fn with_connect_options(mut self, options: ConnectOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the [`ConnectOptions`] forwarded to the transport for each connection.
    pub fn set_connect_options(&mut self, options: ConnectOptions) -> &mut Self {
        self.options = options;
        self
    }

    /// The [`ConnectOptions`] forwarded to the transport.
    pub fn connect_options(&self) -> &ConnectOptions {
        &self.options
    }

    /// Gets a reference to the transport connector.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: TransportConnector> RequestConnector<PendingRequest> for DirectConnector<T> {
    type Connection = T::Connection;
    type Error = BoxError;

    async fn connect(
        &self,
        req: &mut PendingRequest,
        ctx: &ConnectContext,
    ) -> Result<Self::Connection, Self::Error> {
        let authority = HostWithPort::new(
            destination_host(ctx.host.as_ref(), req.headers()),
            ctx.port,
        );
        tracing::trace!(
            server.address = %authority.host,
            server.port = authority.port,
            secure = ctx.secure_endpoint,
            "direct connect to destination",
        );
        let request = TransportRequest::new(authority, ctx.secure_endpoint)
            .with_options(self.options.clone());
        self.transport.connect(request).await.map_err(Into::into)
    }
}
