use super::{AutoTlsStream, TlsConnectorData, connector_data::host_to_server_name};
use fwdproxy_core::Layer;
use fwdproxy_core::error::{BoxError, ErrorContext, static_str_error};
use fwdproxy_core::telemetry::tracing;
use fwdproxy_net::client::{TransportConnector, TransportRequest};
use std::fmt;
use tokio_rustls::TlsConnector as RustlsConnector;

static_str_error! {
    /// Returned when the configured connect timeout elapsed
    /// before the tls handshake completed.
    pub struct TlsConnectTimeout = "tls connect timed out";
}

/// A [`Layer`] which wraps the given transport connector with a [`TlsConnector`].
#[derive(Debug, Clone, Default)]
pub struct TlsConnectorLayer {
    connector_data: Option<TlsConnectorData>,
}

impl TlsConnectorLayer {
    /// Create a new [`TlsConnectorLayer`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            connector_data: None,
        }
    }

    /// Attach [`TlsConnectorData`] to this [`TlsConnectorLayer`],
    /// to be used instead of the shared default config.
    #[must_use]
    pub fn with_connector_data(mut self, connector_data: TlsConnectorData) -> Self {
        self.connector_data = Some(connector_data);
        self
    }
}

impl<S> Layer<S> for TlsConnectorLayer {
    type Service = TlsConnector<S>;

    fn layer(&self, inner: S) -> Self::Service {
        TlsConnector {
            inner,
            connector_data: self.connector_data.clone(),
        }
    }
}

/// A transport connector securing the stream of its inner connector,
/// for requests which ask for an encrypted transport.
///
/// Other requests get the inner stream back as-is,
/// both wrapped as an [`AutoTlsStream`].
pub struct TlsConnector<S> {
    inner: S,
    connector_data: Option<TlsConnectorData>,
}

impl<S: fmt::Debug> fmt::Debug for TlsConnector<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsConnector")
            .field("inner", &self.inner)
            .field("connector_data", &self.connector_data)
            .finish()
    }
}

impl<S: Clone> Clone for TlsConnector<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            connector_data: self.connector_data.clone(),
        }
    }
}

impl<S: Default> Default for TlsConnector<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> TlsConnector<S> {
    /// Creates a new [`TlsConnector`].
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            connector_data: None,
        }
    }

    /// Attach [`TlsConnectorData`] to this [`TlsConnector`],
    /// to be used instead of the shared default config.
    ///
    /// Takes precedence over the tls options of a [`TransportRequest`].
    #[must_use]
    pub fn with_connector_data(mut self, connector_data: TlsConnectorData) -> Self {
        self.connector_data = Some(connector_data);
        self
    }

    /// Attach [`TlsConnectorData`] to this [`TlsConnector`].
    pub fn set_connector_data(&mut self, connector_data: TlsConnectorData) -> &mut Self {
        self.connector_data = Some(connector_data);
        self
    }

    fwdproxy_core::macros::define_inner_service_accessors!();
}

impl<S> TransportConnector for TlsConnector<S>
where
    S: TransportConnector,
{
    type Connection = AutoTlsStream<S::Connection>;
    type Error = BoxError;

    async fn connect(&self, req: TransportRequest) -> Result<Self::Connection, Self::Error> {
        let Some(timeout) = req.options.connect_timeout else {
            return self.connect_inner(req).await;
        };
        let authority = req.authority.clone();
        match tokio::time::timeout(timeout, self.connect_inner(req)).await {
            Ok(result) => result,
            Err(elapsed) => {
                tracing::debug!(
                    server.address = %authority.host,
                    server.port = authority.port,
                    "tls connect timed out after {timeout:?}: {elapsed}",
                );
                Err(TlsConnectTimeout.into())
            }
        }
    }
}

impl<S> TlsConnector<S>
where
    S: TransportConnector,
{
    async fn connect_inner(
        &self,
        req: TransportRequest,
    ) -> Result<AutoTlsStream<S::Connection>, BoxError> {
        let secure = req.secure;
        let authority = req.authority.clone();
        let tls_options = req.options.tls.clone();

        let conn = self.inner.connect(req).await.map_err(Into::into)?;

        if !secure {
            tracing::trace!(
                server.address = %authority.host,
                server.port = authority.port,
                "TlsConnector: transport not secure, return inner connection",
            );
            return Ok(AutoTlsStream::plain(conn));
        }

        let connector_data = match &self.connector_data {
            Some(data) => data.clone(),
            None if tls_options.insecure_skip_verify => TlsConnectorData::new_http_1_insecure(),
            None => TlsConnectorData::new_http_1(),
        };

        let server_host = tls_options
            .server_name
            .or(connector_data.server_name)
            .unwrap_or_else(|| authority.host.clone());
        tracing::trace!(
            server.address = %authority.host,
            server.port = authority.port,
            tls.server_name = %server_host,
            "TlsConnector: attempt to secure inner connection",
        );
        let server_name = host_to_server_name(server_host)?;

        let stream = RustlsConnector::from(connector_data.client_config)
            .connect(server_name, conn)
            .await
            .context("tls handshake")?;

        tracing::trace!(
            server.address = %authority.host,
            server.port = authority.port,
            "TlsConnector: established tls connection",
        );

        Ok(AutoTlsStream::secure(stream))
    }
}
