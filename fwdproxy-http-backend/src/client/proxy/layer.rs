use super::HttpForwardProxyConnector;
use fwdproxy_core::Layer;
use fwdproxy_core::error::{ErrorContext, OpaqueError};
use fwdproxy_net::{address::ProxyAddress, transport::ConnectOptions};

/// A [`Layer`] which wraps a transport connector
/// into an [`HttpForwardProxyConnector`] for a fixed proxy.
#[derive(Debug, Clone)]
pub struct HttpForwardProxyLayer {
    endpoint: ProxyAddress,
    options: ConnectOptions,
}

impl HttpForwardProxyLayer {
    /// Create a new [`HttpForwardProxyLayer`] for the given proxy.
    #[must_use]
    pub fn new(endpoint: ProxyAddress) -> Self {
        Self {
            endpoint,
            options: ConnectOptions::default(),
        }
    }

    /// Create a new [`HttpForwardProxyLayer`] for the proxy at the given URI.
    pub fn try_new(proxy: &str) -> Result<Self, OpaqueError> {
        let endpoint: ProxyAddress = proxy.parse().context("parse proxy address")?;
        Ok(Self::new(endpoint))
    }

    /// Set the [`ConnectOptions`] given to every produced connector.
    #[must_use]
    pub fn with_connect_options(mut self, options: ConnectOptions) -> Self {
        self.options = options;
        self
    }

    /// Set the [`ConnectOptions`] given to every produced connector.
    pub fn set_connect_options(&mut self, options: ConnectOptions) -> &mut Self {
        self.options = options;
        self
    }
}

impl<T> Layer<T> for HttpForwardProxyLayer {
    type Service = HttpForwardProxyConnector<T>;

    fn layer(&self, transport: T) -> Self::Service {
        HttpForwardProxyConnector::with_transport(self.endpoint.clone(), transport)
            .with_connect_options(self.options.clone())
    }
}
