use crate::verify::NoServerCertVerifier;
use fwdproxy_core::error::{ErrorContext, OpaqueError};
use fwdproxy_net::address::Host;
use rustls::client::danger::ServerCertVerifier;
use rustls::{ALL_VERSIONS, ClientConfig, RootCertStore};
use rustls_pki_types::ServerName;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone)]
/// Configuration used by the [`super::TlsConnector`] to secure a connection.
///
/// Created by converting a [`rustls::ClientConfig`] into it directly,
/// or by using [`TlsConnectorDataBuilder`] to build this in a more ergonomic way.
pub struct TlsConnectorData {
    pub client_config: Arc<ClientConfig>,
    pub server_name: Option<Host>,
}

impl From<ClientConfig> for TlsConnectorData {
    #[inline]
    fn from(value: ClientConfig) -> Self {
        Arc::new(value).into()
    }
}

impl From<Arc<ClientConfig>> for TlsConnectorData {
    fn from(value: Arc<ClientConfig>) -> Self {
        Self {
            client_config: value,
            server_name: None,
        }
    }
}

impl TlsConnectorData {
    /// Create a default [`TlsConnectorData`] that is focussed
    /// on providing http/1.1 connections, verifying certificates
    /// against the webpki root store.
    #[must_use]
    pub fn new_http_1() -> Self {
        static DATA: OnceLock<TlsConnectorData> = OnceLock::new();
        DATA.get_or_init(|| {
            TlsConnectorDataBuilder::new()
                .with_alpn_protocols_http_1()
                .build()
        })
        .clone()
    }

    /// Same as [`Self::new_http_1`] but accepting any server certificate.
    #[must_use]
    pub fn new_http_1_insecure() -> Self {
        static DATA: OnceLock<TlsConnectorData> = OnceLock::new();
        DATA.get_or_init(|| {
            TlsConnectorDataBuilder::new()
                .with_alpn_protocols_http_1()
                .with_no_cert_verifier()
                .build()
        })
        .clone()
    }
}

/// [`TlsConnectorDataBuilder`] can be used to construct a [`rustls::ClientConfig`]
/// for the common use cases of a forward proxy client.
///
/// If this doesn't work for your use case, no problem,
/// [`TlsConnectorData`] can be created from a raw [`rustls::ClientConfig`].
pub struct TlsConnectorDataBuilder {
    client_config: ClientConfig,
    server_name: Option<Host>,
}

impl Default for TlsConnectorDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ClientConfig> for TlsConnectorDataBuilder {
    fn from(value: ClientConfig) -> Self {
        Self {
            client_config: value,
            server_name: None,
        }
    }
}

impl TlsConnectorDataBuilder {
    /// Create a [`TlsConnectorDataBuilder`] with a starting config of: support for all tls versions,
    /// global root certificate store, and no client auth
    #[must_use]
    pub fn new() -> Self {
        let config = ClientConfig::builder_with_protocol_versions(ALL_VERSIONS)
            .with_root_certificates(client_root_certs())
            .with_no_client_auth();
        Self {
            client_config: config,
            server_name: None,
        }
    }

    /// Set the protocols advertised in the alpn extension.
    pub fn set_alpn_protocols(&mut self, protos: &[&[u8]]) -> &mut Self {
        self.client_config.alpn_protocols = protos.iter().map(|proto| proto.to_vec()).collect();
        self
    }

    /// Same as [`Self::set_alpn_protocols`] but consuming self
    #[must_use]
    pub fn with_alpn_protocols(mut self, protos: &[&[u8]]) -> Self {
        self.set_alpn_protocols(protos);
        self
    }

    /// Advertise `http/1.1` as the only alpn protocol,
    /// the only http version spoken to a forward proxy.
    pub fn set_alpn_protocols_http_1(&mut self) -> &mut Self {
        self.set_alpn_protocols(&[b"http/1.1"])
    }

    /// Same as [`Self::set_alpn_protocols_http_1`] but consuming self
    #[must_use]
    pub fn with_alpn_protocols_http_1(mut self) -> Self {
        self.set_alpn_protocols_http_1();
        self
    }

    /// Set certificate verifier that will be used to verify certs
    pub fn set_cert_verifier(&mut self, verifier: Arc<dyn ServerCertVerifier>) -> &mut Self {
        self.client_config
            .dangerous()
            .set_certificate_verifier(verifier);
        self
    }

    /// Same as [`Self::set_cert_verifier`] but consuming self
    #[must_use]
    pub fn with_cert_verifier(mut self, verifier: Arc<dyn ServerCertVerifier>) -> Self {
        self.set_cert_verifier(verifier);
        self
    }

    /// Set certificate verifier to a custom one that will allow all certificates, resulting
    /// in certificates not being verified.
    pub fn set_no_cert_verifier(&mut self) -> &mut Self {
        self.set_cert_verifier(Arc::new(NoServerCertVerifier::default()))
    }

    /// Same as [`Self::set_no_cert_verifier`] but consuming self
    #[must_use]
    pub fn with_no_cert_verifier(mut self) -> Self {
        self.set_no_cert_verifier();
        self
    }

    /// Set servername that will be used for SNI
    pub fn set_server_name(&mut self, server_name: Host) -> &mut Self {
        self.server_name = Some(server_name);
        self
    }

    /// Same as [`Self::set_server_name`] but consuming self
    #[must_use]
    pub fn with_server_name(mut self, server_name: Host) -> Self {
        self.set_server_name(server_name);
        self
    }

    /// Build [`TlsConnectorData`] from the current config
    #[must_use]
    pub fn build(self) -> TlsConnectorData {
        TlsConnectorData {
            client_config: Arc::new(self.client_config),
            server_name: self.server_name,
        }
    }
}

/// Root certificates of the webpki root store, shared by all configs.
pub fn client_root_certs() -> Arc<RootCertStore> {
    static ROOT_CERTS: OnceLock<Arc<RootCertStore>> = OnceLock::new();
    ROOT_CERTS
        .get_or_init(|| {
            let mut root_storage = RootCertStore::empty();
            root_storage.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
            Arc::new(root_storage)
        })
        .clone()
}

pub(super) fn host_to_server_name(host: Host) -> Result<ServerName<'static>, OpaqueError> {
    match host {
        Host::Name(domain) => ServerName::try_from(domain.as_str().to_owned())
            .context("convert domain into tls server name"),
        Host::Address(ip) => Ok(ServerName::IpAddress(ip.into())),
    }
}
