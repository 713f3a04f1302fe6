//! Tcp client connector.

use fwdproxy_core::error::{BoxError, ErrorContext, OpaqueError, static_str_error};
use fwdproxy_core::telemetry::tracing;
use fwdproxy_net::{
    address::{Host, HostWithPort},
    client::{TransportConnector, TransportRequest},
    transport::ConnectOptions,
};
use std::net::{IpAddr, SocketAddr};
use tokio::net::{TcpSocket, TcpStream};

static_str_error! {
    /// Returned when the configured connect timeout elapsed.
    pub struct TcpConnectTimeout = "tcp connect timed out";
}

#[derive(Debug, Clone, Default)]
#[non_exhaustive]
/// A [`TransportConnector`] opening plain [`TcpStream`]s.
///
/// The `secure` flag of a [`TransportRequest`] is not handled here,
/// that is up to the (tls) connector wrapping this one.
pub struct TcpConnector;

impl TcpConnector {
    /// Create a new [`TcpConnector`].
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl TransportConnector for TcpConnector {
    type Connection = TcpStream;
    type Error = BoxError;

    async fn connect(&self, req: TransportRequest) -> Result<Self::Connection, Self::Error> {
        let (stream, addr) = tcp_connect(&req.authority, &req.options).await?;
        tracing::trace!(
            network.peer.address = %addr.ip(),
            network.peer.port = addr.port(),
            "tcp connection established",
        );
        Ok(stream)
    }
}

/// Establish a [`TcpStream`] connection for the given [`HostWithPort`].
///
/// Resolved addresses are tried in order until one connects. The optional
/// connect timeout covers resolving and connecting as a whole.
pub async fn tcp_connect(
    address: &HostWithPort,
    options: &ConnectOptions,
) -> Result<(TcpStream, SocketAddr), BoxError> {
    let connect = tcp_connect_inner(address, options);
    match options.connect_timeout {
        Some(timeout) => match tokio::time::timeout(timeout, connect).await {
            Ok(result) => result,
            Err(_) => {
                tracing::debug!(
                    server.address = %address.host,
                    server.port = address.port,
                    "tcp connect timed out after {timeout:?}",
                );
                Err(TcpConnectTimeout.into())
            }
        },
        None => connect.await,
    }
}

async fn tcp_connect_inner(
    address: &HostWithPort,
    options: &ConnectOptions,
) -> Result<(TcpStream, SocketAddr), BoxError> {
    let HostWithPort { host, port } = address;

    let addrs: Vec<SocketAddr> = match host {
        Host::Address(ip) => vec![SocketAddr::new(*ip, *port)],
        Host::Name(domain) => tokio::net::lookup_host((domain.as_str(), *port))
            .await
            .with_context(|| format!("resolve {domain}"))?
            .collect(),
    };

    let mut last_err: Option<OpaqueError> = None;
    for (index, addr) in addrs.iter().copied().enumerate() {
        if let Some(bind) = options.bind_address
            && bind.is_ipv4() != addr.is_ipv4()
        {
            tracing::trace!("[IP | {addr}] #{index}: skip, address family differs from bind address {bind}");
            continue;
        }

        tracing::trace!("[IP | {addr}] #{index}: tcp connect attempt");
        match connect_addr(addr, options).await {
            Ok(stream) => return Ok((stream, addr)),
            Err(err) => {
                tracing::trace!("[IP | {addr}] #{index}: tcp connect failed: {err}");
                last_err = Some(err);
            }
        }
    }

    Err(match last_err {
        Some(err) => err.into_boxed(),
        None => OpaqueError::from_display(format!(
            "failed to resolve {host} into any usable IP address"
        ))
        .into_boxed(),
    })
}

async fn connect_addr(
    addr: SocketAddr,
    options: &ConnectOptions,
) -> Result<TcpStream, OpaqueError> {
    let stream = match options.bind_address {
        Some(bind) => {
            let socket = match bind {
                IpAddr::V4(_) => TcpSocket::new_v4(),
                IpAddr::V6(_) => TcpSocket::new_v6(),
            }
            .context("create tcp socket")?;
            socket
                .bind(SocketAddr::new(bind, 0))
                .with_context(|| format!("bind tcp socket to {bind}"))?;
            socket
                .connect(addr)
                .await
                .with_context(|| format!("connect to {addr}"))?
        }
        None => TcpStream::connect(addr)
            .await
            .with_context(|| format!("connect to {addr}"))?,
    };

    stream
        .set_nodelay(options.tcp_nodelay)
        .context("set TCP_NODELAY")?;

    Ok(stream)
}
