//! Byte streams returned by transport connectors.

use tokio::io::{AsyncRead, AsyncWrite};

/// A bidirectional byte stream, e.g. a tcp connection
/// or a tls session running on top of one.
pub trait Stream: AsyncRead + AsyncWrite + Send + 'static {}

impl<T> Stream for T where T: AsyncRead + AsyncWrite + Send + 'static {}
