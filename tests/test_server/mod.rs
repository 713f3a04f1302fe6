use std::net::SocketAddr;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    sync::oneshot,
};

pub(crate) const RESPONSE: &[u8] = b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\n\r\nok";

/// A loopback http peer accepting a single connection.
///
/// It reads everything up to and including the first `\r\n\r\n`, plus
/// `body_len` more bytes, hands those to the test and answers [`RESPONSE`].
pub(crate) struct TestServer {
    pub(crate) addr: SocketAddr,
    pub(crate) received: oneshot::Receiver<Vec<u8>>,
}

pub(crate) async fn spawn_http_peer(body_len: usize) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, received) = oneshot::channel();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut data = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).await.unwrap();
            assert!(n > 0, "peer closed before sending a full request");
            data.extend_from_slice(&buf[..n]);
            if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n")
                && data.len() >= pos + 4 + body_len
            {
                break;
            }
        }
        stream.write_all(RESPONSE).await.unwrap();
        stream.shutdown().await.unwrap();
        let _ = tx.send(data);
    });

    TestServer { addr, received }
}

/// A loopback peer answering every connection with plaintext garbage.
pub(crate) async fn spawn_plaintext_peer() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let _ = stream
                .write_all(b"HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\n\r\n")
                .await;
        }
    });
    addr
}

/// A loopback address nothing is listening on.
pub(crate) async fn closed_port_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

pub(crate) async fn read_to_end<S: tokio::io::AsyncRead + Unpin>(mut stream: S) -> Vec<u8> {
    let mut out = Vec::new();
    stream.read_to_end(&mut out).await.unwrap();
    out
}
