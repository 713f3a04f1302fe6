//! HTTP/1 request head encoding.

use bytes::{BufMut, Bytes, BytesMut};
use http::{HeaderMap, Method, Version};

/// Delimiter terminating the head of an HTTP/1 message.
pub const HEAD_DELIMITER: &[u8] = b"\r\n\r\n";

/// Encode an HTTP/1 request head (request line, headers and the blank line).
///
/// Header names are written in title case, as most HTTP/1 peers
/// (and proxies in particular) are used to.
///
/// ```
/// use fwdproxy_http::{HeaderMap, Method, Version, head::encode_request_head};
///
/// let mut headers = HeaderMap::new();
/// headers.insert("host", "example.com".parse().unwrap());
/// let head = encode_request_head(&Method::GET, "/", Version::HTTP_11, &headers);
/// assert_eq!(&head[..], b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");
/// ```
#[must_use]
pub fn encode_request_head(
    method: &Method,
    target: &str,
    version: Version,
    headers: &HeaderMap,
) -> Bytes {
    let mut dst = BytesMut::with_capacity(64 + target.len() + headers.len() * 32);

    dst.put_slice(method.as_str().as_bytes());
    dst.put_u8(b' ');
    dst.put_slice(target.as_bytes());
    dst.put_slice(match version {
        Version::HTTP_10 => b" HTTP/1.0\r\n",
        _ => b" HTTP/1.1\r\n",
    });

    for (name, value) in headers {
        title_case(&mut dst, name.as_str().as_bytes());
        if value.is_empty() {
            dst.put_slice(b":\r\n");
        } else {
            dst.put_slice(b": ");
            dst.put_slice(value.as_bytes());
            dst.put_slice(b"\r\n");
        }
    }
    dst.put_slice(b"\r\n");

    dst.freeze()
}

// Write header names as title case. The header name is assumed to be ASCII.
fn title_case(dst: &mut BytesMut, name: &[u8]) {
    dst.reserve(name.len());

    let mut prev = b'-';
    for &(mut c) in name {
        if prev == b'-' {
            c.make_ascii_uppercase();
        }
        dst.put_u8(c);
        prev = c;
    }
}
