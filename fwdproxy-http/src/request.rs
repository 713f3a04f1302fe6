use crate::{
    head::encode_request_head,
    reconcile::{Reconciled, replace_head},
};
use bytes::{Bytes, BytesMut};
use http::{HeaderMap, HeaderName, HeaderValue, Method, Version};

/// An in-flight outgoing HTTP/1 request, not yet written to a connection.
///
/// Owned by the client machinery, borrowed mutably by a connector so it can
/// rewrite the target before any byte hits the wire. The head is serialized
/// lazily and cached until the request is mutated through
/// [`set_path`](Self::set_path) or [`invalidate_header_cache`](Self::invalidate_header_cache).
#[derive(Debug, Clone)]
pub struct PendingRequest {
    method: Method,
    path: String,
    version: Version,
    headers: HeaderMap,
    header_cache: Option<Bytes>,
    first_chunk: Option<BytesMut>,
}

impl PendingRequest {
    /// Create a new [`PendingRequest`] for the given method and target.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            header_cache: None,
            first_chunk: None,
        }
    }

    /// Create a `GET` [`PendingRequest`] for the given target.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Add a header, replacing any existing value(s).
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self.header_cache = None;
        self
    }

    /// Set the http version, `HTTP/1.1` by default.
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self.header_cache = None;
        self
    }

    /// The request method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The request target, as it will be written in the request line.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Overwrite the request target. Invalidates the cached head.
    pub fn set_path(&mut self, path: impl Into<String>) {
        self.path = path.into();
        self.header_cache = None;
    }

    /// The http version.
    #[must_use]
    pub fn version(&self) -> Version {
        self.version
    }

    /// The request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable access to the request headers.
    ///
    /// The cached head is not invalidated by this, call
    /// [`invalidate_header_cache`](Self::invalidate_header_cache)
    /// once done mutating.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// The cached serialized head, if any.
    #[must_use]
    pub fn header_cache(&self) -> Option<&Bytes> {
        self.header_cache.as_ref()
    }

    /// Drop the cached serialized head, forcing the next
    /// [`flush_headers`](Self::flush_headers) to encode it again.
    pub fn invalidate_header_cache(&mut self) {
        self.header_cache = None;
    }

    /// Serialize the head now (if not cached already) and return it.
    pub fn flush_headers(&mut self) -> Bytes {
        if let Some(head) = &self.header_cache {
            return head.clone();
        }
        let head = encode_request_head(&self.method, &self.path, self.version, &self.headers);
        self.header_cache = Some(head.clone());
        head
    }

    /// Queue body bytes before a connection exists.
    ///
    /// The first call serializes the head eagerly and prepends it to the
    /// queued chunk, the way eager client machinery does. Later calls append.
    pub fn write_early(&mut self, data: &[u8]) {
        if let Some(chunk) = &mut self.first_chunk {
            chunk.extend_from_slice(data);
            return;
        }
        let head = self.flush_headers();
        let mut chunk = BytesMut::with_capacity(head.len() + data.len());
        chunk.extend_from_slice(&head);
        chunk.extend_from_slice(data);
        self.first_chunk = Some(chunk);
    }

    /// The queued first output chunk, if any.
    #[must_use]
    pub fn first_chunk(&self) -> Option<&[u8]> {
        self.first_chunk.as_deref()
    }

    /// Replace the head within the queued first chunk with the current
    /// (freshly flushed) head, keeping any body bytes.
    ///
    /// A no-op returning `None` when nothing was queued.
    pub fn reconcile_first_chunk(&mut self) -> Option<Reconciled> {
        self.first_chunk.as_ref()?;
        let head = self.flush_headers();
        let chunk = self.first_chunk.as_mut()?;
        replace_head(chunk, &head)
    }

    /// Take the bytes to be written first on the connection:
    /// the queued first chunk if any, the serialized head otherwise.
    pub fn take_output(&mut self) -> Bytes {
        match self.first_chunk.take() {
            Some(chunk) => chunk.freeze(),
            None => self.flush_headers(),
        }
    }
}

impl<B> From<&http::Request<B>> for PendingRequest {
    fn from(req: &http::Request<B>) -> Self {
        let path = req
            .uri()
            .path_and_query()
            .map_or_else(|| "/".to_owned(), ToString::to_string);
        Self {
            method: req.method().clone(),
            path,
            version: req.version(),
            headers: req.headers().clone(),
            header_cache: None,
            first_chunk: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::header;

    #[test]
    fn head_is_serialized_lazily_and_cached() {
        let mut req = PendingRequest::get("/")
            .with_header(header::HOST, HeaderValue::from_static("example.com"));
        assert!(req.header_cache().is_none());

        let head = req.flush_headers();
        assert_eq!(&head[..], b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n");
        assert_eq!(req.header_cache(), Some(&head));

        req.set_path("http://example.com:80/");
        assert!(req.header_cache().is_none());
        let head = req.flush_headers();
        assert!(head.starts_with(b"GET http://example.com:80/ HTTP/1.1\r\n"));
    }

    #[test]
    fn stale_cache_until_invalidated() {
        let mut req = PendingRequest::get("/");
        let stale = req.flush_headers();
        req.headers_mut()
            .insert(header::USER_AGENT, HeaderValue::from_static("fwdproxy"));
        assert_eq!(req.flush_headers(), stale);

        req.invalidate_header_cache();
        let fresh = req.flush_headers();
        assert_eq!(&fresh[..], b"GET / HTTP/1.1\r\nUser-Agent: fwdproxy\r\n\r\n");
    }

    #[test]
    fn write_early_then_reconcile() {
        let mut req = PendingRequest::get("/")
            .with_header(header::HOST, HeaderValue::from_static("old"));
        req.write_early(b"BO");
        req.write_early(b"DY");
        assert_eq!(req.first_chunk(), Some(&b"GET / HTTP/1.1\r\nHost: old\r\n\r\nBODY"[..]));

        req.set_path("http://new.example:80/");
        let reconciled = req.reconcile_first_chunk().unwrap();
        assert_eq!(reconciled.preserved_len, 4);

        let output = req.take_output();
        assert_eq!(
            &output[..],
            b"GET http://new.example:80/ HTTP/1.1\r\nHost: old\r\n\r\nBODY"
        );
        assert!(req.first_chunk().is_none());
    }

    #[test]
    fn reconcile_without_chunk_is_noop() {
        let mut req = PendingRequest::get("/");
        assert!(req.reconcile_first_chunk().is_none());
        assert!(req.header_cache().is_none());
        assert_eq!(&req.take_output()[..], b"GET / HTTP/1.1\r\n\r\n");
    }

    #[test]
    fn from_http_request() {
        let http_req = http::Request::builder()
            .method(Method::POST)
            .uri("http://example.com/submit?x=1")
            .header(header::HOST, "example.com")
            .body(())
            .unwrap();
        let req = PendingRequest::from(&http_req);
        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.path(), "/submit?x=1");
        assert_eq!(req.headers()[header::HOST], "example.com");
    }
}
