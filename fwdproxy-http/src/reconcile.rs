//! Reconciliation of early serialized request heads.
//!
//! Request machinery that serializes the head eagerly can have queued a
//! first output chunk before the request target got rewritten. Such a chunk
//! carries a stale head, which is replaced here by the freshly encoded one.
//! The body bytes following the stale head are kept as-is.
//!
//! [`PendingRequest`](crate::PendingRequest) only serializes lazily, so
//! for it this is a no-op unless [`write_early`] was used.
//!
//! [`write_early`]: crate::PendingRequest::write_early

use crate::head::HEAD_DELIMITER;
use bytes::BytesMut;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Summary of a replaced head.
pub struct Reconciled {
    /// Length of the stale head, including its delimiter.
    pub stale_len: usize,
    /// Length of the fresh head which took its place.
    pub fresh_len: usize,
    /// Amount of (body) bytes preserved after the head.
    pub preserved_len: usize,
}

/// Replace the head found in `chunk` with `fresh_head`.
///
/// The head ends at the first blank-line delimiter (`\r\n\r\n`).
/// Returns `None`, leaving the chunk untouched, if no delimiter is found.
pub fn replace_head(chunk: &mut BytesMut, fresh_head: &[u8]) -> Option<Reconciled> {
    let end = memchr::memmem::find(&chunk[..], HEAD_DELIMITER)? + HEAD_DELIMITER.len();
    let preserved_len = chunk.len() - end;

    let mut patched = BytesMut::with_capacity(fresh_head.len() + preserved_len);
    patched.extend_from_slice(fresh_head);
    patched.extend_from_slice(&chunk[end..]);
    *chunk = patched;

    Some(Reconciled {
        stale_len: end,
        fresh_len: fresh_head.len(),
        preserved_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_head_preserves_body() {
        let mut chunk = BytesMut::from(&b"GET / HTTP/1.1\r\nHost: old\r\n\r\nBODY"[..]);
        let fresh = b"GET http://new:80/ HTTP/1.1\r\nHost: old\r\n\r\n";
        let reconciled = replace_head(&mut chunk, fresh).unwrap();
        assert_eq!(
            &chunk[..],
            &b"GET http://new:80/ HTTP/1.1\r\nHost: old\r\n\r\nBODY"[..]
        );
        assert_eq!(
            reconciled,
            Reconciled {
                stale_len: 29,
                fresh_len: fresh.len(),
                preserved_len: 4,
            }
        );
    }

    #[test]
    fn replace_head_only_first_delimiter() {
        let mut chunk = BytesMut::from(&b"GET / HTTP/1.1\r\n\r\nA\r\n\r\nB"[..]);
        replace_head(&mut chunk, b"GET http://h:80/ HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(&chunk[..], &b"GET http://h:80/ HTTP/1.1\r\n\r\nA\r\n\r\nB"[..]);
    }

    #[test]
    fn replace_head_without_delimiter_is_noop() {
        let mut chunk = BytesMut::from(&b"partial body"[..]);
        assert!(replace_head(&mut chunk, b"GET / HTTP/1.1\r\n\r\n").is_none());
        assert_eq!(&chunk[..], b"partial body");
    }
}
