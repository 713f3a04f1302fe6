//! The request rewriter.
//!
//! Forward proxies expect the request target in absolute-form
//! (`GET http://example.com:80/index.html HTTP/1.1`), while clients
//! talking to an origin use origin-form (`GET /index.html HTTP/1.1`).
//! [`rewrite`] computes the former from the latter, together with the
//! `Proxy-Authorization` header to attach. It does no I/O.

use fwdproxy_error::BoxError;
use fwdproxy_net::{
    Protocol,
    address::{Host, split_host_and_opt_port},
    user::Basic,
};
use http::{HeaderMap, HeaderValue, Uri, header};
use iri_string::types::{UriAbsoluteString, UriReferenceStr};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Outcome of [`rewrite`].
pub struct RewrittenTarget {
    /// The absolute-form request target.
    pub absolute_uri: Uri,
    /// Value for the `Proxy-Authorization` header, if credentials are to be sent.
    pub proxy_authorization: Option<HeaderValue>,
}

#[derive(Debug)]
/// The request target could not be turned into a valid absolute URI.
pub struct InvalidRequestTarget {
    target: String,
    reason: &'static str,
    source: Option<BoxError>,
}

impl InvalidRequestTarget {
    fn new(target: impl Into<String>, reason: &'static str) -> Self {
        Self {
            target: target.into(),
            reason,
            source: None,
        }
    }

    fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The offending request target.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for InvalidRequestTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid request target {:?}: {}", self.target, self.reason)
    }
}

impl std::error::Error for InvalidRequestTarget {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|err| err.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Compute the absolute-form target and proxy headers for a request.
///
/// The target is `{scheme}://{host}:{port}` joined with `original_path`
/// as URI reference, the scheme being `https` if `secure` is set and `http`
/// otherwise. An `original_path` which is itself an absolute URI wins over
/// the destination, following regular reference resolution.
///
/// A `Proxy-Authorization: Basic ..` value is produced for a credential
/// that has a non-empty username or password.
///
/// ```
/// use fwdproxy_http::rewrite::rewrite;
/// use fwdproxy_net::{address::Host, user::Basic};
///
/// let host: Host = "example.com".parse().unwrap();
/// let rewritten = rewrite("/index.html?q=1", &host, 80, false, Some(&Basic::new("u", "p"))).unwrap();
/// assert_eq!(rewritten.absolute_uri, "http://example.com:80/index.html?q=1");
/// assert_eq!(rewritten.proxy_authorization.unwrap(), "Basic dTpw");
/// ```
pub fn rewrite(
    original_path: &str,
    dest_host: &Host,
    dest_port: u16,
    secure: bool,
    credential: Option<&Basic>,
) -> Result<RewrittenTarget, InvalidRequestTarget> {
    let base = format!(
        "{}://{}:{}",
        Protocol::from_secure(secure),
        dest_host.to_uri_host(),
        dest_port,
    );

    let absolute_uri = resolve_uri(original_path, &base)?;

    let proxy_authorization = credential
        .filter(|basic| !basic.is_empty())
        .map(Basic::as_header_value);

    Ok(RewrittenTarget {
        absolute_uri,
        proxy_authorization,
    })
}

/// Resolve the URI reference `relative` against the absolute URI `base`.
fn resolve_uri(relative: &str, base: &str) -> Result<Uri, InvalidRequestTarget> {
    let reference = UriReferenceStr::new(relative).map_err(|err| {
        InvalidRequestTarget::new(relative, "not a valid URI reference").with_source(err)
    })?;
    let base = UriAbsoluteString::try_from(base.to_owned()).map_err(|err| {
        InvalidRequestTarget::new(relative, "destination is not a valid base URI").with_source(err)
    })?;
    let resolved = reference.resolve_against(&base).to_string();
    let uri = Uri::try_from(resolved.as_str()).map_err(|err| {
        InvalidRequestTarget::new(relative, "resolved target is not a valid URI").with_source(err)
    })?;
    if uri.scheme().is_none() || uri.authority().is_none() {
        return Err(InvalidRequestTarget::new(
            relative,
            "resolved target is not an absolute URI",
        ));
    }
    Ok(uri)
}

/// Pick the destination host of a request.
///
/// In order: the host given by the caller, the host part of the
/// request's `Host` header, and finally `localhost`.
#[must_use]
pub fn destination_host(ctx_host: Option<&Host>, headers: &HeaderMap) -> Host {
    if let Some(host) = ctx_host {
        return host.clone();
    }
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| split_host_and_opt_port(value.trim()).ok())
        .map_or_else(Host::localhost, |(host, _)| host)
}
