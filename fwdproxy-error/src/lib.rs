//! Error utilities for fwdproxy and its users.
//!
//! Errors in fwdproxy are either concrete types (e.g. the proxy connector's
//! `ForwardProxyError`) or type-erased as a [`BoxError`]. To attach
//! human readable context to an error while keeping the original error
//! reachable via [`std::error::Error::source`], use [`ErrorContext`]
//! on a `Result` or `Option`, or [`ErrorExt`] on an error directly.
//!
//! ```
//! use fwdproxy_error::ErrorContext;
//!
//! let result = "hello".parse::<u16>().context("parse proxy port");
//! assert_eq!(
//!     "parse proxy port: invalid digit found in string",
//!     result.unwrap_err().to_string(),
//! );
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

use std::fmt::Display;

mod ext;
#[doc(inline)]
pub use ext::OpaqueError;

#[doc(hidden)]
#[macro_use]
pub mod macros;
#[doc(inline)]
pub use macros::static_str_error;

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Extends the `Result` and `Option` types with methods for adding context to errors.
pub trait ErrorContext: private::SealedErrorContext {
    /// The resulting context type after adding context to the contained error.
    type Context;

    /// Add a static context to the contained error.
    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static;

    /// Lazily add a context to the contained error, if it exists.
    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext for Result<T, E>
where
    E: Into<BoxError>,
{
    type Context = Result<T, OpaqueError>;

    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static,
    {
        self.map_err(|error| OpaqueError::from_context(context, error.into()))
    }

    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| OpaqueError::from_context(context(), error.into()))
    }
}

impl<T> ErrorContext for Option<T> {
    type Context = Result<T, OpaqueError>;

    fn context<M>(self, context: M) -> Self::Context
    where
        M: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| {
            OpaqueError::from_context(context, OpaqueError::from_display("Option is None").into())
        })
    }

    fn with_context<C, F>(self, context: F) -> Self::Context
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.ok_or_else(|| {
            OpaqueError::from_context(context(), OpaqueError::from_display("Option is None").into())
        })
    }
}

/// Extends error types with methods for working with errors.
pub trait ErrorExt: private::SealedErrorExt {
    /// Wrap the error in a context.
    fn context<M>(self, context: M) -> OpaqueError
    where
        M: Display + Send + Sync + 'static;

    /// Turn the error into a [`BoxError`].
    fn into_box_error(self) -> BoxError;
}

impl<Error: std::error::Error + Send + Sync + 'static> ErrorExt for Error {
    fn context<M>(self, context: M) -> OpaqueError
    where
        M: Display + Send + Sync + 'static,
    {
        OpaqueError::from_context(context, Box::new(self))
    }

    fn into_box_error(self) -> BoxError {
        Box::new(self)
    }
}

/// Iterate over an error and all of its sources, starting with the error itself.
pub fn error_chain<'a>(
    error: &'a (dyn std::error::Error + 'static),
) -> impl Iterator<Item = &'a (dyn std::error::Error + 'static)> {
    std::iter::successors(Some(error), |err| err.source())
}

mod private {
    pub trait SealedErrorContext {}

    impl<T, E> SealedErrorContext for Result<T, E> where E: Into<super::BoxError> {}
    impl<T> SealedErrorContext for Option<T> {}

    pub trait SealedErrorExt {}

    impl<Error: std::error::Error + Send + Sync + 'static> SealedErrorExt for Error {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct CustomError;

    impl std::fmt::Display for CustomError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "custom error")
        }
    }

    impl std::error::Error for CustomError {}

    #[test]
    fn result_context_keeps_source() {
        let result: Result<(), CustomError> = Err(CustomError);
        let err = result.context("connect to proxy").unwrap_err();
        assert_eq!(err.to_string(), "connect to proxy: custom error");
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.is::<CustomError>());
    }

    #[test]
    fn box_error_result_context() {
        let result: Result<(), BoxError> = Err("boom".into());
        let err = result.with_context(|| format!("attempt {}", 2)).unwrap_err();
        assert_eq!(err.to_string(), "attempt 2: boom");
    }

    #[test]
    fn option_context() {
        let value: Option<u16> = None;
        let err = value.context("proxy port").unwrap_err();
        assert_eq!(err.to_string(), "proxy port: Option is None");
        assert_eq!(Some(8080).context("proxy port").unwrap(), 8080);
    }

    #[test]
    fn error_ext_chain() {
        let err = CustomError.context("inner").context("outer");
        let chain: Vec<_> = error_chain(&err).map(ToString::to_string).collect();
        assert_eq!(
            chain,
            vec!["outer: inner: custom error", "inner: custom error", "custom error"],
        );
        assert!(error_chain(&err).last().unwrap().is::<CustomError>());
    }
}
