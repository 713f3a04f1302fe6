use super::context::{ContextError, MessageError};
use crate::BoxError;
use std::fmt::{self, Debug, Display};

#[repr(transparent)]
/// A type-erased error type.
///
/// Used to hide the concrete error type, e.g. when context
/// got attached to an error via [`crate::ErrorContext`].
pub struct OpaqueError(BoxError);

impl OpaqueError {
    /// Create an [`OpaqueError`] from an std error.
    pub fn from_std(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(error))
    }

    /// Create an [`OpaqueError`] from a display object.
    pub fn from_display(msg: impl Display + Debug + Send + Sync + 'static) -> Self {
        Self::from_std(MessageError(msg))
    }

    /// Create an [`OpaqueError`] from a boxed error.
    #[must_use]
    pub fn from_boxed(inner: BoxError) -> Self {
        Self(inner)
    }

    pub(crate) fn from_context<C>(context: C, error: BoxError) -> Self
    where
        C: Display + Send + Sync + 'static,
    {
        Self::from_std(ContextError { context, error })
    }

    /// Returns true if the underlying error is of type `T`.
    #[must_use]
    pub fn is<T>(&self) -> bool
    where
        T: std::error::Error + 'static,
    {
        self.0.is::<T>()
    }

    /// Consumes the [`OpaqueError`] and returns it as a [`BoxError`].
    #[must_use]
    pub fn into_boxed(self) -> BoxError {
        self.0
    }

    /// Attempts to downcast the error to the concrete type `T`.
    pub fn downcast<T>(self) -> Result<T, Self>
    where
        T: std::error::Error + 'static,
    {
        match self.0.downcast::<T>() {
            Ok(error) => Ok(*error),
            Err(inner) => Err(Self(inner)),
        }
    }

    /// Attempts to downcast the error to a shared reference of the concrete type `T`.
    #[must_use]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        self.0.downcast_ref()
    }
}

impl Debug for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for OpaqueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl std::error::Error for OpaqueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<BoxError> for OpaqueError {
    fn from(error: BoxError) -> Self {
        Self(error)
    }
}
