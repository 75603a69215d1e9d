use std::borrow::Cow;

use super::{BoxError, SError};

/// Adapters from any `Result` to one carrying an [`SError`].
///
/// ```
/// use serr::ResultExt;
///
/// fn parse(s: &str) -> Result<u16, serr::SError> {
///     s.parse::<u16>().wrap_err("invalid port")
/// }
///
/// assert_eq!(
///     parse("http").unwrap_err().to_string(),
///     "invalid port; invalid digit found in string",
/// );
/// ```
pub trait ResultExt<T> {
    /// Wraps the error with a message, see [`SError::wrap()`].
    ///
    /// # Errors
    ///
    /// Returns the wrapped error if `self` is `Err`.
    fn wrap_err<M>(self, message: M) -> Result<T, SError>
    where
        M: Into<Cow<'static, str>>;

    /// Promotes the error, see [`SError::cast()`].
    ///
    /// # Errors
    ///
    /// Returns the promoted error if `self` is `Err`.
    fn cast_err(self) -> Result<T, SError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn wrap_err<M>(self, message: M) -> Result<T, SError>
    where
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| SError::wrap(err, message))
    }

    #[inline]
    fn cast_err(self) -> Result<T, SError> {
        self.map_err(SError::cast)
    }
}
