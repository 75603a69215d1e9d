/// Builds the flat key/value list taken by [`SError::args()`].
///
/// Each expression is converted into a [`Value`] through `From`, so keys and
/// values of different types can be mixed freely.
///
/// ```
/// use serr::{args, SError};
///
/// let path = String::from("/tmp/a");
/// let error = SError::new("read failed").args(args!["path", path, "retries", 2]);
///
/// assert_eq!(error.to_string(), "read failed [path='/tmp/a'] [retries=2]");
/// ```
///
/// [`SError::args()`]: crate::SError::args
/// [`Value`]: crate::Value
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        ::std::vec![$($crate::Value::from($value)),*]
    };
}

/// Accepts and discards any number of expressions.
///
/// Each expression is evaluated and borrowed, nothing else happens.
///
/// ```
/// let unused = 42;
/// serr::dev_null!(unused, "also unused");
/// ```
#[macro_export]
macro_rules! dev_null {
    ($($value:expr),* $(,)?) => {{
        $(let _ = &$value;)*
    }};
}
