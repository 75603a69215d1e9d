use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// A diagnostic value attached to an [`SError`](crate::SError).
///
/// Strings render single-quoted, everything else renders in its plain
/// [`Display`](fmt::Display) form.
#[derive(Clone)]
pub enum Value {
    /// A string value.
    Str(Cow<'static, str>),
    /// A boolean value.
    Bool(bool),
    /// A signed integer value.
    Int(i64),
    /// An unsigned integer value.
    Uint(u64),
    /// A floating point value.
    Float(f64),
    /// Any other displayable value.
    Display(Arc<dyn fmt::Display + Send + Sync>),
}

impl Value {
    /// Wraps any displayable value.
    ///
    /// The value is rendered as is, outside of the cycle checks applied to
    /// causes. Wrapping an [`SError`](crate::SError) that carries this value
    /// in its own attributes recurses without end when rendered.
    pub fn display<T>(value: T) -> Self
    where
        T: fmt::Display + Send + Sync + 'static,
    {
        Self::Display(Arc::new(value))
    }

    /// Returns the value if it is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(&**v),
            _ => None,
        }
    }

    /// Returns the value if it is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value if it is an integer representable as an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            Self::Uint(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Returns the value if it is numeric.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            Self::Uint(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns a [`Display`](fmt::Display) of the value that never quotes
    /// strings.
    pub fn plain(&self) -> Plain<'_> {
        Plain(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(v) => write!(f, "'{}'", v),
            other => fmt::Display::fmt(&other.plain(), f),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Uint(v) => f.debug_tuple("Uint").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Display(v) => f
                .debug_tuple("Display")
                .field(&format_args!("{}", v))
                .finish(),
        }
    }
}

/// Unquoted display of a [`Value`], see [`Value::plain()`].
pub struct Plain<'a>(&'a Value);

impl<'a> fmt::Display for Plain<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::Str(v) => f.write_str(v),
            Value::Bool(v) => fmt::Display::fmt(v, f),
            Value::Int(v) => fmt::Display::fmt(v, f),
            Value::Uint(v) => fmt::Display::fmt(v, f),
            Value::Float(v) => fmt::Display::fmt(v, f),
            Value::Display(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<&'static str> for Value {
    fn from(v: &'static str) -> Self {
        Self::Str(Cow::Borrowed(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(Cow::Owned(v))
    }
}

impl From<Cow<'static, str>> for Value {
    fn from(v: Cow<'static, str>) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

macro_rules! impl_int_into_value {
    ($variant:ident($repr:ty): $($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline(always)]
                fn from(v: $ty) -> Self {
                    Self::$variant(<$repr>::from(v))
                }
            }
        )*
    };
}

impl_int_into_value!(Int(i64): i8, i16, i32, i64);
impl_int_into_value!(Uint(u64): u8, u16, u32, u64);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        i64::try_from(v).map_or_else(|_| Self::display(v), Self::Int)
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        u64::try_from(v).map_or_else(|_| Self::display(v), Self::Uint)
    }
}

///////////////////////////////////////////////////////////////////////////////
// Attr

/// A key/value attribute of an [`SError`](crate::SError) in a logging
/// friendly form.
#[derive(Debug, Clone)]
pub struct Attr {
    key: Cow<'static, str>,
    value: Value,
}

impl Attr {
    pub(crate) fn new(key: Cow<'static, str>, value: Value) -> Self {
        Self { key, value }
    }

    /// The attribute key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The attribute value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the attribute returning its key and value.
    #[must_use]
    pub fn into_parts(self) -> (Cow<'static, str>, Value) {
        (self.key, self.value)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Space separated `key=value` display of a list of attributes.
pub(crate) struct AttrsDisplay<'a>(pub(crate) &'a [Attr]);

impl<'a> fmt::Display for AttrsDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            fmt::Display::fmt(first, f)?;
        }
        for attr in iter {
            f.write_str(" ")?;
            fmt::Display::fmt(attr, f)?;
        }
        Ok(())
    }
}
