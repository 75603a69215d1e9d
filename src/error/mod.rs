//! Structured errors.
//!
//! An [`SError`] decorates a base message with key/value attributes and an
//! optional cause, and renders all of it into a single line through
//! [`Display`](fmt::Display).
//!
//! ```
//! use serr::{args, SError};
//!
//! let cause = SError::new("connection reset").args(args!["peer", "10.0.0.7"]);
//! let error = SError::wrap(cause, "failed to fetch document").args(args!["attempt", 3]);
//!
//! assert_eq!(
//!     error.to_string(),
//!     "failed to fetch document [attempt=3]; connection reset [peer='10.0.0.7']",
//! );
//! ```
//!
//! # Handles
//!
//! An `SError` is a handle: clones share the same error and the builder
//! methods ([`SError::args()`], [`SError::err()`], ...) mutate it in place
//! before handing the same handle back. This makes it possible for an error
//! to end up in its own cause chain, which rendering detects and cuts short.
//!
//! # Misuse
//!
//! Malformed attribute lists and resealing the valid keys are coding mistakes
//! at the call site. They panic rather than being reported through a `Result`.
//!
//! # Nil
//!
//! The [nil](SError::nil) error stands for no error at all. Builders called
//! on it change nothing, so it never gains attributes or a cause.

mod display;
mod traits;
mod value;

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use self::display::RenderGuard;
#[cfg(feature = "tracing")]
use self::value::AttrsDisplay;

pub use self::traits::ResultExt;
pub use self::value::{Attr, Plain, Value};

/// A boxed error as accepted by [`SError::cast()`], [`SError::wrap()`] and
/// [`SError::err()`].
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An error with a message, key/value attributes and an optional cause.
///
/// See the [module documentation](crate::error) for an overview.
#[derive(Clone, Default)]
#[must_use = "error must be handled"]
pub struct SError(Arc<Node>);

#[derive(Default)]
pub(crate) struct Node {
    base: Option<Base>,
    causes: Causes,
    args: RwLock<Vec<Value>>,
    valid_args: OnceLock<Vec<Cow<'static, str>>>,
}

enum Base {
    Message(Cow<'static, str>),
    Foreign(BoxError),
}

pub(crate) enum Cause {
    Structured(SError),
    Foreign(BoxError),
}

/// Every cause attached over the life of an error, oldest first.
///
/// Slots are only ever appended so references handed out by
/// [`StdError::source()`] stay valid. The last filled slot is the current
/// cause.
#[derive(Default)]
struct Causes {
    cause: OnceLock<Cause>,
    next: OnceLock<Box<Causes>>,
}

impl Causes {
    fn push(&self, mut cause: Cause) {
        let mut slot = self;
        loop {
            match slot.cause.set(cause) {
                Ok(()) => return,
                Err(rejected) => {
                    cause = rejected;
                    slot = slot.next.get_or_init(Box::default);
                }
            }
        }
    }

    fn current(&self) -> Option<&Cause> {
        let mut current = self.cause.get()?;
        let mut slot = self;
        while let Some(next) = slot.next.get() {
            match next.cause.get() {
                Some(cause) => current = cause,
                None => break,
            }
            slot = next;
        }
        Some(current)
    }
}

impl Cause {
    fn from_boxed(err: BoxError) -> Self {
        match err.downcast::<SError>() {
            Ok(err) => Self::Structured(*err),
            Err(err) => Self::Foreign(err),
        }
    }

    fn as_dyn(&self) -> &(dyn StdError + 'static) {
        match self {
            Self::Structured(err) => err,
            Self::Foreign(err) => &**err,
        }
    }
}

impl SError {
    ///////////////////////////////////////////////////////////////////////////
    // Construction

    /// Creates an error from a message, with no cause and no attributes.
    ///
    /// ```
    /// assert_eq!(serr::SError::new("boom").to_string(), "boom");
    /// ```
    pub fn new<M>(message: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self::from_base(Base::Message(message.into()))
    }

    /// Returns the nil error.
    ///
    /// The nil error has no base message and stands for the absence of an
    /// error, see [`SError::cast_opt()`]. Builders leave it unchanged.
    ///
    /// ```
    /// use serr::{args, SError};
    ///
    /// let nil = SError::nil().args(args!["k", "v"]);
    /// assert!(nil.is_nil());
    /// assert_eq!(nil.to_string(), "");
    /// ```
    pub fn nil() -> Self {
        Self::default()
    }

    /// Promotes an error into an `SError`.
    ///
    /// If `err` is an `SError`, or has one in its [`source()`] chain, that
    /// same handle is returned. Otherwise a new `SError` is created with `err`
    /// as its base, which stays reachable through [`SError::downcast_ref()`].
    ///
    /// ```
    /// use serr::SError;
    ///
    /// let sentinel = SError::new("not found");
    /// assert_eq!(SError::cast(sentinel.clone()), sentinel);
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    /// let error = SError::cast(io);
    /// assert_eq!(error.to_string(), "disk on fire");
    /// assert!(error.downcast_ref::<std::io::Error>().is_some());
    /// ```
    ///
    /// [`source()`]: std::error::Error::source
    pub fn cast<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        let err: BoxError = err.into();
        match err.downcast::<SError>() {
            Ok(err) => *err,
            Err(err) => match as_serror(&*err) {
                Some(found) => found,
                None => Self::from_base(Base::Foreign(err)),
            },
        }
    }

    /// Promotes an optional error, see [`SError::cast()`].
    ///
    /// `None` produces the [nil](SError::nil) error.
    pub fn cast_opt<E>(err: Option<E>) -> Self
    where
        E: Into<BoxError>,
    {
        err.map_or_else(Self::nil, Self::cast)
    }

    /// Creates an error from a message with `err` attached as its cause.
    ///
    /// ```
    /// use serr::SError;
    ///
    /// let error = SError::wrap(SError::new("boom"), "context");
    /// assert_eq!(error.to_string(), "context; boom");
    /// ```
    pub fn wrap<E, M>(err: E, message: M) -> Self
    where
        E: Into<BoxError>,
        M: Into<Cow<'static, str>>,
    {
        Self::new(message).err(err)
    }

    fn from_base(base: Base) -> Self {
        Self(Arc::new(Node {
            base: Some(base),
            ..Node::default()
        }))
    }

    ///////////////////////////////////////////////////////////////////////////
    // Builders

    /// Replaces the attributes with the flat list of key/value `pairs`.
    ///
    /// Use [`args!`](crate::args) to build the list.
    ///
    /// ```
    /// use serr::{args, SError};
    ///
    /// let error = SError::new("m").args(args!["a", 1, "b", 2]);
    /// assert_eq!(error.to_string(), "m [a=1] [b=2]");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `pairs` has an odd length, or if [valid
    /// keys](SError::valid_args()) were declared and a key is not one of
    /// them.
    pub fn args(self, pairs: Vec<Value>) -> Self {
        if self.is_nil() {
            return self;
        }
        self.check_arity(pairs.len());
        if let Some(valid) = self.0.valid_args.get() {
            self.check_keys(&pairs, valid);
        }
        *write(&self.0.args) = pairs;
        self
    }

    /// Declares the only keys the attributes may use.
    ///
    /// Existing attributes are checked against the keys straight away.
    ///
    /// # Panics
    ///
    /// Panics if the valid keys were already declared for this error, or if
    /// an existing attribute uses a key not declared.
    pub fn valid_args<I, K>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Cow<'static, str>>,
    {
        let keys = keys.into_iter().map(Into::into).collect();
        if self.0.valid_args.set(keys).is_err() {
            panic!(
                "SError::valid_args() for '{}' may only be called once",
                self.message()
            );
        }
        if let Some(valid) = self.0.valid_args.get() {
            self.check_keys(&read(&self.0.args), valid);
        }
        self
    }

    /// Marks the error as intentionally having no attributes.
    #[inline(always)]
    pub fn no_args(self) -> Self {
        self
    }

    /// Attaches `cause` as the error this one adds context to, replacing
    /// any cause attached before.
    ///
    /// An `SError` cause is kept as a handle, so later changes to it show up
    /// when this error is rendered. A replaced cause is kept alive until this
    /// error is dropped.
    ///
    /// ```
    /// use serr::SError;
    ///
    /// let error = SError::wrap(SError::new("first"), "m").err(SError::new("second"));
    /// assert_eq!(error.to_string(), "m; second");
    /// ```
    pub fn err<E>(self, cause: E) -> Self
    where
        E: Into<BoxError>,
    {
        if !self.is_nil() {
            self.0.causes.push(Cause::from_boxed(cause.into()));
        }
        self
    }

    /// Attaches `cause` and replaces the attributes in one call.
    ///
    /// # Panics
    ///
    /// See [`SError::args()`].
    pub fn err_with<E>(self, cause: E, pairs: Vec<Value>) -> Self
    where
        E: Into<BoxError>,
    {
        self.err(cause).args(pairs)
    }

    fn check_arity(&self, count: usize) {
        if count % 2 != 0 {
            panic!(
                "SError::args() for '{}' must receive key-value pairs for args; received {} args instead",
                self.message(),
                count
            );
        }
    }

    fn check_keys(&self, pairs: &[Value], valid: &[Cow<'static, str>]) {
        for key in pairs.iter().step_by(2) {
            let key = key.plain().to_string();
            if !valid.iter().any(|valid| *valid == key) {
                panic!(
                    "SError '{}' received arg key '{}' not in its valid args {:?}",
                    self.message(),
                    key,
                    valid
                );
            }
        }
    }

    ///////////////////////////////////////////////////////////////////////////
    // Inspection

    /// Returns `true` if this is the [nil](SError::nil) error.
    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.base.is_none()
    }

    /// The base message, without attributes or cause.
    ///
    /// ```
    /// use serr::{args, SError};
    ///
    /// let error = SError::wrap(SError::new("boom"), "context").args(args!["k", "v"]);
    /// assert_eq!(error.message(), "context");
    /// ```
    #[must_use]
    pub fn message(&self) -> Cow<'_, str> {
        match &self.0.base {
            Some(Base::Message(message)) => Cow::Borrowed(&**message),
            Some(Base::Foreign(err)) => Cow::Owned(err.to_string()),
            None => Cow::Borrowed(""),
        }
    }

    /// Returns a copy of the raw flat key/value list.
    #[must_use]
    pub fn get_args(&self) -> Vec<Value> {
        read(&self.0.args).clone()
    }

    /// Returns the attributes as key/value pairs.
    ///
    /// # Panics
    ///
    /// Panics if a key is not a string.
    #[must_use]
    pub fn attrs(&self) -> Vec<Attr> {
        read(&self.0.args)
            .chunks_exact(2)
            .map(|pair| match &pair[0] {
                Value::Str(key) => Attr::new(key.clone(), pair[1].clone()),
                key => panic!(
                    "SError '{}' has unexpected non-string arg key: {}",
                    self.message(),
                    key.plain()
                ),
            })
            .collect()
    }

    /// Returns the attribute with `key`, if present.
    ///
    /// # Panics
    ///
    /// See [`SError::attrs()`].
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<Attr> {
        self.attrs().into_iter().find(|attr| attr.key() == key)
    }

    /// Returns `true` if `other` is this error or any [`SError`] in its
    /// cause chain.
    ///
    /// Foreign causes are looked through for an `SError` in their own
    /// [`source()`](std::error::Error::source) chain.
    #[must_use]
    pub fn is(&self, other: &SError) -> bool {
        let mut guard = RenderGuard::new(self);
        let mut current = self.clone();
        loop {
            if current == *other {
                return true;
            }
            let next = match current.current_cause() {
                Some(Cause::Structured(next)) => Some(next.clone()),
                Some(Cause::Foreign(err)) => as_serror(&**err),
                None => None,
            };
            match next {
                Some(next) if !guard.contains(&next) => {
                    guard.push(&next);
                    current = next;
                }
                _ => return false,
            }
        }
    }

    /// Returns the base error promoted by [`SError::cast()`] if it is of
    /// type `T`.
    #[must_use]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: StdError + 'static,
    {
        match &self.0.base {
            Some(Base::Foreign(err)) => err.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Emits the error as a `tracing` event at the `ERROR` level, with the
    /// attributes recorded in an `attrs` field.
    ///
    /// # Panics
    ///
    /// See [`SError::attrs()`].
    #[cfg(feature = "tracing")]
    pub fn log(&self) {
        let attrs = self.attrs();
        tracing::error!(attrs = %AttrsDisplay(&attrs), "{}", self);
    }

    fn current_cause(&self) -> Option<&Cause> {
        self.0.causes.current()
    }

    pub(crate) fn node(&self) -> *const Node {
        Arc::as_ptr(&self.0)
    }
}

impl PartialEq for SError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for SError {}

impl fmt::Debug for SError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the message of the cause, as the chain may loop.
        let cause = self.current_cause().map(|cause| match cause {
            Cause::Structured(err) => err.message().into_owned(),
            Cause::Foreign(err) => err.to_string(),
        });
        f.debug_struct("SError")
            .field("message", &self.message())
            .field("args", &*read(&self.0.args))
            .field("cause", &cause)
            .finish()
    }
}

impl StdError for SError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.current_cause().map(Cause::as_dyn)
    }
}

/// Finds the first [`SError`] in the [`source()`] chain of `err`, starting
/// with `err` itself.
///
/// ```
/// use serr::{as_serror, SError};
///
/// let error = SError::new("boom");
/// let boxed: Box<dyn std::error::Error> = Box::new(error.clone());
/// assert_eq!(as_serror(&*boxed), Some(error));
/// ```
///
/// [`source()`]: std::error::Error::source
#[must_use]
pub fn as_serror(err: &(dyn StdError + 'static)) -> Option<SError> {
    let mut next = Some(err);
    while let Some(err) = next {
        if let Some(found) = err.downcast_ref::<SError>() {
            return Some(found.clone());
        }
        next = err.source();
    }
    None
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
