//! The error value: a kind, a growing message, and attached context.

use crate::context::{ContextKey, ContextMap};
use crate::kind::ErrorKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind-tagged error value.
///
/// Carries a human-readable message assembled incrementally via
/// [`append`](Error::append) and arbitrary typed context attached via
/// [`with_context`](Error::with_context). Builder methods consume and
/// return the value, so chains stay valid under move-only ownership. Once
/// raised, the message only grows; nothing mutates it retroactively.
///
/// ```
/// use cairn_error::{Error, ErrorKind, PlatformCode};
///
/// let err = Error::new(ErrorKind::System, "device lost")
///     .append(" while presenting frame 4096")
///     .with_context::<PlatformCode>(5);
///
/// assert!(err.is(ErrorKind::System));
/// assert_eq!(err.context_value::<PlatformCode>(), Some(5));
/// ```
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    context: ContextMap,
}

impl Error {
    /// Creates an error of `kind` with an initial message.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ContextMap::new(),
        }
    }

    /// Concatenates `text` onto the message, with no separator.
    pub fn append(mut self, text: impl fmt::Display) -> Self {
        use fmt::Write as _;
        // Writing a Display into a String cannot fail.
        let _ = write!(self.message, "{text}");
        self
    }

    /// Attaches a typed context value under key `K`.
    ///
    /// Repeated attachment under the same key replaces the earlier value;
    /// a value that fails to serialize is silently skipped.
    pub fn with_context<K: ContextKey>(mut self, value: K::Value) -> Self {
        self.context.insert::<K>(value);
        self
    }

    /// The kind this error was raised with.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Widening test against the kind hierarchy.
    ///
    /// Shorthand for `self.kind().is(ancestor)`: a `Platform` error matches
    /// `System` handlers as well as `Platform` ones.
    pub fn is(&self, ancestor: ErrorKind) -> bool {
        self.kind.is(ancestor)
    }

    /// The fully assembled message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Typed context lookup; `None` when key `K` was never attached.
    pub fn context_value<K: ContextKey>(&self) -> Option<K::Value> {
        self.context.get::<K>()
    }

    /// All attached context.
    pub fn context(&self) -> &ContextMap {
        &self.context
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut d = f.debug_struct("Error");
        d.field("kind", &self.kind);
        d.field("message", &self.message);
        if !self.context.is_empty() {
            d.field("context", self.context.as_json());
        }
        d.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)?;
        if !self.context.is_empty() {
            // Deterministic output thanks to the ordered context map.
            if let Ok(ctx) = serde_json::to_string(self.context.as_json()) {
                write!(f, " {ctx}")?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

/// Creates a [`ErrorKind::System`] error: an unexpected failure inside an
/// external or third-party API.
pub fn system_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::System, message)
}

/// Creates a [`ErrorKind::Data`] error: a failure while parsing, loading,
/// or otherwise handling a data source.
pub fn data_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Data, message)
}

/// Creates a [`ErrorKind::Runtime`] error: a failure in program logic.
pub fn runtime_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Runtime, message)
}

/// Creates a [`ErrorKind::Platform`] error.
///
/// Does not attach an OS error code; use
/// [`check_platform`](crate::check_platform) when the code should travel
/// with the error.
pub fn platform_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Platform, message)
}

/// Serialisable snapshot of an [`Error`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorDto {
    /// Error kind.
    pub kind: ErrorKind,
    /// Fully assembled message.
    pub message: String,
    /// Attached context.
    #[serde(default, skip_serializing_if = "ContextMap::is_empty")]
    pub context: ContextMap,
}

impl From<&Error> for ErrorDto {
    fn from(err: &Error) -> Self {
        Self {
            kind: err.kind,
            message: err.message.clone(),
            context: err.context.clone(),
        }
    }
}

impl From<ErrorDto> for Error {
    fn from(dto: ErrorDto) -> Self {
        Self {
            kind: dto.kind,
            message: dto.message,
            context: dto.context,
        }
    }
}
