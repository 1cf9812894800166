//! Kind-tagged error values with typed diagnostic context.
//!
//! Every [`Error`] carries an [`ErrorKind`] (a small closed taxonomy:
//! system, data, runtime, plus the platform refinement of system), a
//! human-readable message assembled incrementally, and an open-ended set of
//! typed context slots for diagnostic payloads such as OS error codes.
//! Handlers discriminate by kind, never by string matching; `Platform`
//! errors widen to `System`, so a handler for the general kind also accepts
//! the refinement.
//!
//! # Builder usage
//!
//! ```
//! use cairn_error::{Error, ErrorKind, PlatformCode};
//!
//! let err = Error::new(ErrorKind::System, "device lost")
//!     .append(" while presenting frame 4096")
//!     .with_context::<PlatformCode>(5);
//!
//! assert!(err.is(ErrorKind::System));
//! assert_eq!(err.message(), "device lost while presenting frame 4096");
//! assert_eq!(err.context_value::<PlatformCode>(), Some(5));
//! ```
//!
//! # Fail-fast assertions
//!
//! The [`check!`] and [`check_platform!`] macros raise when a condition is
//! false, capturing the condition's source text; the [`check`] and
//! [`check_platform`] functions do the same with a caller-supplied
//! description.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod check;
mod context;
mod error;
mod kind;

pub use check::{check, check_platform};
pub use context::{ContextKey, ContextMap, PlatformCode};
pub use error::{Error, ErrorDto, data_error, platform_error, runtime_error, system_error};
pub use kind::{ErrorKind, UnknownKind};

/// Specialized `Result` whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
