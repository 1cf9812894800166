//! Fail-fast assertion helpers.
//!
//! Both forms raise on a false condition and do nothing otherwise; there is
//! no retry or recovery here. The macro forms capture the condition's
//! source text for the message, the function forms take a caller-supplied
//! description.

use crate::Result;
use crate::context::PlatformCode;
use crate::error::Error;
use crate::kind::ErrorKind;
use std::io;

/// Returns an error of `kind` when `condition` is false.
///
/// The message is `"Assert failed: "` followed by `description`. When the
/// condition holds this is `Ok(())` with no other observable effect.
pub fn check(kind: ErrorKind, condition: bool, description: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::new(kind, format!("Assert failed: {description}")))
    }
}

/// Returns a [`ErrorKind::Platform`] error when a platform call reported
/// failure, attaching the calling thread's last OS error code under
/// [`PlatformCode`].
///
/// Call this immediately after the failed platform call, before anything
/// else can overwrite the thread's last error value.
pub fn check_platform(condition: bool, description: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(platform_failure(description))
    }
}

/// Builds the error raised by [`check_platform`] and the
/// [`check_platform!`](crate::check_platform!) macro: a `Platform` error
/// with the last OS error code attached.
pub fn platform_failure(description: &str) -> Error {
    let code = io::Error::last_os_error().raw_os_error().unwrap_or(0);
    Error::new(
        ErrorKind::Platform,
        format!("Assert failed: {description}"),
    )
    .with_context::<PlatformCode>(code)
}

/// Early-return form of [`check`]: raises an error of the given kind when
/// the condition is false, with the condition's source text in the message.
///
/// Extra arguments replace the stringified condition with a formatted
/// description.
///
/// ```
/// use cairn_error::{ErrorKind, Result, check};
///
/// fn positive(x: i32) -> Result<i32> {
///     check!(ErrorKind::Runtime, x > 0);
///     Ok(x)
/// }
///
/// assert_eq!(positive(-1).unwrap_err().message(), "Assert failed: x > 0");
/// ```
#[macro_export]
macro_rules! check {
    ($kind:expr, $cond:expr $(,)?) => {
        if !$cond {
            return Err($crate::Error::new(
                $kind,
                concat!("Assert failed: ", stringify!($cond)),
            ));
        }
    };
    ($kind:expr, $cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::Error::new(
                $kind,
                format!("Assert failed: {}", format_args!($($arg)+)),
            ));
        }
    };
}

/// Early-return form of [`check_platform`]: raises a `Platform` error with
/// the call's source text in the message and the last OS error code
/// attached under [`PlatformCode`].
#[macro_export]
macro_rules! check_platform {
    ($cond:expr $(,)?) => {
        if !$cond {
            return Err($crate::check::platform_failure(stringify!($cond)));
        }
    };
}
