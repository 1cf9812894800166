//! Error kinds and the widening relation between them.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of a failure, used by handlers to discriminate without string
/// matching.
///
/// Kinds form a tiny closed hierarchy: [`ErrorKind::Platform`] refines
/// [`ErrorKind::System`], so a handler that accepts `System` also accepts
/// `Platform` errors (see [`ErrorKind::is`]). The root kinds are mutually
/// exclusive. No runtime data hangs off a kind itself; payloads travel as
/// context on the error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Unexpected failure inside an external or third-party API.
    System,
    /// Failure while parsing, loading, or otherwise handling a data source.
    Data,
    /// Failure in program logic that is neither a system nor a data error.
    Runtime,
    /// System failure reported by the operating system, normally carrying
    /// the platform's error code as context.
    Platform,
}

impl ErrorKind {
    /// Returns the kind this one refines, if any.
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Platform => Some(Self::System),
            Self::System | Self::Data | Self::Runtime => None,
        }
    }

    /// Widening test: `true` when `self` is `ancestor` or refines it.
    ///
    /// Reflexive. `Platform` widens to `System`; the reverse does not hold,
    /// and the root kinds never match each other.
    pub fn is(self, ancestor: Self) -> bool {
        if self == ancestor {
            return true;
        }
        match self.parent() {
            Some(parent) => parent.is(ancestor),
            None => false,
        }
    }

    /// Stable snake_case name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Data => "data",
            Self::Runtime => "runtime",
            Self::Platform => "platform",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown error kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ErrorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(Self::System),
            "data" => Ok(Self::Data),
            "runtime" => Ok(Self::Runtime),
            "platform" => Ok(Self::Platform),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// All kinds for exhaustive iteration in tests.
    const ALL_KINDS: &[ErrorKind] = &[
        ErrorKind::System,
        ErrorKind::Data,
        ErrorKind::Runtime,
        ErrorKind::Platform,
    ];

    #[test]
    fn widening_is_reflexive() {
        for kind in ALL_KINDS {
            assert!(kind.is(*kind), "{kind} must match itself");
        }
    }

    #[test]
    fn platform_widens_to_system() {
        assert!(ErrorKind::Platform.is(ErrorKind::System));
    }

    #[test]
    fn system_does_not_narrow_to_platform() {
        assert!(!ErrorKind::System.is(ErrorKind::Platform));
    }

    #[test]
    fn root_kinds_are_mutually_exclusive() {
        let roots = [ErrorKind::System, ErrorKind::Data, ErrorKind::Runtime];
        for a in roots {
            for b in roots {
                assert_eq!(a.is(b), a == b, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn platform_does_not_match_other_roots() {
        assert!(!ErrorKind::Platform.is(ErrorKind::Data));
        assert!(!ErrorKind::Platform.is(ErrorKind::Runtime));
    }

    #[test]
    fn parent_table() {
        assert_eq!(ErrorKind::Platform.parent(), Some(ErrorKind::System));
        assert_eq!(ErrorKind::System.parent(), None);
        assert_eq!(ErrorKind::Data.parent(), None);
        assert_eq!(ErrorKind::Runtime.parent(), None);
    }

    #[test]
    fn all_kinds_have_unique_as_str() {
        let mut seen = HashSet::new();
        for kind in ALL_KINDS {
            assert!(seen.insert(kind.as_str()), "duplicate name: {kind}");
        }
        assert_eq!(seen.len(), ALL_KINDS.len());
    }

    #[test]
    fn display_matches_as_str() {
        for kind in ALL_KINDS {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn from_str_inverts_as_str() {
        for kind in ALL_KINDS {
            assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(*kind));
        }
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "warp_core".parse::<ErrorKind>().unwrap_err();
        assert_eq!(err, UnknownKind("warp_core".to_string()));
        assert_eq!(err.to_string(), "unknown error kind: warp_core");
    }

    #[test]
    fn serde_strings_match_as_str() {
        for kind in ALL_KINDS {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!(r#""{}""#, kind.as_str()));
            let back: ErrorKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
    }
}
