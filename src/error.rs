//! Errors reported while finalizing a grammar.

use std::error::Error;
use std::fmt;

/// Represents an error when building a grammar.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// The grammar violates a structural invariant. Analysis cannot run
    /// on it.
    Malformed {
        /// Human-readable reason for the error.
        reason: String,
    },
    /// The grammar exceeds a configured limit. Raising the limit in
    /// [`Limits`](crate::Limits) fixes it.
    Capacity {
        /// What ran out: `"symbols"` or `"rules"`.
        what: &'static str,
        /// The configured maximum.
        limit: usize,
        /// The count the grammar asked for.
        requested: usize,
    },
}

impl BuildError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        BuildError::Malformed {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BuildError::Malformed { reason } => write!(f, "malformed grammar: {}", reason),
            BuildError::Capacity {
                what,
                limit,
                requested,
            } => write!(
                f,
                "capacity exceeded: {} {} requested, limit is {}",
                requested, what, limit
            ),
        }
    }
}

impl Error for BuildError {}
