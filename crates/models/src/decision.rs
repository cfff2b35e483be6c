use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a committed swipe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Eq, Hash, PartialEq)]
pub enum Decision {
    /// Copy the file into the output directory.
    Keep,
    /// Drop the file from the pending stack, no file-system write.
    Discard,
}

impl Decision {
    /// Positive drag fractions keep, everything else discards.
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction > 0.0 { Self::Keep } else { Self::Discard }
    }

    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Keep => "👍",
            Self::Discard => "👎",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Keep => write!(f, "Keep"),
            Decision::Discard => write!(f, "Discard"),
        }
    }
}
