//! Package-number ranges: the `a-b` token grammar and closed-interval overlap.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+)\s*-\s*([0-9]+)\s*$").expect("range pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("expected `number-number`, got {0:?}")]
    Malformed(String),

    #[error("range bound {0} does not fit in 64 bits")]
    OutOfBounds(String),
}

/// Closed range `[low, high]` of package numbers. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    low: u64,
    high: u64,
}

impl Interval {
    /// Builds an interval from two bounds given in either order.
    pub fn new(a: u64, b: u64) -> Self {
        if a > b {
            Self { low: b, high: a }
        } else {
            Self { low: a, high: b }
        }
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    /// Parses an `a-b` token, normalizing reversed bounds.
    pub fn parse(text: &str) -> Result<Self, RangeError> {
        let caps = RANGE_RE
            .captures(text)
            .ok_or_else(|| RangeError::Malformed(text.to_string()))?;

        let bound = |i: usize| -> Result<u64, RangeError> {
            let digits = &caps[i];
            digits
                .parse::<u64>()
                .map_err(|_| RangeError::OutOfBounds(digits.to_string()))
        };

        Ok(Self::new(bound(1)?, bound(2)?))
    }

    /// Closed-interval overlap: disjoint only when one ends strictly before the other starts.
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(self.high < other.low || other.high < self.low)
    }
}

impl FromStr for Interval {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.low(), self.high())
    }
}

/// Ranges that no transfer may touch, parsed from a comma-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedSet {
    intervals: Vec<Interval>,
}

impl BlockedSet {
    /// Parses `"100-120, 205-210"`.
    ///
    /// Blank entries are ignored. Malformed entries are skipped with a warning
    /// rather than failing the whole export.
    pub fn parse(text: &str) -> Self {
        let mut intervals = Vec::new();
        for part in text.split(',').map(str::trim) {
            if part.is_empty() {
                continue;
            }
            match Interval::parse(part) {
                Ok(interval) => intervals.push(interval),
                Err(e) => tracing::warn!("Ignoring blocked range entry: {e}"),
            }
        }
        Self { intervals }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// First blocked interval that overlaps `range`, in list order.
    pub fn first_overlap(&self, range: &Interval) -> Option<Interval> {
        self.intervals.iter().copied().find(|b| range.overlaps(b))
    }
}
