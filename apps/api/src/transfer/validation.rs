//! Batch validation of transfer rows against their own range, the locked flag and the
//! blocked set. The first failing row rejects the whole batch.

use thiserror::Error;

use crate::i18n::Strings;
use crate::models::transfer::TransferRow;
use crate::transfer::range::{BlockedSet, Interval};

/// Why a row stopped the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// `to_range` is not a `number-number` token.
    InvalidRange,
    /// Row is explicitly marked non-transferable.
    Locked,
    /// `to_range` touches a blocked interval.
    OverlapsBlocked { range: Interval, blocked: Interval },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row {row} rejected: {reason:?}")]
pub struct RowRejection {
    /// 1-based position in the submitted batch.
    pub row: usize,
    pub reason: RejectReason,
}

impl RowRejection {
    /// Localized message shown to the user.
    pub fn message(&self, strings: &Strings) -> String {
        match self.reason {
            RejectReason::InvalidRange => strings.err_invalid_range.to_string(),
            RejectReason::Locked | RejectReason::OverlapsBlocked { .. } => {
                strings.overlap_blocked(self.row)
            }
        }
    }
}

/// Checks a single row. Order matters: parse, then lock, then overlap.
pub fn check_row(row: &TransferRow, blocked: &BlockedSet) -> Result<Interval, RejectReason> {
    let range = Interval::parse(&row.to_range).map_err(|_| RejectReason::InvalidRange)?;

    if row.locked {
        return Err(RejectReason::Locked);
    }

    if let Some(hit) = blocked.first_overlap(&range) {
        return Err(RejectReason::OverlapsBlocked {
            range,
            blocked: hit,
        });
    }

    Ok(range)
}

/// Validates rows in submission order and stops at the first rejection.
pub fn validate_batch(rows: &[TransferRow], blocked: &BlockedSet) -> Result<(), RowRejection> {
    for (i, row) in rows.iter().enumerate() {
        check_row(row, blocked).map_err(|reason| RowRejection { row: i + 1, reason })?;
    }
    Ok(())
}
