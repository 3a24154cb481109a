// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;

use crate::error::RangeError;
use crate::models::Transaction;

/// Transactions dated within `start..=end`, in input order.
///
/// Bounds are full date-times; a bound given as a bare day means midnight,
/// so a record made later on the `end` day falls outside the range.
pub fn filter_by_range<'a>(
    transactions: &'a [Transaction],
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<Vec<&'a Transaction>, RangeError> {
    let start = start.ok_or(RangeError::MissingStart)?;
    let end = end.ok_or(RangeError::MissingEnd)?;

    let selected: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| t.date >= start && t.date <= end)
        .collect();

    if selected.is_empty() {
        return Err(RangeError::Empty { start, end });
    }
    Ok(selected)
}
