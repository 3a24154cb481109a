// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use thiserror::Error;

/// Rejected form input. The form keeps its contents; nothing is stored.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Please fill in all fields (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("Amount must not be negative (got {0}); use the transaction type for direction")]
    NegativeAmount(Decimal),
    #[error("Amount {0} is too large (limit {})", crate::models::MAX_AMOUNT)]
    AmountTooLarge(Decimal),
    #[error("Invalid transaction type '{0}', expected income|expense")]
    InvalidType(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("Transaction '{0}' not found")]
    NotFound(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum RangeError {
    #[error("Please select a start date")]
    MissingStart,
    #[error("Please select an end date")]
    MissingEnd,
    #[error("No transactions found in the selected date range ({start} to {end})")]
    Empty {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error("Unknown format: {0} (use xlsx|csv|json)")]
    UnknownFormat(String),
    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
