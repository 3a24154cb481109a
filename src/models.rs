// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Largest amount a single transaction may carry (one quadrillion).
/// Report sums over any in-memory store stay inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// A stored amount must be a non-negative magnitude no larger than
/// [`MAX_AMOUNT`].
pub fn check_amount(amount: Decimal) -> Result<Decimal, ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::NegativeAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge(amount));
    }
    Ok(amount)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(ValidationError::InvalidType(other.to_string())),
        }
    }
}

/// A single recorded income or expense event.
///
/// Field order is the column order of exported tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal, // always a non-negative magnitude
    pub category: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub date: NaiveDateTime,
}

impl Transaction {
    /// `+amount` for income, `-amount` for expenses.
    pub fn signed_amount(&self) -> Decimal {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// Raw form input, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub amount: String,
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            amount: String::new(),
            kind: TransactionType::Expense,
            category: String::new(),
            description: String::new(),
        }
    }
}

/// Validated form fields, ready to become a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFields {
    pub amount: Decimal,
    pub kind: TransactionType,
    pub category: String,
    pub description: String,
}

impl TransactionDraft {
    pub fn from_transaction(t: &Transaction) -> Self {
        Self {
            amount: t.amount.to_string(),
            kind: t.kind,
            category: t.category.clone(),
            description: t.description.clone(),
        }
    }

    /// Presence checks first, then the amount must be a non-negative number
    /// within [`MAX_AMOUNT`].
    pub fn validate(&self) -> Result<TransactionFields, ValidationError> {
        let amount = self.amount.trim();
        let category = self.category.trim();
        let description = self.description.trim();

        let mut missing = Vec::new();
        if amount.is_empty() {
            missing.push("amount");
        }
        if category.is_empty() {
            missing.push("category");
        }
        if description.is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let amount = amount
            .parse::<Decimal>()
            .map_err(|_| ValidationError::InvalidAmount(amount.to_string()))?;
        let amount = check_amount(amount)?;

        Ok(TransactionFields {
            amount,
            kind: self.kind,
            category: category.to_string(),
            description: description.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month: String, // short month label, e.g. "Mar"
    pub income: Decimal,
    pub expenses: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub date: chrono::NaiveDate,
    pub amount: Decimal, // net for the day, not cumulative
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub balance: Decimal,
    pub total_income: Decimal,
    pub total_expense: Decimal,
}
