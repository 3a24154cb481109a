// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Report views derived from a transaction list.
//!
//! Every function is a single pass over its input and keeps buckets in the
//! order their key first appears, so identical input order gives identical
//! output. Nothing is cached; callers recompute from the current store.

use std::collections::HashMap;
use std::hash::Hash;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{CategoryTotal, DayBucket, MonthBucket, Totals, Transaction};

/// Insertion-ordered accumulator keyed by `K`.
struct Buckets<K, V> {
    index: HashMap<K, usize>,
    values: Vec<V>,
}

impl<K: Eq + Hash + Clone, V> Buckets<K, V> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            values: Vec::new(),
        }
    }

    fn entry(&mut self, key: &K, init: impl FnOnce() -> V) -> &mut V {
        let idx = match self.index.get(key) {
            Some(&i) => i,
            None => {
                self.values.push(init());
                let i = self.values.len() - 1;
                self.index.insert(key.clone(), i);
                i
            }
        };
        &mut self.values[idx]
    }

    fn into_vec(self) -> Vec<V> {
        self.values
    }
}

/// Expense totals per category. Categories without expenses are left out.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut buckets = Buckets::new();
    for t in transactions.iter().filter(|t| t.is_expense()) {
        let entry = buckets.entry(&t.category, || CategoryTotal {
            category: t.category.clone(),
            total: Decimal::ZERO,
        });
        entry.total += t.amount;
    }
    buckets.into_vec()
}

/// Short month label (`Jan`, `Feb`, ...) used as the monthly bucket key.
pub fn month_label(date: &chrono::NaiveDateTime) -> String {
    date.format("%b").to_string()
}

/// Income and expenses per month label.
///
/// Buckets are keyed by label alone: March 2023 and March 2024 share one
/// bucket.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthBucket> {
    let mut buckets = Buckets::new();
    for t in transactions {
        let month = month_label(&t.date);
        let entry = buckets.entry(&month, || MonthBucket {
            month: month.clone(),
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        });
        if t.is_income() {
            entry.income += t.amount;
        } else {
            entry.expenses += t.amount;
        }
    }
    buckets.into_vec()
}

/// Net signed amount per calendar day. Not a running balance.
pub fn daily_amounts(transactions: &[Transaction]) -> Vec<DayBucket> {
    let mut buckets: Buckets<NaiveDate, DayBucket> = Buckets::new();
    for t in transactions {
        let day = t.date.date();
        let entry = buckets.entry(&day, || DayBucket {
            date: day,
            amount: Decimal::ZERO,
        });
        entry.amount += t.signed_amount();
    }
    buckets.into_vec()
}

pub fn grand_totals(transactions: &[Transaction]) -> Totals {
    let mut totals = Totals::default();
    for t in transactions {
        if t.is_income() {
            totals.total_income += t.amount;
        } else {
            totals.total_expense += t.amount;
        }
    }
    totals.balance = totals.total_income - totals.total_expense;
    totals
}

/// Every report view for one snapshot of the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub totals: Totals,
    pub categories: Vec<CategoryTotal>,
    pub monthly: Vec<MonthBucket>,
    pub daily: Vec<DayBucket>,
}

pub fn summarize(transactions: &[Transaction]) -> Summary {
    tracing::debug!(count = transactions.len(), "recomputing report views");
    Summary {
        totals: grand_totals(transactions),
        categories: category_totals(transactions),
        monthly: monthly_totals(transactions),
        daily: daily_amounts(transactions),
    }
}
