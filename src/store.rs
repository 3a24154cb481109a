// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDateTime, Utc};
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::models::{Transaction, TransactionFields};

/// Ordered in-memory collection of transactions, newest first.
///
/// Ids are unique for the lifetime of the store. New ids come from the
/// current time in milliseconds; a clash bumps the token until it is free.
#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    items: Vec<Transaction>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records, keeping their order.
    pub fn from_transactions(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        let mut store = Self::new();
        for t in transactions {
            store.restore(t);
        }
        store
    }

    pub fn all(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Create a transaction dated now and put it at the front.
    pub fn insert(&mut self, fields: TransactionFields) -> &Transaction {
        self.insert_at(fields, Local::now().naive_local())
    }

    pub fn insert_at(&mut self, fields: TransactionFields, date: NaiveDateTime) -> &Transaction {
        let id = self.next_id();
        debug!(%id, amount = %fields.amount, kind = %fields.kind, "insert transaction");
        self.items.insert(
            0,
            Transaction {
                id,
                amount: fields.amount,
                category: fields.category,
                description: fields.description,
                kind: fields.kind,
                date,
            },
        );
        &self.items[0]
    }

    /// Append a record that already has an id and date (demo data, imports).
    /// A clashing id is replaced by a fresh one.
    pub fn restore(&mut self, mut transaction: Transaction) -> &Transaction {
        if transaction.id.trim().is_empty() || self.contains(&transaction.id) {
            let fresh = self.next_id();
            warn!(old = %transaction.id, new = %fresh, "transaction id already in use, reassigned");
            transaction.id = fresh;
        }
        self.items.push(transaction);
        let last = self.items.len() - 1;
        &self.items[last]
    }

    /// Replace every field except `id` and `date` of the record matching `id`.
    pub fn update(&mut self, id: &str, fields: TransactionFields) -> Result<&Transaction, StoreError> {
        let t = self
            .items
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        t.amount = fields.amount;
        t.kind = fields.kind;
        t.category = fields.category;
        t.description = fields.description;
        debug!(%id, "update transaction");
        Ok(&*t)
    }

    /// Remove the record with `id`. Absent ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<Transaction> {
        let pos = self.items.iter().position(|t| t.id == id)?;
        debug!(%id, "delete transaction");
        Some(self.items.remove(pos))
    }

    fn next_id(&self) -> String {
        let mut token = Utc::now().timestamp_millis();
        while self.contains(&token.to_string()) {
            token += 1;
        }
        token.to_string()
    }
}
