// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::aggregate::{self, Summary};
use crate::categories::CategoryRegistry;
use crate::config::Config;
use crate::error::{FormError, StoreError};
use crate::export;
use crate::models::{Transaction, TransactionDraft, TransactionType};
use crate::store::TransactionStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    Added(String),
    Updated(String),
}

impl Submitted {
    pub fn id(&self) -> &str {
        match self {
            Submitted::Added(id) | Submitted::Updated(id) => id,
        }
    }
}

/// Everything a front end needs for one sitting: the transactions, the
/// category choices and the form's edit toggle.
#[derive(Debug, Default, Clone)]
pub struct Session {
    store: TransactionStore,
    categories: CategoryRegistry,
    editing: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_transactions(transactions: impl IntoIterator<Item = Transaction>) -> Self {
        Self {
            store: TransactionStore::from_transactions(transactions),
            ..Self::default()
        }
    }

    pub fn with_demo_data() -> Self {
        Self::with_transactions(demo_transactions())
    }

    /// Starting session for the command line: demo records unless disabled,
    /// then the `--from` CSV appended.
    pub fn from_config(cfg: &Config) -> anyhow::Result<Self> {
        let mut session = if cfg.seed_demo {
            Self::with_demo_data()
        } else {
            Self::new()
        };
        if let Some(path) = &cfg.import_path {
            let added = session.extend(export::import_csv(path)?);
            info!(added, path = %path.display(), "loaded transactions");
        }
        Ok(session)
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.all()
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn add_category(&mut self, label: &str) -> bool {
        self.categories.add(label)
    }

    pub fn editing(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Enter edit mode for `id` and return the form pre-filled from it.
    pub fn begin_edit(&mut self, id: &str) -> Result<TransactionDraft, StoreError> {
        let t = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let draft = TransactionDraft::from_transaction(t);
        self.editing = Some(id.to_string());
        debug!(%id, "editing transaction");
        Ok(draft)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Add a new transaction, or replace the one being edited.
    ///
    /// On a validation failure nothing changes, including the edit state.
    pub fn submit(&mut self, draft: &TransactionDraft) -> Result<Submitted, FormError> {
        let fields = draft.validate()?;
        match self.editing.take() {
            Some(id) => match self.store.update(&id, fields) {
                Ok(_) => {
                    info!(%id, "transaction updated");
                    Ok(Submitted::Updated(id))
                }
                Err(e) => Err(e.into()),
            },
            None => {
                let id = self.store.insert(fields).id.clone();
                info!(%id, "transaction added");
                Ok(Submitted::Added(id))
            }
        }
    }

    /// Remove `id`; absent ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<Transaction> {
        let removed = self.store.delete(id);
        if removed.is_some() && self.editing.as_deref() == Some(id) {
            self.editing = None;
        }
        removed
    }

    /// Append records from outside the session, such as an imported file.
    pub fn extend(&mut self, transactions: impl IntoIterator<Item = Transaction>) -> usize {
        let before = self.store.len();
        for t in transactions {
            self.store.restore(t);
        }
        self.store.len() - before
    }

    pub fn summary(&self) -> Summary {
        aggregate::summarize(self.store.all())
    }
}

fn demo(
    id: &str,
    amount: i64,
    category: &str,
    description: &str,
    kind: TransactionType,
    (y, m, d): (i32, u32, u32),
) -> Option<Transaction> {
    let date: NaiveDateTime = NaiveDate::from_ymd_opt(y, m, d)?.and_hms_opt(0, 0, 0)?;
    Some(Transaction {
        id: id.to_string(),
        amount: Decimal::from(amount),
        category: category.to_string(),
        description: description.to_string(),
        kind,
        date,
    })
}

/// The records a fresh session starts with.
pub fn demo_transactions() -> Vec<Transaction> {
    use TransactionType::{Expense, Income};
    [
        demo("1", 3000, "salary", "Monthly Salary", Income, (2024, 3, 1)),
        demo("2", 500, "food", "Grocery Shopping", Expense, (2024, 3, 5)),
        demo("3", 200, "entertainment", "Movie Night", Expense, (2024, 3, 10)),
        demo("4", 1000, "investment", "Stock Investment", Income, (2024, 3, 15)),
    ]
    .into_iter()
    .flatten()
    .collect()
}
