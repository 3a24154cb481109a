// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub const DEFAULT_CATEGORIES: [&str; 8] = [
    "food",
    "transport",
    "utilities",
    "entertainment",
    "shopping",
    "salary",
    "investment",
    "other",
];

/// Category labels offered by the transaction form.
///
/// Custom labels live for the session only and are not checked for
/// uniqueness. Transactions store the label as plain text, so nothing here
/// constrains what a transaction may carry.
#[derive(Debug, Default, Clone)]
pub struct CategoryRegistry {
    custom: Vec<String>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false for blank labels, which are ignored.
    pub fn add(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        self.custom.push(label.to_string());
        true
    }

    pub fn custom(&self) -> &[String] {
        &self.custom
    }

    pub fn all(&self) -> Vec<&str> {
        DEFAULT_CATEGORIES
            .iter()
            .copied()
            .chain(self.custom.iter().map(String::as_str))
            .collect()
    }
}
