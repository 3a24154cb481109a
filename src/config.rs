// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Tallybook", "tallybook"));

pub const DEFAULT_CURRENCY: &str = "$";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit export dir; `None` falls back to [`default_export_dir`] when
    /// something is exported.
    pub export_dir: Option<PathBuf>,
    pub currency: String,
    pub seed_demo: bool,
    pub import_path: Option<PathBuf>,
}

/// Platform data dir + `exports`. Not created until something is exported.
pub fn default_export_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join("exports"))
}

impl Config {
    /// Resolve from top-level matches. Flag values already include their
    /// environment fallbacks (`TALLYBOOK_EXPORT_DIR`, `TALLYBOOK_CURRENCY`).
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let export_dir = m
            .get_one::<String>("export-dir")
            .map(|dir| dir.trim())
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        let currency = m
            .get_one::<String>("currency")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        Ok(Self {
            export_dir,
            currency,
            seed_demo: !m.get_flag("no-demo"),
            import_path: m.get_one::<String>("from").map(|p| PathBuf::from(p.trim())),
        })
    }

    pub fn export_dir(&self) -> Result<PathBuf> {
        match &self.export_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_export_dir(),
        }
    }
}
