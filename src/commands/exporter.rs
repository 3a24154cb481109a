// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::export::{ExportFormat, ExportOptions, ExportReport, SHEET_NAME, export_range};
use crate::session::Session;
use crate::utils::{parse_bound, required};
use anyhow::Result;
use std::path::PathBuf;

pub fn handle(session: &Session, cfg: &Config, m: &clap::ArgMatches) -> Result<ExportReport> {
    let format: ExportFormat = required(m, "format")?.parse()?;
    let start = m.get_one::<String>("start").map(|s| parse_bound(s)).transpose()?;
    let end = m.get_one::<String>("end").map(|s| parse_bound(s)).transpose()?;
    let dir = match m.get_one::<String>("out-dir") {
        Some(d) => PathBuf::from(d.trim()),
        None => cfg.export_dir()?,
    };

    let report = export_range(session.transactions(), start, end, &ExportOptions { dir, format })?;
    println!(
        "Exported {} transactions ({} sheet) to {}",
        report.rows,
        SHEET_NAME,
        report.path.display()
    );
    Ok(report)
}
