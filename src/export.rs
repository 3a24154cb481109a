// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};
use tracing::info;

use crate::error::{ExportError, RangeError};
use crate::models::{Transaction, check_amount};
use crate::range::filter_by_range;

pub const SHEET_NAME: &str = "Transactions";

/// Column headers, in `Transaction` field order.
pub const COLUMNS: [&str; 6] = ["id", "amount", "category", "description", "type", "date"];

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(ExportFormat::Xlsx),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub dir: PathBuf,
    pub format: ExportFormat,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportReport {
    pub path: PathBuf,
    pub rows: usize,
}

/// `transactions_<start>_<end>.<ext>` with both bounds as `YYYY-MM-DD`.
pub fn export_file_name(start: &NaiveDateTime, end: &NaiveDateTime, format: ExportFormat) -> String {
    format!(
        "transactions_{}_{}.{}",
        start.format("%Y-%m-%d"),
        end.format("%Y-%m-%d"),
        format.extension()
    )
}

/// Filter by range and write the selection as one table.
///
/// The range is checked before anything touches the filesystem, so a
/// missing bound or an empty selection leaves no file behind.
pub fn export_range(
    transactions: &[Transaction],
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let start = start.ok_or(RangeError::MissingStart)?;
    let end = end.ok_or(RangeError::MissingEnd)?;
    let selected = filter_by_range(transactions, Some(start), Some(end))?;

    fs::create_dir_all(&opts.dir)?;
    let path = opts.dir.join(export_file_name(&start, &end, opts.format));
    match opts.format {
        ExportFormat::Xlsx => write_xlsx(&path, &selected)?,
        ExportFormat::Csv => write_csv(&path, &selected)?,
        ExportFormat::Json => write_json(&path, &selected)?,
    }

    info!(path = %path.display(), rows = selected.len(), "exported transactions");
    Ok(ExportReport {
        path,
        rows: selected.len(),
    })
}

/// One worksheet named [`SHEET_NAME`]: a bold header row, then one row per
/// transaction with the amount as a number.
fn write_xlsx(path: &Path, rows: &[&Transaction]) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    let bold = Format::new().set_bold();
    for (col, name) in COLUMNS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *name, &bold)?;
    }
    for (i, t) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_string(row, 0, t.id.as_str())?;
        match t.amount.to_f64() {
            Some(n) => sheet.write_number(row, 1, n)?,
            None => sheet.write_string(row, 1, t.amount.to_string())?,
        };
        sheet.write_string(row, 2, t.category.as_str())?;
        sheet.write_string(row, 3, t.description.as_str())?;
        sheet.write_string(row, 4, t.kind.as_str())?;
        sheet.write_string(row, 5, t.date.format(DATE_FORMAT).to_string())?;
    }
    workbook.save(path)?;
    Ok(())
}

fn write_csv(path: &Path, rows: &[&Transaction]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;
    for t in rows {
        wtr.serialize(t)?;
    }
    wtr.flush()?;
    Ok(())
}

/// One object keyed by the sheet name, holding the rows. Amounts are JSON
/// numbers.
fn write_json(path: &Path, rows: &[&Transaction]) -> Result<(), ExportError> {
    let rows: Vec<serde_json::Value> = rows
        .iter()
        .map(|t| {
            serde_json::json!({
                "id": t.id,
                "amount": t.amount.to_f64(),
                "category": t.category,
                "description": t.description,
                "type": t.kind,
                "date": t.date.format(DATE_FORMAT).to_string(),
            })
        })
        .collect();
    let mut sheet = serde_json::Map::new();
    sheet.insert(SHEET_NAME.to_string(), serde_json::Value::Array(rows));
    fs::write(path, serde_json::to_string_pretty(&sheet)?)?;
    Ok(())
}

/// Read transactions back from a file in the CSV export layout.
pub fn import_csv(path: &Path) -> Result<Vec<Transaction>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path.display()))?;

    let mut out = Vec::new();
    for (i, result) in rdr.deserialize::<Transaction>().enumerate() {
        let t = result.with_context(|| format!("Invalid record {} in {}", i + 1, path.display()))?;
        check_amount(t.amount)
            .with_context(|| format!("Transaction '{}' in {}", t.id, path.display()))?;
        out.push(t);
    }
    info!(path = %path.display(), count = out.len(), "imported transactions");
    Ok(out)
}
