// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, anyhow};
use chrono::{NaiveDate, NaiveDateTime};
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::Decimal;

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

/// A range bound: `YYYY-MM-DD` (midnight), or a full date-time with `T` or a
/// space between date and time.
pub fn parse_bound(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    let day = parse_date(s).map_err(|_| {
        anyhow!("Invalid date '{}', expected YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]", s)
    })?;
    day.and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("Invalid date '{}'", s))
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    let rounded = d.round_dp(2);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}{:.2}", symbol, rounded.abs())
    } else {
        format!("{}{:.2}", symbol, rounded.abs())
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}

/// Value of an argument clap marks as required.
pub fn required<'a>(m: &'a clap::ArgMatches, name: &str) -> Result<&'a String> {
    m.get_one::<String>(name)
        .with_context(|| format!("Missing required argument '{}'", name))
}

/// Split a shell line into words. Single and double quotes group words;
/// a backslash escapes the next character outside single quotes.
pub fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut cur = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('\''), c) => cur.push(c),
            (Some(_), '\\') | (None, '\\') => {
                let next = chars
                    .next()
                    .ok_or_else(|| anyhow!("Trailing backslash in '{}'", line))?;
                cur.push(next);
                in_word = true;
            }
            (Some(_), c) => cur.push(c),
            (None, '\'') | (None, '"') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut cur));
                    in_word = false;
                }
            }
            (None, c) => {
                cur.push(c);
                in_word = true;
            }
        }
    }
    if let Some(q) = quote {
        return Err(anyhow!("Unclosed {} quote in '{}'", q, line));
    }
    if in_word {
        words.push(cur);
    }
    Ok(words)
}
