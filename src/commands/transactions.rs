// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Config;
use crate::models::{Transaction, TransactionDraft, TransactionType};
use crate::session::{Session, Submitted};
use crate::utils::{fmt_money, maybe_print_json, pretty_table, required};
use anyhow::Result;

pub fn handle(session: &mut Session, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, cfg, sub)?,
        Some(("edit", sub)) => edit(session, cfg, sub)?,
        Some(("rm", sub)) => rm(session, sub)?,
        Some(("list", sub)) => list(session, cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn kind_arg(sub: &clap::ArgMatches) -> Result<Option<TransactionType>> {
    match sub.get_one::<String>("type") {
        Some(s) => Ok(Some(s.parse()?)),
        None => Ok(None),
    }
}

fn add(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let draft = TransactionDraft {
        amount: required(sub, "amount")?.clone(),
        kind: kind_arg(sub)?.unwrap_or(TransactionType::Expense),
        category: required(sub, "category")?.clone(),
        description: required(sub, "description")?.clone(),
    };
    let outcome = session.submit(&draft)?;
    report_submit(session, cfg, &outcome);
    Ok(())
}

fn edit(session: &mut Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?.trim();
    let mut draft = session.begin_edit(id)?;
    if let Some(amount) = sub.get_one::<String>("amount") {
        draft.amount = amount.clone();
    }
    if let Some(kind) = kind_arg(sub)? {
        draft.kind = kind;
    }
    if let Some(category) = sub.get_one::<String>("category") {
        draft.category = category.clone();
    }
    if let Some(description) = sub.get_one::<String>("description") {
        draft.description = description.clone();
    }
    // a rejected edit must not turn the next add into an update
    let outcome = session.submit(&draft).inspect_err(|_| session.cancel_edit())?;
    report_submit(session, cfg, &outcome);
    Ok(())
}

fn report_submit(session: &Session, cfg: &Config, outcome: &Submitted) {
    let verb = match outcome {
        Submitted::Added(_) => "Recorded",
        Submitted::Updated(_) => "Updated",
    };
    if let Some(t) = session.store().get(outcome.id()) {
        println!(
            "{} {} {} '{}' ({}) [id {}]",
            verb,
            t.kind,
            fmt_money(&t.amount, &cfg.currency),
            t.description,
            t.category,
            t.id
        );
    }
}

fn rm(session: &mut Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?.trim();
    match session.delete(id) {
        Some(t) => println!("Deleted '{}' [id {}]", t.description, t.id),
        None => println!("No transaction with id {}", id),
    }
    Ok(())
}

fn list(session: &Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                let sign = if t.is_income() { "+" } else { "-" };
                vec![
                    t.id.clone(),
                    t.date.format("%Y-%m-%d").to_string(),
                    t.description.clone(),
                    t.category.clone(),
                    format!("{}{}", sign, fmt_money(&t.amount, &cfg.currency)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Description", "Category", "Amount"], rows)
        );
    }
    Ok(())
}

/// Transactions matching the list filters, newest first.
pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<Transaction>> {
    let kind = kind_arg(sub)?;
    let category = sub.get_one::<String>("category").map(|c| c.trim());
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    Ok(session
        .transactions()
        .iter()
        .filter(|t| kind.is_none_or(|k| t.kind == k))
        .filter(|t| category.is_none_or(|c| t.category == c))
        .take(limit)
        .cloned()
        .collect())
}
