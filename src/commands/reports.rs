// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{category_totals, daily_amounts, grand_totals, monthly_totals};
use crate::config::Config;
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(session: &Session, cfg: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(session, cfg, sub)?,
        Some(("by-category", sub)) => by_category(session, cfg, sub)?,
        Some(("monthly", sub)) => monthly(session, cfg, sub)?,
        Some(("daily", sub)) => daily(session, cfg, sub)?,
        Some(("dashboard", sub)) => dashboard(session, cfg, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(session: &Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let totals = grand_totals(session.transactions());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let data = vec![
            vec!["Total Balance".into(), fmt_money(&totals.balance, &cfg.currency)],
            vec!["Total Income".into(), fmt_money(&totals.total_income, &cfg.currency)],
            vec!["Total Expenses".into(), fmt_money(&totals.total_expense, &cfg.currency)],
        ];
        println!("{}", pretty_table(&["", "Amount"], data));
    }
    Ok(())
}

fn by_category(session: &Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let mut items = category_totals(session.transactions());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &items)? {
        // largest first for display only
        items.sort_by(|a, b| b.total.cmp(&a.total));
        let data = items
            .into_iter()
            .map(|c| vec![c.category, fmt_money(&c.total, &cfg.currency)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], data));
    }
    Ok(())
}

fn monthly(session: &Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let buckets = monthly_totals(session.transactions());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &buckets)? {
        let data = buckets
            .into_iter()
            .map(|b| {
                vec![
                    b.month,
                    fmt_money(&b.income, &cfg.currency),
                    fmt_money(&b.expenses, &cfg.currency),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Income", "Expenses"], data));
    }
    Ok(())
}

fn daily(session: &Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let days = daily_amounts(session.transactions());
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &days)? {
        let data = days
            .into_iter()
            .map(|d| vec![d.date.to_string(), fmt_money(&d.amount, &cfg.currency)])
            .collect();
        println!("{}", pretty_table(&["Date", "Net"], data));
    }
    Ok(())
}

fn dashboard(session: &Session, cfg: &Config, sub: &clap::ArgMatches) -> Result<()> {
    let summary = session.summary();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &summary)? {
        return Ok(());
    }
    let money = |d: &rust_decimal::Decimal| fmt_money(d, &cfg.currency);
    println!(
        "Balance {}  |  Income {}  |  Expenses {}",
        money(&summary.totals.balance),
        money(&summary.totals.total_income),
        money(&summary.totals.total_expense)
    );
    let cats = summary
        .categories
        .iter()
        .map(|c| vec![c.category.clone(), money(&c.total)])
        .collect();
    println!("{}", pretty_table(&["Expense Category", "Spent"], cats));
    let months = summary
        .monthly
        .iter()
        .map(|b| vec![b.month.clone(), money(&b.income), money(&b.expenses)])
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expenses"], months));
    let days = summary
        .daily
        .iter()
        .map(|d| vec![d.date.to_string(), money(&d.amount)])
        .collect();
    println!("{}", pretty_table(&["Date", "Net"], days));
    Ok(())
}
