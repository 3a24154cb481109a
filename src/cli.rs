// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print as JSON lines"),
    )
}

fn type_arg() -> Arg {
    Arg::new("type")
        .long("type")
        .value_parser(["income", "expense"])
        .help("income or expense")
}

fn tx_command() -> Command {
    Command::new("tx")
        .about("Record, edit, remove and list transactions")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add a transaction dated now")
                .arg(Arg::new("amount").long("amount").required(true).allow_hyphen_values(true))
                .arg(Arg::new("category").long("category").required(true))
                .arg(Arg::new("description").long("description").required(true))
                .arg(type_arg().default_value("expense")),
        )
        .subcommand(
            Command::new("edit")
                .about("Edit a transaction; omitted fields keep their current value")
                .arg(Arg::new("id").required(true))
                .arg(Arg::new("amount").long("amount").allow_hyphen_values(true))
                .arg(Arg::new("category").long("category"))
                .arg(Arg::new("description").long("description"))
                .arg(type_arg()),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a transaction")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(json_args(
            Command::new("list")
                .about("List transactions in session order (new entries first)")
                .arg(type_arg())
                .arg(Arg::new("category").long("category"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
}

fn category_command() -> Command {
    Command::new("category")
        .about("Manage category choices for this session")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .about("Add a custom category")
                .arg(Arg::new("name").required(true)),
        )
        .subcommand(Command::new("list").about("List default and custom categories"))
}

fn report_command() -> Command {
    Command::new("report")
        .about("Aggregated views over all transactions")
        .subcommand_required(true)
        .subcommand(json_args(
            Command::new("summary").about("Balance, total income and total expenses"),
        ))
        .subcommand(json_args(
            Command::new("by-category").about("Expense totals per category"),
        ))
        .subcommand(json_args(
            Command::new("monthly").about("Income and expenses per month"),
        ))
        .subcommand(json_args(
            Command::new("daily").about("Net amount per day"),
        ))
        .subcommand(json_args(
            Command::new("dashboard").about("Totals, categories, months and days together"),
        ))
}

fn export_command() -> Command {
    Command::new("export")
        .about("Export transactions dated within a range (inclusive)")
        .arg(Arg::new("start").long("start").help("YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]"))
        .arg(Arg::new("end").long("end").help("YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS]"))
        .arg(
            Arg::new("format")
                .long("format")
                .default_value("xlsx")
                .help("xlsx, csv or json"),
        )
        .arg(
            Arg::new("out-dir")
                .long("out-dir")
                .help("Directory for the export file (defaults to the configured export dir)"),
        )
}

fn import_command() -> Command {
    Command::new("import")
        .about("Append transactions from a CSV file in the export layout")
        .arg(Arg::new("path").long("path").required(true))
}

/// Commands available both one-shot and inside the shell.
fn session_commands(cmd: Command) -> Command {
    cmd.subcommand(tx_command())
        .subcommand(category_command())
        .subcommand(report_command())
        .subcommand(export_command())
        .subcommand(import_command())
}

pub fn build_cli() -> Command {
    let cmd = Command::new("tallybook")
        .version(clap::crate_version!())
        .about("Track income and expenses, see where the money goes, export date ranges")
        .arg(
            Arg::new("no-demo")
                .long("no-demo")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Start with an empty session instead of the demo transactions"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .global(true)
                .help("Load transactions from a CSV export before running the command"),
        )
        .arg(
            Arg::new("export-dir")
                .long("export-dir")
                .global(true)
                .env("TALLYBOOK_EXPORT_DIR")
                .help("Where export files are written"),
        )
        .arg(
            Arg::new("currency")
                .long("currency")
                .global(true)
                .env("TALLYBOOK_CURRENCY")
                .help("Currency symbol used when printing amounts"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (-v, -vv, -vvv)"),
        )
        .subcommand(Command::new("shell").about("Interactive session (default)"));
    session_commands(cmd)
}

/// Parser for one line typed into the shell.
pub fn build_shell() -> Command {
    let cmd = Command::new("tallybook")
        .no_binary_name(true)
        .disable_version_flag(true)
        .subcommand_required(true)
        .subcommand(Command::new("help").about("Show commands"))
        .subcommand(Command::new("quit").alias("exit").about("Leave the shell"));
    session_commands(cmd).disable_help_subcommand(true)
}
