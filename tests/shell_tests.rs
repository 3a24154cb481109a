// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tallybook::config::Config;
use tallybook::session::Session;
use tallybook::shell::{LineOutcome, execute_line};
use tallybook::utils::split_words;
use tallybook::{cli, commands::transactions};
use tempfile::tempdir;

fn config(dir: &std::path::Path) -> Config {
    Config {
        export_dir: Some(dir.to_path_buf()),
        currency: "$".into(),
        seed_demo: true,
        import_path: None,
    }
}

#[test]
fn split_words_handles_quotes() {
    assert_eq!(
        split_words(r#"tx add --description "Coffee beans" --category 'food & drink'"#).unwrap(),
        vec!["tx", "add", "--description", "Coffee beans", "--category", "food & drink"]
    );
    assert_eq!(split_words(r#"a\ b "" c"#).unwrap(), vec!["a b", "", "c"]);
    assert!(split_words(r#"tx add "unterminated"#).is_err());
    assert!(split_words("   ").unwrap().is_empty());
}

#[test]
fn shell_session_add_edit_delete() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path());
    let mut session = Session::with_demo_data();

    let out = execute_line(
        &mut session,
        &cfg,
        r#"tx add --amount 42 --category food --description "Corner shop""#,
    )
    .unwrap();
    assert_eq!(out, LineOutcome::Continue);
    assert_eq!(session.transactions().len(), 5);
    let new_id = session.transactions()[0].id.clone();
    assert_eq!(session.transactions()[0].description, "Corner shop");

    execute_line(&mut session, &cfg, &format!("tx edit {} --amount 40.5", new_id)).unwrap();
    let edited = session.store().get(&new_id).unwrap();
    assert_eq!(edited.amount, "40.5".parse::<Decimal>().unwrap());
    assert_eq!(edited.description, "Corner shop");
    assert_eq!(session.editing(), None);

    execute_line(&mut session, &cfg, &format!("tx rm {}", new_id)).unwrap();
    assert_eq!(session.transactions().len(), 4);
}

#[test]
fn failed_edit_does_not_leave_edit_mode() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path());
    let mut session = Session::with_demo_data();

    assert!(execute_line(&mut session, &cfg, "tx edit 2 --amount -3").is_err());
    assert_eq!(session.editing(), None);
    assert_eq!(session.store().get("2").unwrap().amount, Decimal::from(500));

    execute_line(&mut session, &cfg, "tx add --amount 1 --category other --description x").unwrap();
    assert_eq!(session.transactions().len(), 5);
}

#[test]
fn errors_are_not_fatal_and_quit_ends() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path());
    let mut session = Session::with_demo_data();

    assert!(execute_line(&mut session, &cfg, "tx add --amount 5").is_err());
    assert!(execute_line(&mut session, &cfg, "bogus").is_err());
    assert!(execute_line(&mut session, &cfg, "export --end 2024-03-10").is_err());
    assert_eq!(
        execute_line(&mut session, &cfg, "").unwrap(),
        LineOutcome::Continue
    );
    assert_eq!(execute_line(&mut session, &cfg, "quit").unwrap(), LineOutcome::Quit);
    assert_eq!(execute_line(&mut session, &cfg, "exit").unwrap(), LineOutcome::Quit);
    assert_eq!(session.transactions().len(), 4);
}

#[test]
fn shell_export_and_category() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path());
    let mut session = Session::with_demo_data();

    execute_line(&mut session, &cfg, "category add gifts").unwrap();
    assert_eq!(session.categories().custom(), &["gifts".to_string()]);

    execute_line(&mut session, &cfg, "export --start 2024-03-01 --end 2024-03-10").unwrap();
    assert!(dir.path().join("transactions_2024-03-01_2024-03-10.xlsx").exists());
}

#[test]
fn run_reads_until_quit() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path());
    let mut session = Session::new();
    let input = "tx add --amount 10 --type income --category salary --description pay\n\
                 not-a-command\n\
                 quit\n\
                 tx add --amount 99 --category food --description ignored\n";
    tallybook::shell::run(&mut session, &cfg, input.as_bytes()).unwrap();
    assert_eq!(session.transactions().len(), 1);
    assert_eq!(session.transactions()[0].description, "pay");
}

#[test]
fn list_filters_and_limit() {
    let session = Session::with_demo_data();
    let matches = cli::build_cli().get_matches_from(["tallybook", "tx", "list", "--type", "income", "--limit", "1"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&session, list_m).unwrap();
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].id, "1");
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn oversized_amounts_do_not_break_reports() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path());
    let mut session = Session::with_demo_data();
    let add = "tx add --amount 79228162514264337593543950335 --type income --category salary --description big";

    assert!(execute_line(&mut session, &cfg, add).is_err());
    assert!(execute_line(&mut session, &cfg, add).is_err());
    assert!(execute_line(&mut session, &cfg, "tx edit 1 --amount 79228162514264337593543950335").is_err());
    assert_eq!(session.transactions().len(), 4);
    assert_eq!(session.editing(), None);

    execute_line(&mut session, &cfg, "report summary").unwrap();
    execute_line(&mut session, &cfg, "report dashboard").unwrap();
}

#[test]
fn list_follows_session_order() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path());
    let mut session = Session::with_demo_data();
    execute_line(&mut session, &cfg, "tx add --amount 3 --category food --description tea").unwrap();

    let matches = cli::build_cli().get_matches_from(["tallybook", "tx", "list"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&session, list_m).unwrap();
    let descriptions: Vec<&str> = rows.iter().map(|t| t.description.as_str()).collect();
    // new entry first, then the demo records in the order they were loaded
    assert_eq!(
        descriptions,
        ["tea", "Monthly Salary", "Grocery Shopping", "Movie Night", "Stock Investment"]
    );
}

#[test]
fn report_commands_run_on_empty_and_demo_sessions() {
    let dir = tempdir().unwrap();
    let cfg = config(dir.path());
    for mut session in [Session::new(), Session::with_demo_data()] {
        for line in [
            "report summary",
            "report by-category --json",
            "report monthly --jsonl",
            "report daily",
            "report dashboard",
            "report dashboard --json",
            "category list",
            "tx list",
        ] {
            execute_line(&mut session, &cfg, line).unwrap();
        }
    }
}
