// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use tallybook::config::Config;
use tallybook::error::{ExportError, RangeError, ValidationError};
use tallybook::export::{
    COLUMNS, ExportFormat, ExportOptions, SHEET_NAME, export_file_name, export_range, import_csv,
};
use tallybook::session::Session;
use tallybook::shell::execute_line;
use tallybook::utils::parse_bound;
use tallybook::{cli, commands::exporter, commands::importer};
use tempfile::tempdir;

fn config_for(dir: &Path) -> Config {
    let dir = dir.to_string_lossy().to_string();
    let matches = cli::build_cli().get_matches_from(["tallybook", "--export-dir", dir.as_str(), "shell"]);
    Config::from_matches(&matches).unwrap()
}

fn run_export(session: &Session, cfg: &Config, args: &[&str]) -> anyhow::Result<tallybook::export::ExportReport> {
    let mut argv = vec!["tallybook", "export"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    match matches.subcommand() {
        Some(("export", export_m)) => exporter::handle(session, cfg, export_m),
        _ => panic!("no export subcommand"),
    }
}

fn files_in(dir: &Path) -> usize {
    match std::fs::read_dir(dir) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

#[test]
fn demo_range_exports_three_rows() {
    let dir = tempdir().unwrap();
    let cfg = config_for(dir.path());
    let session = Session::with_demo_data();

    let report = run_export(
        &session,
        &cfg,
        &["--start", "2024-03-01", "--end", "2024-03-10", "--format", "csv"],
    )
    .unwrap();
    assert_eq!(report.rows, 3);
    assert_eq!(
        report.path.file_name().unwrap().to_str().unwrap(),
        "transactions_2024-03-01_2024-03-10.csv"
    );
    assert_eq!(report.path.file_stem().unwrap(), "transactions_2024-03-01_2024-03-10");

    let contents = std::fs::read_to_string(&report.path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "id,amount,category,description,type,date");
    assert_eq!(lines[1], "1,3000,salary,Monthly Salary,income,2024-03-01T00:00:00");
    assert_eq!(lines.len(), 4);
    assert!(!contents.contains("Stock Investment"));
}

#[test]
fn missing_start_blocks_export() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("out");
    let cfg = config_for(&out);
    let session = Session::with_demo_data();

    let err = run_export(&session, &cfg, &["--end", "2024-03-10"]).unwrap_err();
    match err.downcast_ref::<ExportError>() {
        Some(ExportError::Range(RangeError::MissingStart)) => {}
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(files_in(&out), 0);
}

#[test]
fn empty_range_blocks_export() {
    let dir = tempdir().unwrap();
    let session = Session::with_demo_data();
    let opts = ExportOptions {
        dir: dir.path().to_path_buf(),
        format: ExportFormat::Csv,
    };
    let start = parse_bound("2023-01-01").ok();
    let end = parse_bound("2023-12-31").ok();
    let err = export_range(session.transactions(), start, end, &opts).unwrap_err();
    assert!(matches!(err, ExportError::Range(RangeError::Empty { .. })));
    assert_eq!(files_in(dir.path()), 0);
}

#[test]
fn unknown_format_is_rejected_before_writing() {
    let dir = tempdir().unwrap();
    let cfg = config_for(dir.path());
    let session = Session::with_demo_data();

    let res = run_export(
        &session,
        &cfg,
        &["--start", "2024-03-01", "--end", "2024-03-31", "--format", "xml"],
    );
    assert!(res.is_err());
    assert_eq!(files_in(dir.path()), 0);
}

#[test]
fn json_export_keys_rows_by_sheet_name() {
    let dir = tempdir().unwrap();
    let cfg = config_for(dir.path());
    let session = Session::with_demo_data();

    let report = run_export(
        &session,
        &cfg,
        &["--start", "2024-03-05", "--end", "2024-03-15", "--format", "json"],
    )
    .unwrap();
    assert_eq!(report.rows, 3);
    assert!(report.path.ends_with("transactions_2024-03-05_2024-03-15.json"));

    let parsed: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report.path).unwrap()).unwrap();
    let rows = parsed["Transactions"].as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        serde_json::json!({
            "id": "2",
            "amount": 500.0,
            "category": "food",
            "description": "Grocery Shopping",
            "type": "expense",
            "date": "2024-03-05T00:00:00"
        })
    );
}

#[test]
fn out_dir_overrides_configured_dir() {
    let dir = tempdir().unwrap();
    let cfg = config_for(&dir.path().join("configured"));
    let other = dir.path().join("elsewhere");
    let other_str = other.to_string_lossy().to_string();
    let session = Session::with_demo_data();

    let report = run_export(
        &session,
        &cfg,
        &["--start", "2024-03-01", "--end", "2024-03-31", "--out-dir", &other_str],
    )
    .unwrap();
    assert_eq!(report.rows, 4);
    assert!(report.path.starts_with(&other));
    assert_eq!(files_in(&dir.path().join("configured")), 0);
}

#[test]
fn file_name_uses_day_of_each_bound() {
    let start = parse_bound("2024-03-01T08:30").unwrap();
    let end = parse_bound("2024-03-10 23:59:59").unwrap();
    assert_eq!(
        export_file_name(&start, &end, ExportFormat::Csv),
        "transactions_2024-03-01_2024-03-10.csv"
    );
}

#[test]
fn exported_csv_imports_back() {
    let dir = tempdir().unwrap();
    let session = Session::with_demo_data();
    let opts = ExportOptions {
        dir: dir.path().to_path_buf(),
        format: ExportFormat::Csv,
    };
    let report = export_range(
        session.transactions(),
        parse_bound("2024-03-01").ok(),
        parse_bound("2024-03-31").ok(),
        &opts,
    )
    .unwrap();

    let back = import_csv(&report.path).unwrap();
    assert_eq!(back, session.transactions());
}

#[test]
fn default_export_is_a_transactions_sheet() {
    let dir = tempdir().unwrap();
    let cfg = config_for(dir.path());
    let session = Session::with_demo_data();

    let report = run_export(&session, &cfg, &["--start", "2024-03-01", "--end", "2024-03-10"]).unwrap();
    assert!(report.path.ends_with("transactions_2024-03-01_2024-03-10.xlsx"));

    let mut workbook: Xlsx<_> = open_workbook(&report.path).unwrap();
    assert_eq!(workbook.sheet_names(), vec![SHEET_NAME.to_string()]);
    let range = workbook.worksheet_range(SHEET_NAME).unwrap();
    assert_eq!(range.get_size(), (4, COLUMNS.len()));
    for (col, name) in COLUMNS.iter().enumerate() {
        assert_eq!(range.get_value((0, col as u32)), Some(&Data::String(name.to_string())));
    }
    assert_eq!(range.get_value((1, 0)), Some(&Data::String("1".into())));
    assert_eq!(range.get_value((1, 1)), Some(&Data::Float(3000.0)));
    assert_eq!(range.get_value((2, 1)), Some(&Data::Float(500.0)));
    assert_eq!(range.get_value((1, 4)), Some(&Data::String("income".into())));
    assert_eq!(
        range.get_value((3, 5)),
        Some(&Data::String("2024-03-10T00:00:00".into()))
    );
}

#[test]
fn default_export_dir_is_resolved_only_when_exporting() {
    let matches = cli::build_cli().get_matches_from(["tallybook", "report", "summary"]);
    let cfg = Config::from_matches(&matches).unwrap();
    if std::env::var_os("TALLYBOOK_EXPORT_DIR").is_none() {
        assert_eq!(cfg.export_dir, None);
    }

    let dir = tempdir().unwrap();
    let explicit = config_for(dir.path());
    assert_eq!(explicit.export_dir().unwrap(), dir.path());
}

fn export_demo_csv(dir: &Path) -> std::path::PathBuf {
    let opts = ExportOptions {
        dir: dir.to_path_buf(),
        format: ExportFormat::Csv,
    };
    export_range(
        Session::with_demo_data().transactions(),
        parse_bound("2024-03-01").ok(),
        parse_bound("2024-03-31").ok(),
        &opts,
    )
    .unwrap()
    .path
}

#[test]
fn import_command_appends_and_reassigns_clashing_ids() {
    let dir = tempdir().unwrap();
    let cfg = config_for(dir.path());
    let csv_path = export_demo_csv(dir.path());
    let csv_str = csv_path.to_string_lossy().to_string();

    let mut fresh = Session::new();
    let matches = cli::build_cli().get_matches_from(["tallybook", "import", "--path", csv_str.as_str()]);
    let Some(("import", import_m)) = matches.subcommand() else {
        panic!("no import subcommand");
    };
    assert_eq!(importer::handle(&mut fresh, import_m).unwrap(), 4);
    assert_eq!(fresh.transactions(), Session::with_demo_data().transactions());

    let mut seeded = Session::with_demo_data();
    execute_line(&mut seeded, &cfg, &format!("import --path '{}'", csv_str)).unwrap();
    assert_eq!(seeded.transactions().len(), 8);
    let mut ids: Vec<&str> = seeded.transactions().iter().map(|t| t.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 8);

    assert!(execute_line(&mut seeded, &cfg, "import --path does-not-exist.csv").is_err());
    assert_eq!(seeded.transactions().len(), 8);
}

#[test]
fn from_flag_loads_csv_into_the_starting_session() {
    let dir = tempdir().unwrap();
    let csv_path = export_demo_csv(dir.path());
    let csv_str = csv_path.to_string_lossy().to_string();

    let matches =
        cli::build_cli().get_matches_from(["tallybook", "--no-demo", "--from", csv_str.as_str(), "report", "summary"]);
    let cfg = Config::from_matches(&matches).unwrap();
    let session = Session::from_config(&cfg).unwrap();
    assert_eq!(session.transactions(), Session::with_demo_data().transactions());

    let matches = cli::build_cli().get_matches_from(["tallybook", "--from", csv_str.as_str(), "shell"]);
    let cfg = Config::from_matches(&matches).unwrap();
    assert_eq!(Session::from_config(&cfg).unwrap().transactions().len(), 8);
}

#[test]
fn import_rejects_oversized_amounts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("big.csv");
    std::fs::write(
        &path,
        "id,amount,category,description,type,date\n\
         9,79228162514264337593543950335,salary,Jackpot,income,2024-03-01T00:00:00\n",
    )
    .unwrap();
    let err = import_csv(&path).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ValidationError>(),
        Some(ValidationError::AmountTooLarge(_))
    ));
}
