// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use tallybook::{cli, commands, config::Config, logging, session::Session, shell};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    logging::init(matches.get_count("verbose"));
    let cfg = Config::from_matches(&matches)?;
    tracing::debug!(?cfg, "resolved configuration");

    let mut session = Session::from_config(&cfg)?;

    match matches.subcommand() {
        None | Some(("shell", _)) => {
            let stdin = std::io::stdin();
            shell::run(&mut session, &cfg, stdin.lock())?;
        }
        Some((name, sub)) => {
            if !commands::dispatch(&mut session, &cfg, name, sub)? {
                cli::build_cli().print_help()?;
                println!();
            }
        }
    }
    Ok(())
}
