// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::error::ErrorKind;
use tracing::warn;

use crate::{cli, commands, config::Config, session::Session, utils::split_words};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Quit,
}

/// Parse and run one shell line against the session.
pub fn execute_line(session: &mut Session, cfg: &Config, line: &str) -> Result<LineOutcome> {
    let words = split_words(line)?;
    if words.is_empty() {
        return Ok(LineOutcome::Continue);
    }

    let matches = match cli::build_shell().try_get_matches_from(&words) {
        Ok(m) => m,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                e.print()?;
                return Ok(LineOutcome::Continue);
            }
            _ => return Err(e.into()),
        },
    };

    match matches.subcommand() {
        Some(("quit", _)) => Ok(LineOutcome::Quit),
        Some(("help", _)) => {
            println!("{}", cli::build_shell().render_help());
            Ok(LineOutcome::Continue)
        }
        Some((name, sub)) => {
            commands::dispatch(session, cfg, name, sub)?;
            Ok(LineOutcome::Continue)
        }
        None => Ok(LineOutcome::Continue),
    }
}

/// Read commands until `quit` or end of input. A failing command is
/// reported and the session carries on.
pub fn run(session: &mut Session, cfg: &Config, input: impl BufRead) -> Result<()> {
    println!(
        "tallybook: {} transactions loaded. Type 'help' for commands, 'quit' to leave.",
        session.store().len()
    );
    prompt()?;
    for line in input.lines() {
        let line = line?;
        match execute_line(session, cfg, &line) {
            Ok(LineOutcome::Quit) => break,
            Ok(LineOutcome::Continue) => {}
            Err(e) => {
                warn!(line = %line, "command failed: {:#}", e);
                match e.downcast_ref::<clap::Error>() {
                    Some(clap_err) => eprintln!("{}", clap_err),
                    None => eprintln!("error: {:#}", e),
                }
            }
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}
