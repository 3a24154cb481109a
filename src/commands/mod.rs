// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod categories;
pub mod transactions;
pub mod reports;
pub mod importer;
pub mod exporter;

use anyhow::Result;

use crate::config::Config;
use crate::session::Session;

/// Route one parsed session command. Returns false for names it does not own.
pub fn dispatch(
    session: &mut Session,
    cfg: &Config,
    name: &str,
    sub: &clap::ArgMatches,
) -> Result<bool> {
    match name {
        "tx" => transactions::handle(session, cfg, sub)?,
        "category" => categories::handle(session, sub)?,
        "report" => reports::handle(session, cfg, sub)?,
        "export" => {
            exporter::handle(session, cfg, sub)?;
        }
        "import" => {
            importer::handle(session, sub)?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
