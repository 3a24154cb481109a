// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::export::import_csv;
use crate::session::Session;
use crate::utils::required;
use anyhow::Result;
use std::path::Path;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<usize> {
    let path = required(m, "path")?.trim();
    let records = import_csv(Path::new(path))?;
    let added = session.extend(records);
    println!("Imported {} transactions from {}", added, path);
    Ok(added)
}
