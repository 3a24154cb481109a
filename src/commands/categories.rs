// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::categories::DEFAULT_CATEGORIES;
use crate::session::Session;
use crate::utils::{pretty_table, required};
use anyhow::Result;

pub fn handle(session: &mut Session, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = required(sub, "name")?;
            if session.add_category(name) {
                println!("New category added: '{}'", name.trim());
            } else {
                tracing::warn!("ignored blank category label");
                println!("Category name is empty, nothing added");
            }
        }
        Some(("list", _)) => {
            let data: Vec<Vec<String>> = session
                .categories()
                .all()
                .into_iter()
                .map(|c| {
                    let origin = if DEFAULT_CATEGORIES.contains(&c) {
                        "default"
                    } else {
                        "custom"
                    };
                    vec![c.to_string(), origin.to_string()]
                })
                .collect();
            println!("{}", pretty_table(&["Category", "Origin"], data));
        }
        _ => {}
    }
    Ok(())
}
