// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod aggregate;
pub mod categories;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod range;
pub mod session;
pub mod shell;
pub mod store;
pub mod utils;
