/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use clap::Subcommand;

use super::GlobalArgs;

pub mod er;

#[derive(Subcommand, Debug)]
#[command(name = "gen")]
/// Generates random graphs as arc lists.
pub enum SubCommands {
    #[clap(name = "er")]
    ErdosRenyi(er::CliArgs),
}

pub fn main(global_args: GlobalArgs, subcommand: SubCommands) -> Result<()> {
    match subcommand {
        SubCommands::ErdosRenyi(args) => er::main(global_args, args),
    }
}
