/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{GlobalArgs, create_parent_dir};
use anyhow::{Context, Result, ensure};
use clap::Parser;
use dsi_progress_logger::{ProgressLog, progress_logger};
use pgraph::prelude::*;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "er",
    about = "Write the arcs of an Erdős–Rényi random graph, one per line, separated by a TAB.",
    long_about = None
)]
pub struct CliArgs {
    #[arg(short = 'n', long = "num-nodes")]
    /// The number of nodes.
    pub n: usize,

    #[arg(short = 'p', long = "probability")]
    /// The probability of each arc (must be in the interval [0 . . 1]).
    pub p: f64,

    #[arg(short, long, default_value_t = 0)]
    /// The seed of the pseudorandom number generator.
    pub seed: u64,

    #[arg(short, long)]
    /// Where to write the arcs (default: standard output).
    pub output: Option<PathBuf>,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.p),
        "The arc probability must be in [0 . . 1], got {}",
        args.p
    );

    let num_arcs = match &args.output {
        Some(path) => {
            create_parent_dir(path)?;
            let file = std::fs::File::create(path)
                .with_context(|| format!("Could not create {}", path.display()))?;
            write_arcs(&global_args, &args, BufWriter::new(file))
                .with_context(|| format!("Could not write arcs to {}", path.display()))?
        }
        None => write_arcs(&global_args, &args, BufWriter::new(std::io::stdout().lock()))?,
    };
    log::info!("Wrote {} arcs", num_arcs);
    Ok(())
}

/// Writes the arcs of the random graph described by `args` to `writer`,
/// returning the number of arcs.
pub fn write_arcs(global_args: &GlobalArgs, args: &CliArgs, mut writer: impl Write) -> Result<u64> {
    let mut pl = progress_logger![item_name = "arc"];
    if let Some(log_interval) = global_args.log_interval {
        pl.log_interval(log_interval);
    }

    let er = ErdosRenyi::new(args.n, args.p, args.seed);
    log::info!(
        "Generating an Erdős–Rényi graph with {} nodes, p = {}, seed = {}",
        args.n,
        args.p,
        args.seed
    );

    pl.start("Writing arcs...");
    let mut num_arcs = 0;
    for (u, v) in er.arcs() {
        writeln!(writer, "{}\t{}", u, v)?;
        num_arcs += 1;
        pl.light_update();
    }
    writer.flush()?;
    pl.done();
    Ok(num_arcs)
}
