/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{ArcsArgs, GlobalArgs, NumThreadsArg, get_thread_pool};
use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{ProgressLog, concurrent_progress_logger};
use pgraph_algo::triangles::{TriangleCount, WorkerCount};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(
    name = "triangles",
    about = "Count directed triangles by intersecting sorted neighbor lists in parallel.",
    long_about = None
)]
pub struct CliArgs {
    /// The file containing the arcs of the graph, or - for standard input.
    pub arcs: PathBuf,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,

    #[clap(flatten)]
    pub arcs_args: ArcsArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = get_thread_pool(args.num_threads.num_threads)?
        .install(|| args.arcs_args.load(&args.arcs))?;

    let mut cpl = concurrent_progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        cpl.log_interval(log_interval);
    }

    let mut tc = TriangleCount::new(&graph);
    tc.num_threads(args.num_threads.num_threads);

    let start = Instant::now();
    tc.run_with_logging(&mut cpl);
    let elapsed = start.elapsed();

    report(&mut std::io::stdout().lock(), tc.workers(), elapsed)
}

/// Writes the report of a triangle count.
///
/// Workers are listed in reverse thread order.
pub fn report(out: &mut impl Write, workers: &[WorkerCount], elapsed: Duration) -> Result<()> {
    let total: u64 = workers.iter().map(|w| w.count).sum();
    writeln!(out, "Number of workers : {}", workers.len())?;
    writeln!(out, "thread_id, triangle_count, time_taken")?;
    for worker in workers.iter().rev() {
        writeln!(
            out,
            "{}, {}, {}",
            worker.stats.id,
            worker.count,
            worker.stats.elapsed.as_secs_f64()
        )?;
    }
    writeln!(out, "Number of triangles : {}", total)?;
    writeln!(out, "Number of unique triangles : {}", total / 3)?;
    writeln!(out, "Time taken (in seconds) : {}", elapsed.as_secs_f64())?;
    out.flush()?;
    Ok(())
}
