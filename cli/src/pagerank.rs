/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{ArcsArgs, FloatVectorFormat, GlobalArgs, NumThreadsArg, get_thread_pool};
use anyhow::Result;
use clap::Parser;
use dsi_progress_logger::{ProgressLog, concurrent_progress_logger};
use pgraph::prelude::*;
use pgraph_algo::rank::{PageRank, Rank};
use pgraph_algo::utils::WorkerStats;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// The numeric representation of ranks.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Numeric {
    /// Single-precision floating point, damping factor 0.85.
    #[default]
    Float,
    /// Double-precision floating point, damping factor 0.85.
    Double,
    /// 64-bit fixed point with initial rank 100000.
    Fixed,
}

#[derive(Parser, Debug)]
#[command(
    name = "pagerank",
    about = "Compute PageRank with a fixed number of parallel push iterations.",
    long_about = None
)]
pub struct CliArgs {
    /// The file containing the arcs of the graph, or - for standard input.
    pub arcs: PathBuf,

    #[arg(short = 'n', long, default_value_t = PageRank::<BidiCsrGraph, f32>::DEFAULT_MAX_ITER)]
    /// The number of iterations.
    pub max_iter: usize,

    #[arg(long, value_enum, default_value_t = Numeric::Float)]
    /// The numeric representation of ranks.
    pub numeric: Numeric,

    #[arg(short, long)]
    /// Where to store the rank vector.
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FloatVectorFormat::Ascii)]
    /// The output format for the rank vector.
    pub fmt: FloatVectorFormat,

    #[arg(long)]
    /// Decimal digits for the rank vector.
    pub precision: Option<usize>,

    #[clap(flatten)]
    pub num_threads: NumThreadsArg,

    #[clap(flatten)]
    pub arcs_args: ArcsArgs,
}

pub fn main(global_args: GlobalArgs, args: CliArgs) -> Result<()> {
    let graph = get_thread_pool(args.num_threads.num_threads)?
        .install(|| args.arcs_args.load(&args.arcs))?;

    match args.numeric {
        Numeric::Float => {
            let rank = pagerank::<f32>(&global_args, &args, &graph)?;
            store(&args, &rank)
        }
        Numeric::Double => {
            let rank = pagerank::<f64>(&global_args, &args, &graph)?;
            store(&args, &rank)
        }
        Numeric::Fixed => {
            let rank = pagerank::<i64>(&global_args, &args, &graph)?;
            // Fixed-point ranks are far below 2^53, so the conversion is exact
            let rank = rank.iter().map(|&r| r.to_f64()).collect::<Vec<_>>();
            store(&args, &rank)
        }
    }
}

fn store<F: core::fmt::Display + Copy + zmij::Float>(args: &CliArgs, rank: &[F]) -> Result<()> {
    if let Some(output) = &args.output {
        args.fmt.store(output, rank, args.precision)?;
    }
    Ok(())
}

/// Runs PageRank with representation `R`, printing the report on standard
/// output, and returns the rank vector.
pub fn pagerank<R: Rank>(
    global_args: &GlobalArgs,
    args: &CliArgs,
    graph: &BidiCsrGraph,
) -> Result<Vec<R>> {
    let mut cpl = concurrent_progress_logger![];
    if let Some(log_interval) = global_args.log_interval {
        cpl.log_interval(log_interval);
    }

    let mut pr = PageRank::<_, R>::new(graph);
    pr.num_threads(args.num_threads.num_threads)
        .max_iter(args.max_iter);

    let start = Instant::now();
    pr.run_with_logging(&mut cpl);
    let elapsed = start.elapsed();

    report(
        &mut std::io::stdout().lock(),
        pr.workers(),
        pr.rank_sum(),
        elapsed,
    )?;

    Ok(pr.rank().to_vec())
}

/// Writes the report of a PageRank computation.
///
/// Workers are listed in thread order.
pub fn report<R: Rank>(
    out: &mut impl Write,
    workers: &[WorkerStats],
    rank_sum: R,
    elapsed: Duration,
) -> Result<()> {
    writeln!(out, "Using {}", R::NAME)?;
    writeln!(out, "Number of workers : {}", workers.len())?;
    writeln!(out, "thread_id, time_taken")?;
    for worker in workers {
        writeln!(out, "{}, {}", worker.id, worker.elapsed.as_secs_f64())?;
    }
    writeln!(out, "Sum of page rank : {}", rank_sum)?;
    writeln!(out, "Time taken (in seconds) : {}", elapsed.as_secs_f64())?;
    out.flush()?;
    Ok(())
}
