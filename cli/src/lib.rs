/*
 * SPDX-FileCopyrightText: 2026 The pgraph contributors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface for the `pgraph` analytics kernel.
//!
//! The `pgraph` binary reads a graph as a list of arcs, runs
//! [PageRank](pagerank) or [triangle counting](triangles) on a given number
//! of threads, and prints a per-thread report on standard output. Random
//! inputs can be synthesized with the [`gen`](generate) subcommands.
//!
//! Logging goes to standard error through [`env_logger`]; set the `RUST_LOG`
//! environment variable to change the default `info` level.

#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

use anyhow::{Context, Result, anyhow, bail, ensure};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pgraph::prelude::*;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Duration;
use std::time::SystemTime;

pub mod generate;
pub mod pagerank;
pub mod triangles;

#[derive(Args, Debug)]
/// Shared CLI arguments for reading files containing arcs.
pub struct ArcsArgs {
    #[arg(long, default_value_t = '#')]
    /// Ignore lines that start with this symbol.
    pub line_comment_symbol: char,

    #[arg(long, default_value_t = 0)]
    /// How many lines to skip, ignoring comment lines.
    pub lines_to_skip: usize,

    #[arg(long)]
    /// How many lines to parse, after skipping the first lines_to_skip and
    /// ignoring comment lines.
    pub max_arcs: Option<usize>,

    #[arg(long, default_value_t = '\t')]
    /// The column separator.
    pub separator: char,

    #[arg(long, default_value_t = 0)]
    /// The index of the column containing the source node of an arc.
    pub source_column: usize,

    #[arg(long, default_value_t = 1)]
    /// The index of the column containing the target node of an arc.
    pub target_column: usize,

    #[arg(long)]
    /// The number of nodes of the graph, if larger than one plus the largest
    /// node appearing in an arc.
    pub num_nodes: Option<usize>,
}

impl ArcsArgs {
    /// Returns a reader configured by these arguments.
    pub fn reader(&self) -> ArcListReader {
        ArcListReader {
            comment_symbol: self.line_comment_symbol,
            separator: self.separator,
            source_column: self.source_column,
            target_column: self.target_column,
            lines_to_skip: self.lines_to_skip,
            max_arcs: self.max_arcs,
        }
    }

    /// Loads a graph from the arc list at `path`, or from standard input if
    /// `path` is `-`.
    ///
    /// Arcs are sorted using the current Rayon thread pool.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<BidiCsrGraph> {
        let path = path.as_ref();
        let reader = self.reader();
        let graph = if path.as_os_str() == "-" {
            log::info!("Reading arcs from standard input");
            reader
                .read_graph(std::io::stdin().lock(), self.num_nodes)
                .context("Could not read arcs from standard input")?
        } else {
            log::info!("Reading arcs from {}", path.display());
            let file = std::fs::File::open(path)
                .with_context(|| format!("Could not open {}", path.display()))?;
            reader
                .read_graph(BufReader::new(file), self.num_nodes)
                .with_context(|| format!("Could not read arcs from {}", path.display()))?
        };
        debug_assert!(neighbors_sorted(&graph));
        log::info!(
            "Loaded a graph with {} nodes and {} arcs",
            graph.num_nodes(),
            graph.num_arcs()
        );
        Ok(graph)
    }
}

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(...,  value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(
        short = 'j',
        long,
        default_value_t = num_cpus::get().max(1),
        value_parser = num_threads_parser
    )]
    /// The number of worker threads to use.
    pub num_threads: usize,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
/// Formats for storing vectors of floats.
pub enum FloatVectorFormat {
    /// ASCII format, one float per line.
    Ascii,
    /// A JSON Array.
    Json,
}

impl FloatVectorFormat {
    /// Stores float values in the specified `path` using the format defined by
    /// `self`.
    ///
    /// `precision` will be used to truncate the float values to the specified
    /// number of decimal digits. If `None`, [zmij](https://crates.io/crates/zmij)
    /// formatting will be used.
    pub fn store<F>(
        &self,
        path: impl AsRef<Path>,
        values: &[F],
        precision: Option<usize>,
    ) -> Result<()>
    where
        F: core::fmt::Display + Copy + zmij::Float,
    {
        create_parent_dir(&path)?;
        let path_display = path.as_ref().display();
        let file = std::fs::File::create(&path)
            .with_context(|| format!("Could not create vector at {}", path_display))?;
        let mut file = BufWriter::new(file);
        let mut buf = zmij::Buffer::new();

        match self {
            FloatVectorFormat::Ascii => {
                log::info!("Storing in ASCII format at {}", path_display);
                for word in values.iter() {
                    match precision {
                        None => writeln!(file, "{}", buf.format(*word)),
                        Some(precision) => writeln!(file, "{word:.precision$}"),
                    }
                    .with_context(|| format!("Could not write vector to {}", path_display))?;
                }
            }
            FloatVectorFormat::Json => {
                log::info!("Storing in JSON format at {}", path_display);
                write!(file, "[")?;
                for (i, word) in values.iter().enumerate() {
                    if i != 0 {
                        write!(file, ", ")?;
                    }
                    match precision {
                        None => write!(file, "{}", buf.format(*word)),
                        Some(precision) => write!(file, "{word:.precision$}"),
                    }
                    .with_context(|| format!("Could not write vector to {}", path_display))?;
                }
                write!(file, "]")?;
            }
        }

        file.flush()
            .with_context(|| format!("Could not write vector to {}", path_display))?;
        Ok(())
    }
}

/// Creates a [`ThreadPool`](rayon::ThreadPool) with the given number of threads.
pub fn get_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to create thread pool")?;
    log::info!("Using {} threads", thread_pool.current_num_threads());
    Ok(thread_pool)
}

/// Creates all parent directories of the given file path.
pub fn create_parent_dir(file_path: impl AsRef<Path>) -> Result<()> {
    // ensure that the dst directory exists
    if let Some(parent_dir) = file_path.as_ref().parent() {
        std::fs::create_dir_all(parent_dir).with_context(|| {
            format!(
                "Failed to create the directory {:?}",
                parent_dir.to_string_lossy()
            )
        })?;
    }
    Ok(())
}

/// Parses a duration from a string.
/// For compatibility with Java, if no suffix is given, it is assumed to be in milliseconds.
/// You can use suffixes, the available ones are:
/// - `s` for seconds
/// - `m` for minutes
/// - `h` for hours
/// - `d` for days
///
/// Example: `1d2h3m4s567` this is parsed as: 1 day, 2 hours, 3 minutes, 4
/// seconds, and 567 milliseconds.
fn parse_duration(value: &str) -> Result<Duration> {
    if value.is_empty() {
        bail!("Empty duration string, if you want every 0 milliseconds use `0`.");
    }
    let mut duration = Duration::from_secs(0);
    let mut acc = String::new();
    for c in value.chars() {
        if c.is_ascii_digit() {
            acc.push(c);
        } else if c.is_whitespace() {
            continue;
        } else {
            let dur = acc.parse::<u64>()?;
            match c {
                's' => duration += Duration::from_secs(dur),
                'm' => duration += Duration::from_secs(dur * 60),
                'h' => duration += Duration::from_secs(dur * 60 * 60),
                'd' => duration += Duration::from_secs(dur * 60 * 60 * 24),
                _ => return Err(anyhow!("Invalid duration suffix: {}", c)),
            }
            acc.clear();
        }
    }
    if !acc.is_empty() {
        let dur = acc.parse::<u64>()?;
        duration += Duration::from_millis(dur);
    }
    Ok(duration)
}

/// Initializes the `env_logger` logger with a custom format including
/// timestamps with elapsed time since initialization.
pub fn init_env_logger() -> Result<()> {
    use jiff::SpanRound;
    use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span_round = SpanRound::new()
        .largest(jiff::Unit::Day)
        .smallest(jiff::Unit::Millisecond)
        .days_are_24_hours();

    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = start.elapsed();
        let span = jiff::Span::new()
            .seconds(elapsed.as_secs() as i64)
            .milliseconds(elapsed.subsec_millis() as i64);
        let span = span.round(span_round).map_err(std::io::Error::other)?;

        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            printer.span_to_string(&span),
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

#[derive(Args, Debug)]
pub struct GlobalArgs {
    #[arg(long, value_parser = parse_duration, global=true, display_order = 1000)]
    /// How often to log progress. Default is 10s. You can use the suffixes "s"
    /// for seconds, "m" for minutes, "h" for hours, and "d" for days. If no
    /// suffix is provided it is assumed to be in milliseconds.
    /// Example: "1d2h3m4s567" is parsed as 1 day + 2 hours + 3 minutes + 4
    /// seconds + 567 milliseconds = 93784567 milliseconds.
    pub log_interval: Option<Duration>,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    #[clap(name = "pagerank", visible_alias = "pr")]
    PageRank(pagerank::CliArgs),
    #[clap(name = "triangles", visible_alias = "tc")]
    Triangles(triangles::CliArgs),
    #[command(subcommand)]
    Gen(generate::SubCommands),
}

#[derive(Parser, Debug)]
#[command(name = "pgraph", version)]
/// Parallel PageRank and triangle counting on static graphs.
///
/// Noteworthy environment variables:
///
/// - RUST_MIN_STACK: minimum thread stack size (in bytes)
///
/// - RUST_LOG: configuration for env_logger
///   <https://docs.rs/env_logger/latest/env_logger/>
pub struct Cli {
    #[command(subcommand)]
    pub command: SubCommands,
    #[clap(flatten)]
    pub args: GlobalArgs,
}

/// The entry point of the command-line interface.
pub fn cli_main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();
    let cli = Cli::parse_from(args);
    match cli.command {
        SubCommands::PageRank(args) => {
            pagerank::main(cli.args, args)?;
        }
        SubCommands::Triangles(args) => {
            triangles::main(cli.args, args)?;
        }
        SubCommands::Gen(args) => {
            generate::main(cli.args, args)?;
        }
    }

    log::info!(
        "The command took {}",
        pretty_print_elapsed(start.elapsed().as_secs_f64())
    );

    Ok(())
}

/// Pretty-prints seconds in a human-readable format.
fn pretty_print_elapsed(elapsed: f64) -> String {
    let mut result = String::new();
    let mut elapsed_seconds = elapsed as u64;
    let weeks = elapsed_seconds / (60 * 60 * 24 * 7);
    elapsed_seconds %= 60 * 60 * 24 * 7;
    let days = elapsed_seconds / (60 * 60 * 24);
    elapsed_seconds %= 60 * 60 * 24;
    let hours = elapsed_seconds / (60 * 60);
    elapsed_seconds %= 60 * 60;
    let minutes = elapsed_seconds / 60;

    match weeks {
        0 => {}
        1 => result.push_str("1 week "),
        _ => result.push_str(&format!("{} weeks ", weeks)),
    }
    match days {
        0 => {}
        1 => result.push_str("1 day "),
        _ => result.push_str(&format!("{} days ", days)),
    }
    match hours {
        0 => {}
        1 => result.push_str("1 hour "),
        _ => result.push_str(&format!("{} hours ", hours)),
    }
    match minutes {
        0 => {}
        1 => result.push_str("1 minute "),
        _ => result.push_str(&format!("{} minutes ", minutes)),
    }

    result.push_str(&format!("{:.3} seconds ({}s)", elapsed % 60.0, elapsed));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration() -> Result<()> {
        assert_eq!(parse_duration("1500")?, Duration::from_millis(1500));
        assert_eq!(parse_duration("10s")?, Duration::from_secs(10));
        assert_eq!(
            parse_duration("1d2h3m4s567")?,
            Duration::from_millis(93_784_567)
        );
        assert_eq!(parse_duration("2m 30s")?, Duration::from_secs(150));
        assert!(parse_duration("").is_err());
        assert!(parse_duration("3w").is_err());
        Ok(())
    }

    #[test]
    fn test_num_threads_parser() {
        assert_eq!(num_threads_parser("8").ok(), Some(8));
        assert!(num_threads_parser("0").is_err());
        assert!(num_threads_parser("-1").is_err());
    }

    #[test]
    fn test_pretty_print_elapsed() {
        assert_eq!(pretty_print_elapsed(1.5), "1.500 seconds (1.5s)");
        assert_eq!(
            pretty_print_elapsed(3725.0),
            "1 hour 2 minutes 5.000 seconds (3725s)"
        );
    }

    mod float_vector_format {
        use super::*;

        #[test]
        fn test_ascii_f32() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let path = dir.path().join("ranks.txt");
            let values: Vec<f32> = vec![1.5, 0.15, 3.0];
            FloatVectorFormat::Ascii.store(&path, &values, None)?;
            let content = std::fs::read_to_string(&path)?;
            assert_eq!(content.lines().count(), 3);
            for (line, expected) in content.lines().zip(&values) {
                let parsed: f32 = line.trim().parse()?;
                assert_eq!(parsed, *expected);
            }
            Ok(())
        }

        #[test]
        fn test_ascii_with_precision() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let path = dir.path().join("ranks.txt");
            let values: Vec<f64> = vec![1.123456789, 2.987654321];
            FloatVectorFormat::Ascii.store(&path, &values, Some(3))?;
            let content = std::fs::read_to_string(&path)?;
            assert_eq!(content, "1.123\n2.988\n");
            Ok(())
        }

        #[test]
        fn test_json() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let path = dir.path().join("ranks.json");
            let values: Vec<f64> = vec![1.5, 2.75, 3.0];
            FloatVectorFormat::Json.store(&path, &values, None)?;
            let parsed: Vec<f64> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
            assert_eq!(parsed, values);

            FloatVectorFormat::Json.store(&path, &values, Some(1))?;
            assert_eq!(std::fs::read_to_string(&path)?, "[1.5, 2.8, 3.0]");

            FloatVectorFormat::Json.store(&path, &[0.0_f64; 0], None)?;
            assert_eq!(std::fs::read_to_string(&path)?, "[]");
            Ok(())
        }

        #[test]
        fn test_creates_parent_dir() -> Result<()> {
            let dir = tempfile::tempdir()?;
            let path = dir.path().join("a").join("b").join("ranks.txt");
            FloatVectorFormat::Ascii.store(&path, &[1.0_f64], Some(1))?;
            assert_eq!(std::fs::read_to_string(&path)?, "1.0\n");
            Ok(())
        }
    }

    #[test]
    fn test_load_arcs() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("arcs.csv");
        std::fs::write(&path, "% header\n0,1\n1,2\n\n2,0\n")?;
        let args = ArcsArgs {
            line_comment_symbol: '%',
            lines_to_skip: 0,
            max_arcs: None,
            separator: ',',
            source_column: 0,
            target_column: 1,
            num_nodes: Some(5),
        };
        let graph = args.load(&path)?;
        assert_eq!(graph.num_nodes(), 5);
        assert_eq!(graph.num_arcs(), 3);
        assert_eq!(graph.successors(2), &[0]);

        assert!(args.load(dir.path().join("missing")).is_err());
        Ok(())
    }
}
