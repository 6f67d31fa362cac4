//!
//! The benchmark runner arguments.
//!

use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;

///
/// The benchmark runner arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the status and warning output. The comparison table is always printed.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The configuration file.
    /// Defaults to `./configs/benchmark-runner.json` if it exists, and to built-in values otherwise.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// The operation to perform.
    #[command(subcommand)]
    pub command: Command,
}

///
/// The benchmark runner operations.
///
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Builds and runs the benchmarks of the current working tree.
    Run,

    /// Compares two result files or directories.
    CompareJson {
        /// The baseline result file or directory.
        #[arg(long)]
        baseline: PathBuf,

        /// The current result file or directory.
        #[arg(long)]
        current: PathBuf,

        /// The measurement field to compare: `real_time` (default) or `cpu_time`.
        #[arg(long, default_value_t = benchmark_runner::TimeKey::RealTime)]
        time_key: benchmark_runner::TimeKey,

        #[command(flatten)]
        output: OutputArguments,
    },

    /// Builds and runs the benchmarks of two revisions in their own workspaces and compares them.
    CompareCommits {
        /// The baseline revision: a commit, a tag, or a branch.
        baseline: String,

        /// The current revision: a commit, a tag, or a branch.
        current: String,

        /// The measurement field to compare: `real_time` (default) or `cpu_time`.
        #[arg(long, default_value_t = benchmark_runner::TimeKey::RealTime)]
        time_key: benchmark_runner::TimeKey,

        /// Builds and runs the two revisions concurrently.
        #[arg(long)]
        parallel: bool,

        #[command(flatten)]
        output: OutputArguments,
    },
}

///
/// The report export arguments.
///
#[derive(Debug, Args)]
pub struct OutputArguments {
    /// Additionally writes the report to this file.
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// The report file format: `json` or `xlsx`.
    /// Inferred from the output path extension if omitted, falling back to `json`.
    #[arg(long)]
    pub output_format: Option<benchmark_runner::OutputFormat>,
}
