//!
//! The benchmark runner binary.
//!

pub(crate) mod arguments;

use std::io::IsTerminal;
use std::path::Path;

use clap::Parser;

use benchmark_runner::VersionControl;

use self::arguments::Arguments;
use self::arguments::Command;
use self::arguments::OutputArguments;

///
/// The application entry point.
///
fn main() {
    let arguments = match Arguments::try_parse() {
        Ok(arguments) => arguments,
        Err(error) => error.exit(),
    };
    let exit_code = match main_inner(arguments) {
        Ok(()) => benchmark_runner::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            benchmark_runner::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    benchmark_runner::diagnostics::set_quiet(arguments.quiet);
    let config = match arguments.config {
        Some(path) => benchmark_runner::Config::try_from(path.as_path())?,
        None => {
            let path = Path::new(benchmark_runner::DEFAULT_CONFIG_PATH);
            if path.is_file() {
                benchmark_runner::Config::try_from(path)?
            } else {
                benchmark_runner::Config::default()
            }
        }
    };

    match arguments.command {
        Command::Run => {
            let vcs = benchmark_runner::Git::discover(std::env::current_dir()?.as_path())?;
            let runner = benchmark_runner::CMakeRunner::new(config.clone());
            benchmark_runner::ComparisonSession::new(config, benchmark_runner::TimeKey::default())
                .run_current(&vcs, &runner)
        }
        Command::CompareJson {
            baseline,
            current,
            time_key,
            output,
        } => {
            let report = benchmark_runner::ComparisonSession::new(config, time_key)
                .compare_paths(baseline.as_path(), current.as_path())?;
            emit(&report, output)
        }
        Command::CompareCommits {
            baseline,
            current,
            time_key,
            parallel,
            output,
        } => {
            let vcs = benchmark_runner::Git::discover(std::env::current_dir()?.as_path())?;
            let store =
                benchmark_runner::DirectoryStore::new(config.store_root(vcs.repository_root()));
            let workspaces = benchmark_runner::RevisionWorkspace::new(&vcs, store);
            let runner = benchmark_runner::CMakeRunner::new(config.clone());
            let report = benchmark_runner::ComparisonSession::new(config, time_key)
                .compare_revisions(
                    &workspaces,
                    &runner,
                    baseline.as_str(),
                    current.as_str(),
                    parallel,
                )?;
            emit(&report, output)
        }
    }
}

///
/// Prints the comparison table and writes the report file, if requested.
///
fn emit(
    report: &benchmark_runner::ComparisonReport,
    output: OutputArguments,
) -> anyhow::Result<()> {
    report.print(std::io::stdout().is_terminal())?;
    if let Some(path) = output.output_path {
        let format = output
            .output_format
            .or_else(|| benchmark_runner::OutputFormat::from_path(path.as_path()))
            .unwrap_or_default();
        report.export(path.as_path(), format)?;
        benchmark_runner::diagnostics::status("Written", format!("{format} report to {path:?}"));
    }
    Ok(())
}
