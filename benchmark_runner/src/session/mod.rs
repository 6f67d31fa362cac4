//!
//! The comparison session.
//!

pub mod report;

use std::path::Path;

use crate::aggregator::ResultSet;
use crate::comparison::Comparison;
use crate::config::Config;
use crate::diagnostics;
use crate::model::table::MeasurementTable;
use crate::output::metadata::Metadata;
use crate::runner::BuildRunner;
use crate::time_key::TimeKey;
use crate::util::timer::Timer;
use crate::workspace::store::Store;
use crate::workspace::vcs::VersionControl;
use crate::workspace::RevisionWorkspace;
use crate::workspace::Workspace;

use self::report::Report;

///
/// The comparison session.
///
/// Ties result loading and comparison together, either for two result locations
/// or for two revisions built and run in their own workspaces.
///
#[derive(Debug, Clone)]
pub struct Session {
    /// The runner configuration.
    pub config: Config,
    /// The measurement field to compare.
    pub time_key: TimeKey,
}

impl Session {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, time_key: TimeKey) -> Self {
        Self { config, time_key }
    }

    ///
    /// Builds and runs the benchmarks of the primary working copy, without comparing.
    ///
    pub fn run_current<V, R>(&self, vcs: &V, runner: &R) -> anyhow::Result<()>
    where
        V: VersionControl,
        R: BuildRunner,
    {
        runner.execute(vcs.repository_root())
    }

    ///
    /// Compares two result files or directories.
    ///
    pub fn compare_paths(&self, baseline: &Path, current: &Path) -> anyhow::Result<Report> {
        let mut timer = Timer::started();
        let result_set = self.result_set();
        let baseline_table = result_set
            .load(baseline)
            .map_err(|error| anyhow::anyhow!("Baseline {baseline:?} loading: {error}"))?;
        let current_table = result_set
            .load(current)
            .map_err(|error| anyhow::anyhow!("Current {current:?} loading: {error}"))?;
        self.report(
            &baseline_table,
            &current_table,
            baseline.to_string_lossy().into_owned(),
            current.to_string_lossy().into_owned(),
            &mut timer,
        )
    }

    ///
    /// Builds and runs the benchmarks of two revisions and compares their results.
    ///
    /// Without `parallel`, the baseline is processed completely before the current revision.
    /// With `parallel`, both workspaces are prepared first, then the two build and run steps overlap.
    /// The first failure aborts the session either way.
    ///
    pub fn compare_revisions<V, S, R>(
        &self,
        workspaces: &RevisionWorkspace<V, S>,
        runner: &R,
        baseline: &str,
        current: &str,
        parallel: bool,
    ) -> anyhow::Result<Report>
    where
        V: VersionControl,
        S: Store,
        R: BuildRunner,
    {
        let mut timer = Timer::started();
        let (baseline_workspace, current_workspace, baseline_table, current_table) = if parallel {
            let baseline_workspace = workspaces.prepare(baseline)?;
            let current_workspace = workspaces.prepare(current)?;
            let (baseline_table, current_table) = rayon::join(
                || self.run_and_load(runner, &baseline_workspace, baseline),
                || self.run_and_load(runner, &current_workspace, current),
            );
            (
                baseline_workspace,
                current_workspace,
                baseline_table?,
                current_table?,
            )
        } else {
            let baseline_workspace = workspaces.prepare(baseline)?;
            let baseline_table = self.run_and_load(runner, &baseline_workspace, baseline)?;
            let current_workspace = workspaces.prepare(current)?;
            let current_table = self.run_and_load(runner, &current_workspace, current)?;
            (
                baseline_workspace,
                current_workspace,
                baseline_table,
                current_table,
            )
        };
        self.report(
            &baseline_table,
            &current_table,
            format!("{baseline} ({})", baseline_workspace.key),
            format!("{current} ({})", current_workspace.key),
            &mut timer,
        )
    }

    ///
    /// Builds and runs the benchmarks in `workspace` and loads their results.
    ///
    fn run_and_load<R>(
        &self,
        runner: &R,
        workspace: &Workspace,
        revision: &str,
    ) -> anyhow::Result<MeasurementTable>
    where
        R: BuildRunner,
    {
        let timer = Timer::started();
        runner
            .execute(workspace.path.as_path())
            .map_err(|error| anyhow::anyhow!("Revision `{revision}` build and run: {error}"))?;
        diagnostics::status(
            "Finished",
            format!("`{revision}` benchmarks in {}", timer.elapsed_seconds()?),
        );

        let results = self.config.results_directory(workspace.path.as_path());
        self.result_set()
            .load(results.as_path())
            .map_err(|error| anyhow::anyhow!("Revision `{revision}` results loading: {error}"))
    }

    ///
    /// Compares the tables and wraps the comparison into a report.
    ///
    fn report(
        &self,
        baseline: &MeasurementTable,
        current: &MeasurementTable,
        baseline_label: String,
        current_label: String,
        timer: &mut Timer,
    ) -> anyhow::Result<Report> {
        let comparison = Comparison::new(baseline, current)?;
        timer.stop()?;
        let start = timer
            .get_start()
            .ok_or_else(|| anyhow::anyhow!("Session timer has not been started"))?;
        let end = timer
            .get_end()
            .ok_or_else(|| anyhow::anyhow!("Session timer has not been stopped"))?;
        Ok(Report {
            comparison,
            metadata: Metadata {
                time_key: self.time_key,
                baseline: baseline_label,
                current: current_label,
                start,
                end,
            },
        })
    }

    ///
    /// Returns the result loader configured for this session.
    ///
    fn result_set(&self) -> ResultSet {
        ResultSet::new(self.time_key, self.config.results_suffix.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::Path;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use crate::comparison::ratio::Ratio;
    use crate::config::Config;
    use crate::runner::BuildRunner;
    use crate::time_key::TimeKey;
    use crate::workspace::store::directory::DirectoryStore;
    use crate::workspace::tests::FakeVcs;
    use crate::workspace::RevisionWorkspace;

    use super::Session;

    ///
    /// Writes a result file with a single benchmark, timed by the revision marker.
    ///
    struct FakeRunner {
        timings: BTreeMap<String, f64>,
        calls: AtomicUsize,
    }

    impl FakeRunner {
        fn new(timings: &[(&str, f64)]) -> Self {
            Self {
                timings: timings
                    .iter()
                    .map(|(key, value)| ((*key).to_owned(), *value))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl BuildRunner for FakeRunner {
        fn execute(&self, working_root: &Path) -> anyhow::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let revision = std::fs::read_to_string(working_root.join("REVISION"))?;
            let Some(value) = self.timings.get(revision.as_str()) else {
                anyhow::bail!("Benchmarks of `{revision}` crashed");
            };
            let results = working_root.join("build/benchmark/core");
            std::fs::create_dir_all(results.as_path())?;
            let document = serde_json::json!({
                "benchmarks": [{ "name": "BM_Parse", "real_time": value, "cpu_time": value / 2.0 }]
            });
            std::fs::write(results.join("parse_bench.json"), document.to_string())?;
            Ok(())
        }
    }

    fn session(time_key: TimeKey) -> Session {
        Session::new(Config::default(), time_key)
    }

    #[test]
    fn compares_paths() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let baseline = directory.path().join("base.json");
        let current = directory.path().join("curr");
        std::fs::create_dir_all(current.as_path()).expect("Writable");
        std::fs::write(
            baseline.as_path(),
            r#"{"benchmark": [{"name": "a", "real_time": 100}, {"name": "b", "real_time": 50}]}"#,
        )
        .expect("Writable");
        std::fs::write(
            current.join("x_bench.json"),
            r#"{"benchmarks": [{"name": "a", "real_time": 50}, {"name": "c", "real_time": 1}]}"#,
        )
        .expect("Writable");

        let report = session(TimeKey::RealTime)
            .compare_paths(baseline.as_path(), current.as_path())
            .expect("Comparison");
        assert_eq!(report.comparison.rows.len(), 1);
        assert_eq!(report.comparison.rows[0].name, "a");
        assert_eq!(report.comparison.rows[0].speedup, Ratio::Finite(2.0));
        assert!(report.metadata.start <= report.metadata.end);

        let mut table = Vec::new();
        report.write_table(&mut table, false).expect("Writable");
        assert!(String::from_utf8(table).expect("UTF-8").contains("Average"));
    }

    #[test]
    fn disjoint_paths_fail() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let baseline = directory.path().join("base.json");
        let current = directory.path().join("curr.json");
        std::fs::write(baseline.as_path(), r#"{"benchmarks": [{"name": "a", "real_time": 1}]}"#)
            .expect("Writable");
        std::fs::write(current.as_path(), r#"{"benchmarks": [{"name": "b", "real_time": 1}]}"#)
            .expect("Writable");

        assert!(session(TimeKey::RealTime)
            .compare_paths(baseline.as_path(), current.as_path())
            .is_err());
    }

    #[test]
    fn compares_revisions_sequentially_and_in_parallel() {
        for parallel in [false, true] {
            let directory = tempfile::tempdir().expect("Temporary directory");
            let vcs = FakeVcs::new(
                directory.path().to_path_buf(),
                &[("main", "aaaaaaa"), ("feature", "bbbbbbb")],
            );
            let workspaces = RevisionWorkspace::new(
                &vcs,
                DirectoryStore::new(directory.path().join("worktrees")),
            );
            let runner = FakeRunner::new(&[("aaaaaaa", 300.0), ("bbbbbbb", 100.0)]);

            let report = session(TimeKey::CpuTime)
                .compare_revisions(&workspaces, &runner, "main", "feature", parallel)
                .expect("Comparison");

            assert_eq!(runner.calls.load(Ordering::SeqCst), 2);
            assert_eq!(vcs.materialize_count(), 2);
            let row = &report.comparison.rows[0];
            assert_eq!(row.baseline, 150.0);
            assert_eq!(row.current, 50.0);
            assert_eq!(row.speedup, Ratio::Finite(3.0));
            assert_eq!(report.metadata.baseline, "main (aaaaaaa)");
            assert_eq!(report.metadata.current, "feature (bbbbbbb)");
        }
    }

    #[test]
    fn repeated_comparison_reuses_workspaces() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let vcs = FakeVcs::new(
            directory.path().to_path_buf(),
            &[("main", "aaaaaaa"), ("feature", "bbbbbbb")],
        );
        let workspaces =
            RevisionWorkspace::new(&vcs, DirectoryStore::new(directory.path().join("worktrees")));
        let runner = FakeRunner::new(&[("aaaaaaa", 2.0), ("bbbbbbb", 1.0)]);
        let session = session(TimeKey::RealTime);

        session
            .compare_revisions(&workspaces, &runner, "main", "feature", false)
            .expect("Comparison");
        session
            .compare_revisions(&workspaces, &runner, "main", "feature", false)
            .expect("Comparison");

        assert_eq!(vcs.materialize_count(), 2);
        assert_eq!(runner.calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn build_failure_aborts_the_session() {
        for parallel in [false, true] {
            let directory = tempfile::tempdir().expect("Temporary directory");
            let vcs = FakeVcs::new(
                directory.path().to_path_buf(),
                &[("main", "aaaaaaa"), ("broken", "ccccccc")],
            );
            let workspaces = RevisionWorkspace::new(
                &vcs,
                DirectoryStore::new(directory.path().join("worktrees")),
            );
            let runner = FakeRunner::new(&[("aaaaaaa", 1.0)]);

            let error = session(TimeKey::RealTime)
                .compare_revisions(&workspaces, &runner, "main", "broken", parallel)
                .expect_err("Must fail");
            assert!(error.to_string().contains("broken"));
        }
    }

    #[test]
    fn unknown_revision_aborts_before_building() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        let vcs = FakeVcs::new(directory.path().to_path_buf(), &[("main", "aaaaaaa")]);
        let workspaces =
            RevisionWorkspace::new(&vcs, DirectoryStore::new(directory.path().join("worktrees")));
        let runner = FakeRunner::new(&[("aaaaaaa", 1.0)]);

        assert!(session(TimeKey::RealTime)
            .compare_revisions(&workspaces, &runner, "nope", "main", false)
            .is_err());
        assert_eq!(runner.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn runs_current_tree() {
        let directory = tempfile::tempdir().expect("Temporary directory");
        std::fs::write(directory.path().join("REVISION"), "aaaaaaa").expect("Writable");
        let vcs = FakeVcs::new(directory.path().to_path_buf(), &[]);
        let runner = FakeRunner::new(&[("aaaaaaa", 1.0)]);

        session(TimeKey::RealTime)
            .run_current(&vcs, &runner)
            .expect("Run");
        assert!(directory
            .path()
            .join("build/benchmark/core/parse_bench.json")
            .is_file());
    }
}
