//!
//! The benchmark runner library.
//!

pub mod aggregator;
pub mod comparison;
pub mod config;
pub mod diagnostics;
pub mod input;
pub mod model;
pub mod output;
pub mod process;
pub mod runner;
pub mod session;
pub mod time_key;
pub mod util;
pub mod workspace;

pub use crate::aggregator::error::Error as AggregatorError;
pub use crate::aggregator::ResultSet;
pub use crate::comparison::error::Error as ComparisonError;
pub use crate::comparison::ratio::Ratio;
pub use crate::comparison::row::Row as ComparisonRow;
pub use crate::comparison::Comparison;
pub use crate::config::Config;
pub use crate::input::error::Error as InputError;
pub use crate::input::structural::Error as StructuralError;
pub use crate::input::Input;
pub use crate::model::table::MeasurementTable;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::table::Table as TableRenderer;
pub use crate::output::Output;
pub use crate::runner::cmake::CMakeRunner;
pub use crate::runner::BuildRunner;
pub use crate::session::report::Report as ComparisonReport;
pub use crate::session::Session as ComparisonSession;
pub use crate::time_key::TimeKey;
pub use crate::util::timer::Timer;
pub use crate::workspace::error::Error as WorkspaceError;
pub use crate::workspace::revision::RevisionKey;
pub use crate::workspace::state::State as WorkspaceState;
pub use crate::workspace::store::directory::DirectoryStore;
pub use crate::workspace::store::Store;
pub use crate::workspace::vcs::git::Git;
pub use crate::workspace::vcs::VersionControl;
pub use crate::workspace::RevisionWorkspace;
pub use crate::workspace::Workspace;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "./configs/benchmark-runner.json";
