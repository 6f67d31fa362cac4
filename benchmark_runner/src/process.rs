//!
//! External process invocation.
//!

use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

use crate::diagnostics;

///
/// Locates `program`. Bare names are searched in `${PATH}`, paths are taken as is.
///
pub fn locate(program: &OsStr) -> anyhow::Result<PathBuf> {
    let path = Path::new(program);
    if path.components().count() > 1 {
        return Ok(path.to_path_buf());
    }
    which::which(program).map_err(|error| {
        anyhow::anyhow!(
            "The `{}` executable not found in ${{PATH}}: {error}",
            program.to_string_lossy()
        )
    })
}

///
/// Runs `program` in `working_directory`, inheriting the standard streams.
///
/// Fails if the process cannot be spawned or exits unsuccessfully.
///
pub fn run<I, S>(program: impl AsRef<OsStr>, arguments: I, working_directory: &Path) -> anyhow::Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let arguments: Vec<S> = arguments.into_iter().collect();
    let command_line = command_line(program, arguments.as_slice());
    diagnostics::status("Running", format!("`{command_line}` in {working_directory:?}"));

    let executable = locate(program)?;
    let status = std::process::Command::new(executable)
        .args(arguments.iter())
        .current_dir(working_directory)
        .status()
        .map_err(|error| anyhow::anyhow!("`{command_line}` subprocess spawning error: {error}"))?;
    if !status.success() {
        anyhow::bail!("`{command_line}` failed with {status}");
    }
    Ok(())
}

///
/// Runs `program` in `working_directory`, capturing its output.
///
/// The exit status is not checked, so that the caller can interpret failures.
///
pub fn capture<I, S>(
    program: impl AsRef<OsStr>,
    arguments: I,
    working_directory: &Path,
) -> anyhow::Result<std::process::Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let arguments: Vec<S> = arguments.into_iter().collect();
    let command_line = command_line(program, arguments.as_slice());

    let executable = locate(program)?;
    std::process::Command::new(executable)
        .args(arguments.iter())
        .current_dir(working_directory)
        .stdin(std::process::Stdio::null())
        .output()
        .map_err(|error| anyhow::anyhow!("`{command_line}` subprocess spawning error: {error}"))
}

///
/// Formats a command line for diagnostics.
///
fn command_line<S: AsRef<OsStr>>(program: &OsStr, arguments: &[S]) -> String {
    std::iter::once(program)
        .chain(arguments.iter().map(AsRef::as_ref))
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use std::ffi::OsStr;
    use std::path::PathBuf;

    use super::command_line;
    use super::locate;

    #[test]
    fn paths_are_not_searched() {
        assert_eq!(
            locate(OsStr::new("./conan/conan_install.py")).expect("Path"),
            PathBuf::from("./conan/conan_install.py")
        );
    }

    #[test]
    fn missing_executable() {
        let error = locate(OsStr::new("definitely-not-an-executable-4b1d")).expect_err("Must fail");
        assert!(error.to_string().contains("definitely-not-an-executable-4b1d"));
    }

    #[test]
    fn formats_command_line() {
        assert_eq!(
            command_line(OsStr::new("cmake"), &["--build", "--preset", "benchmark"]),
            "cmake --build --preset benchmark"
        );
    }
}
