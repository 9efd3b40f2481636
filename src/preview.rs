//! Opens the rendered page with the platform's default handler.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::MdpError;

/// A platform's "open with the default application" command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Launcher {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

/// Launch commands keyed by `std::env::consts::OS` identifiers. Anything
/// outside this table is an unsupported platform.
const LAUNCHERS: &[(&str, Launcher)] = &[
    (
        "linux",
        Launcher {
            program: "xdg-open",
            args: &[],
        },
    ),
    (
        "macos",
        Launcher {
            program: "open",
            args: &[],
        },
    ),
    (
        "windows",
        Launcher {
            program: "cmd.exe",
            args: &["/c", "start"],
        },
    ),
];

/// Look up the launcher for a host OS identifier.
pub fn launcher_for(os: &str) -> Result<Launcher, MdpError> {
    LAUNCHERS
        .iter()
        .find(|(name, _)| *name == os)
        .map(|(_, launcher)| *launcher)
        .ok_or_else(|| MdpError::UnsupportedPlatform(os.to_string()))
}

/// Resolve `program` against the `PATH` search path.
fn find_executable(program: &str) -> Result<PathBuf, MdpError> {
    let search_path =
        env::var_os("PATH").ok_or_else(|| MdpError::ExecutableNotFound(program.to_string()))?;

    env::split_paths(&search_path)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| MdpError::ExecutableNotFound(program.to_string()))
}

/// Open `path` with the default handler for the OS identified by `os`.
///
/// Runs the launcher synchronously and waits for it to exit. A failure here
/// never deletes or alters the already-written output file.
pub fn open(os: &str, path: &Path) -> Result<(), MdpError> {
    let launcher = launcher_for(os)?;
    let program = find_executable(launcher.program)?;

    log::debug!("opening {} with {}", path.display(), program.display());

    let status = Command::new(&program)
        .args(launcher.args)
        .arg(path)
        .status()
        .map_err(|source| MdpError::PreviewLaunch {
            command: launcher.program.to_string(),
            source,
        })?;

    if !status.success() {
        return Err(MdpError::PreviewExit {
            command: launcher.program.to_string(),
            status,
        });
    }

    Ok(())
}
