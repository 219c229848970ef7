//! Process execution for the forwarder.
//!
//! The child is spawned directly, without a shell, and waited on. Standard
//! streams, environment and working directory are inherited, and the child's
//! exit status becomes the forwarder's own.

use crate::error::{ForwardError, Result};
use crate::forward::launch::LaunchPlan;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

/// Synchronous launcher for a [`LaunchPlan`].
pub struct LaunchExecutor;

impl LaunchExecutor {
    /// Run the plan to completion and return the exit code to propagate.
    pub fn run(plan: &LaunchPlan) -> Result<i32> {
        let program = Self::resolve_program(plan.program())?;
        Self::run_resolved(plan, &program)
    }

    /// Run the plan with `program` as the java executable, exactly as given.
    pub fn run_resolved(plan: &LaunchPlan, program: &Path) -> Result<i32> {
        log::debug!("Java executable: {program:?}");

        if !Path::new(plan.jar()).exists() {
            log::warn!(
                "{} not found in the working directory; launching anyway",
                plan.jar().to_string_lossy()
            );
        }

        log::debug!("Launching: {}", plan.command_line());

        let status = plan
            .to_command(program)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| ForwardError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

        log::debug!("Child exited with {status}");
        Ok(exit_code(status))
    }

    /// Locate the java executable on `PATH`, or check it directly when it is a path.
    pub fn resolve_program(program: &OsStr) -> Result<PathBuf> {
        Self::resolve_program_in(program, env::var_os("PATH"), env::current_dir()?)
    }

    /// Locate `program` in the given search path, relative paths against `cwd`.
    pub fn resolve_program_in(
        program: &OsStr,
        search_path: Option<OsString>,
        cwd: PathBuf,
    ) -> Result<PathBuf> {
        which::which_in(program, search_path, cwd).map_err(|e| ForwardError::JavaNotFound {
            program: program.to_string_lossy().into_owned(),
            reason: e.to_string(),
        })
    }
}

/// Map a child's exit status to the code the forwarder exits with.
///
/// A signal-terminated child on Unix yields `128 + signal`, as a shell would report it.
#[cfg(unix)]
pub fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(windows)]
pub fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
