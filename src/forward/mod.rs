//! Argument forwarding from CCEdit to SuperCC.
//!
//! The whole program is one straight line: read the caller's arguments,
//! build the java invocation, run it, and hand back the child's exit code.

use crate::config::ForwarderConfig;
use crate::error::Result;
use std::env;
use std::ffi::OsString;

pub mod args;
pub mod executor;
pub mod launch;

pub use args::ForwardedArgs;
pub use executor::LaunchExecutor;
pub use launch::LaunchPlan;

/// Main entry point for the forwarder binary.
///
/// `args` is the full argument vector, program name included. Configuration
/// is read from the working directory and environment only after the
/// arguments have been accepted, so a short argument vector never spawns
/// anything.
pub fn run<I, T>(args: I) -> Result<i32>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let forwarded = ForwardedArgs::from_args(args)?;

    let config = ForwarderConfig::load(&env::current_dir()?)?;
    run_with_config(&config, forwarded)
}

/// Launch SuperCC for already-extracted arguments and return its exit code.
pub fn run_with_config(config: &ForwarderConfig, forwarded: ForwardedArgs) -> Result<i32> {
    let plan = LaunchPlan::new(config, forwarded);
    LaunchExecutor::run(&plan)
}
