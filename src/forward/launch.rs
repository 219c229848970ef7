//! Builds the SuperCC invocation from the forwarded arguments.

use crate::config::{ForwarderConfig, LevelArgument};
use crate::forward::args::ForwardedArgs;
use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

const LEVEL_FLAG: &str = "-l";

/// A fully resolved child invocation: `<java> -jar <jar> <levelset> [-l] <level>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    program: OsString,
    jar: OsString,
    jar_args: Vec<OsString>,
}

impl LaunchPlan {
    pub fn new(config: &ForwarderConfig, forwarded: ForwardedArgs) -> Self {
        let ForwardedArgs { levelset, level } = forwarded;

        let jar_args = match config.level_argument {
            LevelArgument::Positional => vec![levelset, level],
            LevelArgument::Flag => vec![levelset, OsString::from(LEVEL_FLAG), level],
        };

        Self {
            program: OsString::from(&config.java),
            jar: OsString::from(&config.jar),
            jar_args,
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }

    pub fn jar(&self) -> &OsStr {
        &self.jar
    }

    /// Arguments passed to the java executable, in order.
    pub fn args(&self) -> Vec<&OsStr> {
        let mut args = Vec::with_capacity(self.jar_args.len() + 2);
        args.push(OsStr::new("-jar"));
        args.push(self.jar.as_os_str());
        args.extend(self.jar_args.iter().map(OsString::as_os_str));
        args
    }

    /// Human-readable form of the invocation, e.g. `java -jar "SuperCC.jar" level.dat 42`.
    ///
    /// Only the jar is quoted. This string is never handed to a shell.
    pub fn command_line(&self) -> String {
        let mut line = format!(
            "{} -jar \"{}\"",
            self.program.to_string_lossy(),
            self.jar.to_string_lossy()
        );
        for arg in &self.jar_args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }

    /// Build the process command for an already resolved java executable.
    /// The child inherits stdio, environment and working directory.
    pub fn to_command(&self, java: &Path) -> Command {
        let mut command = Command::new(java);
        command.args(self.args());
        command
    }
}
