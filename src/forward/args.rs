// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Caller argument handling.
//!
//! CCEdit invokes its external tool as `<tool> -pr <datFile> <levelNumber>`.
//! Only the level set path and level number are kept; the leading flag and
//! anything after the level number are dropped. Arguments are taken by
//! position alone: nothing is interpreted as an option, not even `--`.

use crate::error::{ForwardError, Result};
use std::ffi::OsString;

/// Number of caller arguments needed after the program name.
const EXPECTED_ARGS: usize = 3;

/// The two values passed through to SuperCC, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedArgs {
    pub levelset: OsString,
    pub level: OsString,
}

impl ForwardedArgs {
    /// Extract the forwarded values from a full argument vector, program name included.
    pub fn from_args<I, T>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let caller_args: Vec<OsString> = args
            .into_iter()
            .map(Into::<OsString>::into)
            .skip(1)
            .collect();

        match caller_args.as_slice() {
            [mode, levelset, level, ignored @ ..] => {
                log::debug!("Dropping caller flag {mode:?}");
                if !ignored.is_empty() {
                    log::debug!("Discarding {} extra argument(s)", ignored.len());
                }

                Ok(Self {
                    levelset: levelset.clone(),
                    level: level.clone(),
                })
            }
            short => Err(ForwardError::Usage(format!(
                "expected {EXPECTED_ARGS} arguments (<flag> <datFile> <levelNumber>), got {}",
                short.len()
            ))),
        }
    }
}
