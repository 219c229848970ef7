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

use crate::error::ForwardError;

pub struct ErrorContext<'a> {
    pub error: &'a ForwardError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl<'a> ErrorContext<'a> {
    pub fn new(error: &'a ForwardError) -> Self {
        let (suggestion, details) = match error {
            ForwardError::Usage(_) => {
                let suggestion = Some(
                    "Invoke as: succ-forward -pr <datFile> <levelNumber> (the first argument is \
                     ignored)."
                        .to_string(),
                );
                (suggestion, None)
            }
            ForwardError::ConfigError(_) => {
                let suggestion = Some(
                    "Check succ-forward.toml in the working directory and any SUCC_FORWARD_* \
                     environment variables."
                        .to_string(),
                );
                (suggestion, None)
            }
            ForwardError::JavaNotFound { reason, .. } => {
                let suggestion = Some(
                    "Install a Java runtime and make sure 'java' is on PATH, or point \
                     SUCC_FORWARD_JAVA at the java executable."
                        .to_string(),
                );
                let details = Some(format!("Lookup failed: {reason}"));
                (suggestion, details)
            }
            ForwardError::Spawn { source, .. }
                if source.kind() == std::io::ErrorKind::PermissionDenied =>
            {
                let suggestion = if cfg!(unix) {
                    Some("Ensure the java executable has execute permission.".to_string())
                } else {
                    Some("Ensure the java executable can be run by the current user.".to_string())
                };
                (suggestion, None)
            }
            _ => (None, None),
        };

        Self {
            error,
            suggestion,
            details,
        }
    }
}
