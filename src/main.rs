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

use std::env;
use std::io::IsTerminal;
use std::process;
use succ_forward::error::{format_error_with_color, get_exit_code};
use succ_forward::{forward, logging};

fn main() {
    // Respects RUST_LOG; warnings only by default
    logging::setup_logger();

    match forward::run(env::args_os()) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprint!(
                "{}",
                format_error_with_color(&e, std::io::stderr().is_terminal())
            );
            process::exit(get_exit_code(&e));
        }
    }
}
