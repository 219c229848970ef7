/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "succ_forward=warn";

/// Initialize the logger.
///
/// Only warnings are shown by default so the forwarder stays silent on the
/// success path; set `RUST_LOG=succ_forward=debug` to see the launched command.
pub fn setup_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}
