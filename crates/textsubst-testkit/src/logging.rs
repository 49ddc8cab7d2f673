//! Test logging setup

/// Install `env_logger` in test mode
///
/// Safe to call from every test; only the first call installs the logger.
/// Output is captured by the test harness and filtered by `RUST_LOG`
/// (default: `debug` for the textsubst crates).
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("textsubst_core=debug,textsubst=debug"),
    )
    .is_test(true)
    .try_init();
    log::trace!("test logging initialised");
}
