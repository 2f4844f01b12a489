pub mod cubes;
pub mod events;
pub mod export;
pub mod input;
pub mod layout;
pub mod model;

/// Installs the `env_logger` backend, configured through `RUST_LOG`.
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .try_init();
}
