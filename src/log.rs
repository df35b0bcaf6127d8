use env_logger::Env;

pub const LOG_ENV: &str = "RING_LOG";
const DEFAULT_FILTER: &str = "warn,consistent_ring=info";

/// Logger for the demo binary. `RING_LOG` takes a `RUST_LOG`-style filter.
pub fn init_logger() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, DEFAULT_FILTER))
        .format_timestamp_millis()
        .init();
}

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_module("consistent_ring", ::log::LevelFilter::Debug)
        .try_init();
}
