mod classification;
mod fragments;
mod locking;
mod schema;

pub use classification::*;
pub use fragments::*;
pub use locking::*;
pub use schema::*;

use keel_core::Dictionary;
use log::LevelFilter;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}

/// Checks every dictionary must pass, whatever SQL its vendor needs.
pub fn execute_tests(dictionary: &dyn Dictionary) {
    log::debug!("Running the dictionary contract on {}", dictionary.platform());
    classification(dictionary);
    substring_folding(dictionary);
    index_of_start(dictionary);
    templates(dictionary);
    cross_join(dictionary);
    locking(dictionary);
    column_types(dictionary);
    identity(dictionary);
}

#[macro_export]
macro_rules! silent_logs {
    ($($code:tt)+) => {{
        let level = log::max_level();
        log::set_max_level(log::LevelFilter::Off);
        $($code)+
        log::set_max_level(level);
    }};
}
