//! VoltCase reference-card storage library
//!
//! This library provides the storage core of a note-card manager: an ordered
//! collection of reference cards with durable single-file persistence,
//! category and search queries, and JSON/text export with merge-on-import.

mod card;
mod category;
mod config;
mod errors;
mod export;
mod query;
mod sample;
mod store;
mod types;

// Re-export key components
pub use card::*;
pub use category::*;
pub use config::*;
pub use errors::*;
pub use export::*;
pub use query::*;
pub use sample::*;
pub use store::*;
pub use types::*;

use log::info;

/// Initializes the logger for binaries and examples embedding this library
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    info!("Logger initialized");
}
