//! Command-line host for translation table sessions.

pub mod config;
pub mod logging;
pub mod session;
pub mod summary;
