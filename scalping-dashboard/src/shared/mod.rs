/// Shared modules for the scalping dashboard
pub mod config;
pub mod error;
pub mod format;
pub mod source;
pub mod timer;
pub mod types;
