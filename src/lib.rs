pub mod cli;
pub mod config;
pub mod models;
pub mod parsers;
pub mod services;

pub mod env;
pub mod error;
pub mod logging;

pub use error::{DialogSetError, Result};
pub use logging::{init_logging, LoggingConfig};
pub use services::{convert, convert_or_report};
