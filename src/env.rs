//! Environment variable constants used throughout the application
//!
//! This module centralizes all environment variable names to ensure consistency.

/// Logging configuration
pub mod logging {
    /// Log level configuration (e.g., "debug", "info", "warn", "error")
    pub const LOG_LEVEL: &str = "DIALOGSET_LOG_LEVEL";

    /// Log file path for file-based logging
    pub const LOG_FILE: &str = "DIALOGSET_LOG_FILE";

    /// Disable colored output (follows the NO_COLOR standard)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Conversion behaviour overrides
pub mod convert {
    /// Default input file used when no path is given on the command line
    pub const INPUT: &str = "DIALOGSET_INPUT";

    /// Fail on the first malformed line ("1", "true", "yes")
    pub const STRICT: &str = "DIALOGSET_STRICT";

    /// Skip the "press Enter" acknowledgment at exit
    pub const NO_PAUSE: &str = "DIALOGSET_NO_PAUSE";
}
