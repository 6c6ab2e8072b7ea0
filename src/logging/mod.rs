//! Logging utilities.
//!
//! Centralizes logger initialization. Library code only uses the `log`
//! facade; the binary picks the backend here.

mod init;

pub use init::{LoggingConfig, init_logging};
