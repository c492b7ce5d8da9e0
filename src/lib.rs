//! The check_value_from_metrics crate implements a monitoring check which reads metric lines from
//! stdin, picks out one metric by key and alerts when its value crosses a threshold.
//!
//! ```rust
//! # use check_value_from_metrics::{Config, Direction, Evaluator, RawOptions, ServiceState};
//! let config = Config::try_from(RawOptions {
//!     target: "cpu.load".to_owned(),
//!     gt: Some(100.0),
//!     ..RawOptions::default()
//! })
//! .unwrap();
//! assert_eq!(config.direction(), Direction::GreaterThan);
//!
//! let input = "cpu.load 120 1699999999\n";
//! let result = Evaluator::new(&config).evaluate(input.as_bytes());
//! assert_eq!(result.status(), ServiceState::Critical);
//! assert_eq!(result.message(), "120.000000 > 100.000000");
//! ```

use std::fmt;

pub mod cli;
pub mod config;
pub mod evaluator;
pub mod lookup;
pub mod report;
pub mod runner;

pub use crate::config::{Config, ConfigError, Direction, RawOptions, Severity};
pub use crate::evaluator::{EvaluateError, Evaluator};
pub use crate::lookup::MetricRecord;
pub use crate::report::Report;
pub use crate::runner::Runner;

/// Exit status for invalid command line input, distinct from every service state exit code.
pub const USAGE_EXIT_CODE: i32 = 64;

/// Represents a service state as understood by nagios compatible agents.
///
/// The states are independent outcomes, there is no ordering between them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    /// Returns the corresponding exit code to signal the service state of self.
    pub fn exit_code(&self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        };
        f.write_str(s)
    }
}

/// The outcome of one evaluation: a state and a message which may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationResult {
    status: ServiceState,
    message: String,
}

impl EvaluationResult {
    pub fn new(status: ServiceState, message: impl Into<String>) -> Self {
        EvaluationResult {
            status,
            message: message.into(),
        }
    }

    /// An OK result with an empty message.
    pub fn ok() -> Self {
        EvaluationResult::new(ServiceState::Ok, String::new())
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        EvaluationResult::new(ServiceState::Unknown, message)
    }

    pub fn status(&self) -> ServiceState {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn exit_code(&self) -> i32 {
        self.status.exit_code()
    }
}

impl Default for EvaluationResult {
    fn default() -> Self {
        EvaluationResult::ok()
    }
}
