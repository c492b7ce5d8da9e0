use std::process;

use crate::{EvaluationResult, ServiceState};

/// Default label used in the report line.
pub const DEFAULT_NAME: &str = "check-value-from-metrics-plugin";

/// A named check result, ready to be handed to the monitoring agent.
///
/// ```rust
/// # use check_value_from_metrics::{EvaluationResult, Report, ServiceState};
/// let result = EvaluationResult::new(ServiceState::Critical, "120.000000 > 100.000000");
/// let report = Report::new("cpu", result);
/// assert_eq!(&report.to_nagios_string(), "cpu CRITICAL: 120.000000 > 100.000000");
/// assert_eq!(report.exit_code(), 2);
/// ```
pub struct Report {
    name: String,
    result: EvaluationResult,
}

impl Report {
    pub fn new(name: &str, result: EvaluationResult) -> Self {
        Report {
            name: name.to_owned(),
            result,
        }
    }

    pub fn state(&self) -> ServiceState {
        self.result.status()
    }

    /// Returns the single line the agent reads: the name, the state and, if there is one, the
    /// message.
    pub fn to_nagios_string(&self) -> String {
        let mut s = String::new();

        if !self.name.is_empty() {
            s.push_str(&format!("{} ", self.name));
        }

        s.push_str(&self.state().to_string());

        if !self.result.message().is_empty() {
            s.push_str(&format!(": {}", self.result.message()));
        }

        s
    }

    pub fn exit_code(&self) -> i32 {
        self.result.exit_code()
    }

    /// Prints Self::to_nagios_string and exits with the exit code from Self::exit_code.
    pub fn print_and_exit(&self) -> ! {
        println!("{}", self.to_nagios_string());
        process::exit(self.exit_code());
    }
}
