use std::io::{self, BufRead};
use std::num::ParseFloatError;

use crate::config::{Config, Severity};
use crate::lookup::find_target;
use crate::runner::Runner;
use crate::{EvaluationResult, ServiceState};

#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    #[error("target value not found")]
    TargetValueNotFound,
    #[error("invalid value {value:?} for {key}: {source}")]
    Parse {
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("failed to read metrics: {0}")]
    Io(#[from] io::Error),
}

/// Evaluates a single [Config] against a stream of metric lines.
pub struct Evaluator<'a> {
    config: &'a Config,
}

impl<'a> Evaluator<'a> {
    pub fn new(config: &'a Config) -> Self {
        Evaluator { config }
    }

    /// Looks up the target, parses its value and compares it to the threshold. Every failure is
    /// returned as an error, including a missing target.
    pub fn check<R: BufRead>(&self, reader: R) -> Result<EvaluationResult, EvaluateError> {
        let record = find_target(reader, self.config.target())?
            .ok_or(EvaluateError::TargetValueNotFound)?;

        let value: f64 = record.value.parse().map_err(|source| {
            tracing::warn!(key = %record.key, value = %record.value, "target value is not a number");
            EvaluateError::Parse {
                key: record.key.clone(),
                value: record.value.clone(),
                source,
            }
        })?;

        let direction = self.config.direction();
        let threshold = self.config.threshold();
        if !direction.holds(value, threshold) {
            return Ok(EvaluationResult::ok());
        }

        let status = match self.config.severity() {
            Severity::Warning => ServiceState::Warning,
            Severity::Critical => ServiceState::Critical,
        };
        Ok(EvaluationResult::new(
            status,
            format!(
                "{} {direction} {}",
                format_float(value),
                format_float(threshold)
            ),
        ))
    }

    /// Like [Evaluator::check], but recovers errors into a result: a missing target is OK unless
    /// strict mode is on, anything else is UNKNOWN.
    pub fn evaluate<R: BufRead>(&self, reader: R) -> EvaluationResult {
        let strict = self.config.strict();

        Runner::<EvaluateError>::new()
            .on_error(move |err| match err {
                EvaluateError::TargetValueNotFound if !strict => {
                    tracing::debug!("target not found, ignoring");
                    EvaluationResult::ok()
                }
                err => EvaluationResult::unknown(err.to_string()),
            })
            .safe_run(|| self.check(reader))
    }
}

/// Six decimal places, with non-finite values spelled `+Inf`, `-Inf` and `NaN`.
fn format_float(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_owned()
    } else if v.is_infinite() {
        if v > 0.0 { "+Inf" } else { "-Inf" }.to_owned()
    } else {
        format!("{v:.6}")
    }
}
