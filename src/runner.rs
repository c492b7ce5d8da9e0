use std::fmt::Display;

use crate::EvaluationResult;

/// Runs a fallible check and recovers every error into an [EvaluationResult], so a check always
/// ends with a well formed state and message.
pub struct Runner<E> {
    on_error: Option<Box<dyn FnOnce(E) -> EvaluationResult>>,
}

impl<E: Display> Runner<E> {
    pub fn new() -> Self {
        Self { on_error: None }
    }

    pub fn on_error(mut self, f: impl FnOnce(E) -> EvaluationResult + 'static) -> Self {
        self.on_error = Some(Box::new(f));
        self
    }

    /// Runs `f`. On error this uses the handler set via [Runner::on_error], or reports
    /// UNKNOWN with the error message if none was set.
    pub fn safe_run(self, f: impl FnOnce() -> Result<EvaluationResult, E>) -> EvaluationResult {
        match f() {
            Ok(result) => result,
            Err(err) => match self.on_error {
                Some(on_error) => on_error(err),
                None => EvaluationResult::unknown(err.to_string()),
            },
        }
    }
}

impl<E: Display> Default for Runner<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ServiceState;

    #[derive(Debug, thiserror::Error)]
    #[error("woops")]
    struct EmptyError;

    #[test]
    fn test_runner_ok() {
        let result = Runner::<EmptyError>::new()
            .on_error(|_| panic!("error handler called on success"))
            .safe_run(|| Ok(EvaluationResult::new(ServiceState::Warning, "hot")));

        assert_eq!(result, EvaluationResult::new(ServiceState::Warning, "hot"));
    }

    #[test]
    fn test_runner_error_default() {
        let result = Runner::<EmptyError>::new().safe_run(|| Err(EmptyError));

        assert_eq!(result.status(), ServiceState::Unknown);
        assert_eq!(result.message(), "woops");
    }

    #[test]
    fn test_runner_error_handler() {
        let result = Runner::<EmptyError>::new()
            .on_error(|_| EvaluationResult::ok())
            .safe_run(|| Err(EmptyError));

        assert_eq!(result, EvaluationResult::ok());
    }
}
