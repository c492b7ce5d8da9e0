use std::fmt;

/// Which side of the threshold raises an alert.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    GreaterThan,
    LessThan,
}

impl Direction {
    /// Returns true if `value` is strictly beyond `threshold` in this direction.
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Direction::GreaterThan => value > threshold,
            Direction::LessThan => value < threshold,
        }
    }

    pub fn operator(&self) -> &'static str {
        match self {
            Direction::GreaterThan => ">",
            Direction::LessThan => "<",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.operator())
    }
}

/// The state reported when the condition holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Critical,
}

/// Unvalidated options as they come off the command line.
///
/// `critical` is `None` when the flag was not given at all, its effective value is then `true`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawOptions {
    pub target: String,
    pub strict: bool,
    pub gt: Option<f64>,
    pub lt: Option<f64>,
    pub warning: bool,
    pub critical: Option<bool>,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("-target is required")]
    MissingTarget,
    #[error("specify only one of either -gt or -lt")]
    AmbiguousDirection,
    #[error("-gt or -lt is required")]
    MissingDirection,
    #[error("specify only one of either -warning or -critical")]
    AmbiguousSeverity,
}

/// A validated check configuration. Built once at startup and never changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    target: String,
    strict: bool,
    direction: Direction,
    threshold: f64,
    severity: Severity,
}

impl Config {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn strict(&self) -> bool {
        self.strict
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}

impl TryFrom<RawOptions> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawOptions) -> Result<Self, Self::Error> {
        if raw.target.is_empty() {
            return Err(ConfigError::MissingTarget);
        }

        // NaN is how an absent threshold used to be spelled, keep treating it that way.
        let gt = raw.gt.filter(|v| !v.is_nan());
        let lt = raw.lt.filter(|v| !v.is_nan());

        let (direction, threshold) = match (gt, lt) {
            (Some(_), Some(_)) => return Err(ConfigError::AmbiguousDirection),
            (Some(gt), None) => (Direction::GreaterThan, gt),
            (None, Some(lt)) => (Direction::LessThan, lt),
            (None, None) => return Err(ConfigError::MissingDirection),
        };

        if raw.warning && raw.critical == Some(true) {
            return Err(ConfigError::AmbiguousSeverity);
        }

        let severity = if raw.warning {
            Severity::Warning
        } else {
            Severity::Critical
        };

        let config = Config {
            target: raw.target,
            strict: raw.strict,
            direction,
            threshold,
            severity,
        };
        tracing::debug!(?config, "configuration accepted");

        Ok(config)
    }
}
