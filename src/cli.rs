use std::ffi::OsString;
use std::io;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

use crate::config::RawOptions;
use crate::report::DEFAULT_NAME;

/// Flags which consume the following argument as their value.
const VALUE_FLAGS: &[&str] = &["target", "gt", "lt", "name", "log-level"];

#[derive(Parser, Debug)]
#[command(
    name = "check-value-from-metrics",
    version,
    about = "Alert when a metric read from stdin crosses a threshold",
    args_override_self = true
)]
pub struct Cli {
    /// Metric key to look up
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub target: String,
    /// Report UNKNOWN instead of OK when the target metric is not found
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub strict: bool,
    /// Alert when the target value is greater than this
    #[arg(long, allow_hyphen_values = true)]
    pub gt: Option<f64>,
    /// Alert when the target value is less than this
    #[arg(long, allow_hyphen_values = true)]
    pub lt: Option<f64>,
    /// Report WARNING when the condition is met
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_value = "false",
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub warning: bool,
    /// Report CRITICAL when the condition is met [default: true]
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    pub critical: Option<bool>,
    /// Checker name for the report
    #[arg(long, default_value = DEFAULT_NAME, allow_hyphen_values = true)]
    pub name: String,
    /// Diagnostic log level, written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Cli {
    pub fn raw_options(&self) -> RawOptions {
        RawOptions {
            target: self.target.clone(),
            strict: self.strict,
            gt: self.gt,
            lt: self.lt,
            warning: self.warning,
            critical: self.critical,
        }
    }
}

/// Rewrites Go style single dash long flags (`-target x`, `-gt=1`) into the double dash form
/// clap expects. Single character flags, negative numbers, values of value taking flags and
/// everything after `--` are passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut iter = args.into_iter().map(Into::into);
    let mut out: Vec<OsString> = iter.next().into_iter().collect();

    let mut takes_value = false;
    let mut passthrough = false;

    for arg in iter {
        if passthrough || std::mem::take(&mut takes_value) {
            out.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        if s == "--" {
            passthrough = true;
            out.push(arg);
            continue;
        }

        let (flag, rewritten) = match s.strip_prefix("--") {
            Some(rest) => (rest, None),
            None => match s.strip_prefix('-') {
                Some(rest)
                    if rest.len() > 1 && rest.starts_with(|c: char| c.is_ascii_alphabetic()) =>
                {
                    (rest, Some(OsString::from(format!("-{s}"))))
                }
                _ => {
                    out.push(arg);
                    continue;
                }
            },
        };

        takes_value = VALUE_FLAGS.contains(&flag);
        out.push(rewritten.unwrap_or(arg));
    }

    out
}

/// Installs the fmt subscriber. Logs go to stderr, stdout is reserved for the report line.
pub fn init_tracing(level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
