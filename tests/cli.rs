use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::{contains, diff};

const METRICS: &str = "\
cpu.user 12.5 1699999999
cpu.load 120 1699999999
cpu.load 5 1699999999
disk.used notanumber 1699999999
mem.total 1024
";

fn cmd() -> Command {
    Command::cargo_bin("check-value-from-metrics").unwrap()
}

#[test]
fn critical_when_greater() {
    cmd()
        .args(["-target", "cpu.load", "-gt", "100"])
        .write_stdin(METRICS)
        .assert()
        .code(2)
        .stdout(diff("check-value-from-metrics-plugin CRITICAL: 120.000000 > 100.000000\n"));
}

#[test]
fn ok_when_condition_not_met() {
    cmd()
        .args(["-target", "cpu.load", "-gt", "150"])
        .write_stdin(METRICS)
        .assert()
        .code(0)
        .stdout(diff("check-value-from-metrics-plugin OK\n"));
}

#[test]
fn warning_with_custom_name() {
    cmd()
        .args(["-target=cpu.user", "-lt=20", "-warning", "-critical=false", "-name=cpu"])
        .write_stdin(METRICS)
        .assert()
        .code(1)
        .stdout(diff("cpu WARNING: 12.500000 < 20.000000\n"));
}

#[test]
fn warning_alone_is_accepted() {
    cmd()
        .args(["-target", "cpu.load", "-gt", "100", "-warning"])
        .write_stdin(METRICS)
        .assert()
        .code(1);
}

#[test]
fn missing_target_metric() {
    cmd()
        .args(["-target", "mem.free", "-lt", "10"])
        .write_stdin(METRICS)
        .assert()
        .code(0);

    cmd()
        .args(["-target", "mem.free", "-lt", "10", "-strict"])
        .write_stdin(METRICS)
        .assert()
        .code(3)
        .stdout(contains("UNKNOWN: target value not found"));
}

#[test]
fn short_line_is_not_a_match() {
    cmd()
        .args(["-target", "mem.total", "-gt", "1", "-strict"])
        .write_stdin(METRICS)
        .assert()
        .code(3)
        .stdout(contains("target value not found"));
}

#[test]
fn unparsable_value_is_unknown() {
    for strict in ["-strict=false", "-strict=true"] {
        cmd()
            .args(["-target", "disk.used", "-gt", "1", strict])
            .write_stdin(METRICS)
            .assert()
            .code(3)
            .stdout(contains("UNKNOWN: invalid value \"notanumber\""));
    }
}

#[test]
fn empty_stdin() {
    cmd()
        .args(["-target", "cpu.load", "-gt", "1"])
        .write_stdin("")
        .assert()
        .code(0);
}

#[test]
fn config_errors_exit_before_check() {
    let cases: &[(&[&str], &str)] = &[
        (&["-gt", "1"], "-target is required"),
        (&["-target", "x", "-gt", "1", "-lt", "2"], "specify only one of either -gt or -lt"),
        (&["-target", "x"], "-gt or -lt is required"),
        (
            &["-target", "x", "-gt", "1", "-warning", "-critical"],
            "specify only one of either -warning or -critical",
        ),
    ];

    for (args, message) in cases {
        cmd()
            .args(*args)
            .write_stdin(METRICS)
            .assert()
            .code(64)
            .stdout(predicate::str::is_empty())
            .stderr(contains(*message));
    }
}

#[test]
fn usage_error_exit_code() {
    cmd()
        .args(["-target", "x", "-gt", "not-a-number"])
        .assert()
        .code(64)
        .stdout(predicate::str::is_empty());
}

#[test]
fn help_exits_zero() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--target"));
}

#[test]
fn logs_go_to_stderr() -> anyhow::Result<()> {
    let output = cmd()
        .args(["-target", "cpu.load", "-gt", "100", "-log-level", "debug"])
        .write_stdin(METRICS)
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        String::from_utf8(output.stdout)?,
        "check-value-from-metrics-plugin CRITICAL: 120.000000 > 100.000000\n"
    );
    assert!(String::from_utf8(output.stderr)?.contains("found target"));

    Ok(())
}

#[test]
fn repeated_flag_uses_last_value() {
    cmd()
        .args(["-target", "a", "-target", "cpu.load", "-gt", "100"])
        .write_stdin("cpu.load 120 1\n")
        .assert()
        .code(2)
        .stdout(diff("check-value-from-metrics-plugin CRITICAL: 120.000000 > 100.000000\n"));
}
