//! Process-level tests for the walkthrough binary.

use anyhow::{Result, ensure};
use assert_cmd::Command;
use rstest::rstest;

fn run(args: &[&str]) -> Result<std::process::Output> {
    Ok(Command::cargo_bin("hello_sflag")?.args(args).output()?)
}

#[rstest]
fn prints_defaults_and_positionals() -> Result<()> {
    let output = run(&["--iq=100", "one", "two"])?;
    ensure!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8(output.stdout)?;
    for expected in [
        "SomeFile= /dev/null",
        "IQ= 100",
        "Age= 42000000000000",
        "SomeCommand= 'yes | head'",
        "Verbose= false",
        "OutData= /an/output/file",
        "arg num 0 : one",
        "arg num 1 : two",
    ] {
        ensure!(stdout.contains(expected), "missing {expected:?} in:\n{stdout}");
    }
    Ok(())
}

#[rstest]
fn standalone_bool_token_fails_with_usage() -> Result<()> {
    let output = run(&["--verbose", "true"])?;
    ensure!(output.status.code() == Some(2), "status: {:?}", output.status);
    let stderr = String::from_utf8(output.stderr)?;
    ensure!(stderr.contains("standalone argument `true`"), "stderr:\n{stderr}");
    ensure!(stderr.contains("ARGS:"), "usage missing from:\n{stderr}");
    Ok(())
}

#[rstest]
fn help_prints_usage_and_succeeds() -> Result<()> {
    let output = run(&["--help"])?;
    ensure!(output.status.success(), "status: {:?}", output.status);
    let stdout = String::from_utf8(output.stdout)?;
    ensure!(
        stdout.contains("--iq: 42 <-- Default, i64 # do not inflate"),
        "stdout:\n{stdout}"
    );
    Ok(())
}

#[rstest]
fn unknown_flag_fails() -> Result<()> {
    let output = run(&["--bogus"])?;
    ensure!(!output.status.success(), "status: {:?}", output.status);
    Ok(())
}
