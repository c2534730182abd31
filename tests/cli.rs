use std::process::{Command, Output};

fn quantumforge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quantumforge"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn quantumforge")
}

#[test]
fn default_run_exits_zero_and_stays_quiet() {
    let out = quantumforge(&[]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty(), "unexpected stderr: {}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn verbose_false_is_quiet() {
    let out = quantumforge(&["--verbose=false"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}

#[test]
fn verbose_run_logs_to_stderr() {
    let out = quantumforge(&["--verbose"]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Starting quantumforge"), "stderr: {}", stderr);
    assert!(stderr.contains("Verbose logging enabled"), "stderr: {}", stderr);
}

#[test]
fn unknown_flag_exits_with_usage() {
    let out = quantumforge(&["--bogus"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("--bogus"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn help_lists_verbose_flag() {
    let out = quantumforge(&["--help"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("--verbose"));
}

fn quantumforge_with_log(rust_log: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quantumforge"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("spawn quantumforge")
}

#[test]
fn rust_log_overrides_quiet_default() {
    let out = quantumforge_with_log("info", &[]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Starting quantumforge"), "stderr: {}", stderr);
    assert!(!stderr.contains("Verbose logging enabled"), "stderr: {}", stderr);
}

#[test]
fn invalid_rust_log_falls_back_to_verbose_filter() {
    let out = quantumforge_with_log("quantumforge=notalevel", &["--verbose"]);
    assert_eq!(out.status.code(), Some(0));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Verbose logging enabled"), "stderr: {}", stderr);
}

#[test]
fn repeated_verbose_keeps_last_value() {
    let out = quantumforge(&["--verbose", "--verbose=false"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stderr.is_empty());
}

#[test]
fn single_dash_verbose_is_accepted() {
    let out = quantumforge(&["-verbose"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Starting quantumforge"));
}
