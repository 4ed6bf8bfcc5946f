//! Shared helpers for the binary tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;

/// Variables the binary reads that would leak in from the caller's shell
const INHERITED_VARS: [&str; 7] = [
    "STAFF_REPORT_CONFIG",
    "STAFF_REPORT_ROSTER",
    "STAFF_REPORT_FORMAT",
    "STAFF_REPORT_LOG_LEVEL",
    "STAFF_REPORT_LOG_FILE",
    "STAFF_REPORT_LOG_JSON",
    "RUST_LOG",
];

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn valid_config_fixture() -> PathBuf {
    fixture("valid_config.toml")
}

pub fn invalid_config_fixture() -> PathBuf {
    fixture("invalid_config.toml")
}

/// Members sitting on and just past each grading threshold
pub fn roster_fixture() -> PathBuf {
    fixture("roster.toml")
}

/// Roster with an unknown role
pub fn bad_roster_fixture() -> PathBuf {
    fixture("bad_roster.toml")
}

/// Manager entry carrying an engineer field and a misspelled key
pub fn misplaced_field_roster_fixture() -> PathBuf {
    fixture("misplaced_field_roster.toml")
}

/// Home directory handed to the binary. It never exists, so neither
/// `~/.staff-report/config.toml` nor the XDG config file can be found.
pub fn isolated_home() -> PathBuf {
    fixture("no-such-home")
}

/// Report printed for the bundled sample roster
pub const SAMPLE_REPORT: &str = "产品经理:张三 需求量:5 评级:D
产品经理:李四 需求量:15 评级:C
产品经理:王麻子 需求量:25 评级:B
工程师:小明 代码量:600 评级:D
工程师:小红 代码量:6000 评级:C
工程师:小王 代码量:60000 评级:B";

/// The `staff-report` binary, cut off from the caller's environment and
/// config files. It runs inside the fixtures directory, which holds no
/// `staff-report.toml`.
pub fn report_cmd() -> Command {
    let mut cmd = Command::cargo_bin("staff-report").unwrap();
    for var in INHERITED_VARS {
        cmd.env_remove(var);
    }

    let home = isolated_home();
    cmd.env("HOME", &home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .current_dir(fixture(""));
    cmd
}
