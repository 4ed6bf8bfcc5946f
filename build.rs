//! Bakes git and toolchain details into `STAFF_REPORT_*` compile-time
//! variables, read back by `src/version.rs`.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let status = run("git", &["status", "--porcelain"]);
    let dirty = match &status {
        Some(out) => !out.is_empty(),
        None => false,
    };

    let vars = [
        ("GIT_HASH", run("git", &["rev-parse", "--short=8", "HEAD"])),
        ("GIT_DIRTY", Some(dirty.to_string())),
        (
            "BUILD_TIMESTAMP",
            Some(chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string()),
        ),
        ("TARGET", env::var("TARGET").ok()),
        ("PROFILE", env::var("PROFILE").ok()),
        ("RUSTC_VERSION", run("rustc", &["--version"])),
    ];

    for (name, value) in vars {
        let value = value.unwrap_or_else(|| "unknown".to_string());
        println!("cargo:rustc-env=STAFF_REPORT_{}={}", name, value);
    }
}

/// Trimmed stdout of a successful command.
fn run(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|s| s.trim().to_string())
}
