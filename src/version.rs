//! Build details recorded by `build.rs`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_HASH: &str = env!("STAFF_REPORT_GIT_HASH");
pub const BUILD_TIMESTAMP: &str = env!("STAFF_REPORT_BUILD_TIMESTAMP");
pub const TARGET: &str = env!("STAFF_REPORT_TARGET");
pub const PROFILE: &str = env!("STAFF_REPORT_PROFILE");
pub const RUSTC_VERSION: &str = env!("STAFF_REPORT_RUSTC_VERSION");

const GIT_DIRTY: &str = env!("STAFF_REPORT_GIT_DIRTY");

/// Uncommitted changes were present when this binary was built.
pub fn git_dirty() -> bool {
    GIT_DIRTY == "true"
}

/// `0.1.0-abc12345`, with `-dirty` appended for uncommitted builds.
pub fn full_version() -> String {
    let dirty = if git_dirty() { "-dirty" } else { "" };
    format!("{}-{}{}", VERSION, GIT_HASH, dirty)
}

/// Text after the program name in `--version` and `staff-report version`.
pub fn long_version() -> String {
    format!(
        "{}\nbuilt:  {} ({})\ntarget: {}\nrustc:  {}",
        full_version(),
        BUILD_TIMESTAMP,
        PROFILE,
        TARGET,
        RUSTC_VERSION
    )
}

pub fn print_version() {
    println!("{} {}", env!("CARGO_PKG_NAME"), long_version());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_version_starts_with_package_version() {
        let full = full_version();
        assert!(full.starts_with(&format!("{}-{}", VERSION, GIT_HASH)));
        assert_eq!(full.ends_with("-dirty"), git_dirty());
    }

    #[test]
    fn test_long_version_lines() {
        let text = long_version();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], full_version());
        assert!(lines[2].contains(TARGET));
    }
}
