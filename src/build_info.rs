//! Version stamp embedded by `build.rs`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version text for `--version`.
pub fn version_line() -> String {
    format!("gridsnake {} ({})", BUILD_DATE, BUILD_COMMIT)
}
