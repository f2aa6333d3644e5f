//! Captures live response bodies as JSON fixtures for the offline tests.
//! Compiled only when the `test-mode` feature is enabled.

use std::path::PathBuf;

/// `true` when `MARKETAUX_RECORD=1`.
pub(crate) fn recording() -> bool {
    std::env::var("MARKETAUX_RECORD").is_ok_and(|v| v == "1")
}

/// Writes `body` to `<dir>/<name>.json`, where `dir` is `MARKETAUX_FIXDIR` or `tests/fixtures`.
///
/// Failures are reported on stderr and never fail the fetch being recorded.
pub(crate) fn record(name: &str, body: &str) {
    let dir = std::env::var_os("MARKETAUX_FIXDIR").map_or_else(
        || PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
        PathBuf::from,
    );
    let path = dir.join(format!("{name}.json"));

    match std::fs::create_dir_all(&dir).and_then(|()| std::fs::write(&path, body)) {
        Ok(()) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(path = %path.display(), "recorded fixture");
        }
        Err(e) => eprintln!("MARKETAUX_RECORD: failed to write {}: {e}", path.display()),
    }
}
