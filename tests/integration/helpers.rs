//! Shared helpers for integration tests.

use std::path::{Path, PathBuf};
use std::process::Command;

use eyeframe::document::{self, Decoded};

/// Config path that never exists, so CLI runs use default settings.
pub const NO_CONFIG: &str = concat!(env!("CARGO_TARGET_TMPDIR"), "/eyeframe-no-config.toml");

pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

pub fn fixture_path(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}

pub fn load_fixture(name: &str) -> Decoded {
    document::load(fixture_path(name)).expect("fixture should load")
}

/// Run the eyeframe binary and capture (stdout, stderr, exit code).
pub fn run_eyeframe(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_eyeframe"))
        .args(args)
        .env("EYEFRAME_CONFIG", NO_CONFIG)
        .env_remove("EYEFRAME_LOG")
        .output()
        .expect("Failed to execute eyeframe");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}
