//! Tests for session filename sanitization.

use std::path::Path;

use eyeframe::files::filename::{self, FilenameError};

// ============================================================================
// Whitespace and Invalid Characters
// ============================================================================

#[test]
fn sanitize_replaces_whitespace_with_single_hyphen() {
    assert_eq!(filename::sanitize("blink left"), "blink-left");
    assert_eq!(filename::sanitize("blink \t\n left"), "blink-left");
    assert_eq!(filename::sanitize("blink---left"), "blink-left");
}

#[test]
fn sanitize_removes_invalid_chars() {
    assert_eq!(filename::sanitize("eyes/open"), "eyesopen");
    assert_eq!(filename::sanitize("eyes\\open"), "eyesopen");
    assert_eq!(filename::sanitize("eyes:open*?"), "eyesopen");
    assert_eq!(filename::sanitize("\"eyes\"<open>|"), "eyesopen");
}

#[test]
fn sanitize_removes_brackets() {
    assert_eq!(filename::sanitize("wink(v2)"), "winkv2");
    assert_eq!(filename::sanitize("wink[v2]"), "winkv2");
}

// ============================================================================
// Unicode
// ============================================================================

#[test]
fn sanitize_transliterates_accents() {
    assert_eq!(filename::sanitize("café"), "cafe");
    assert_eq!(filename::sanitize("über-blick"), "uber-blick");
    assert_eq!(filename::sanitize("my-projeçt_v2"), "my-project_v2");
}

#[test]
fn sanitize_handles_emoji() {
    let result = filename::sanitize("eyes🚀roll");
    assert!(!result.contains('🚀'));
    assert!(result.starts_with("eyes"));
    assert!(result.ends_with("roll"));
}

#[test]
fn sanitize_romanizes_cjk() {
    let result = filename::sanitize("日本語");
    assert!(!result.contains('日'));
    assert!(!result.is_empty());
}

// ============================================================================
// Trimming and Reserved Names
// ============================================================================

#[test]
fn sanitize_trims_edges() {
    assert_eq!(filename::sanitize("  blink  "), "blink");
    assert_eq!(filename::sanitize("..blink.."), "blink");
    assert_eq!(filename::sanitize(". . .blink"), "blink");
    assert_eq!(filename::sanitize("---blink---"), "blink");
}

#[test]
fn sanitize_prefixes_reserved_names() {
    assert_eq!(filename::sanitize("CON"), "_CON");
    assert_eq!(filename::sanitize("con"), "_con");
    assert_eq!(filename::sanitize("COM9"), "_COM9");
    assert_eq!(filename::sanitize("LPT1"), "_LPT1");
    assert_eq!(filename::sanitize("NUL.txt"), "_NUL.txt");
}

#[test]
fn sanitize_allows_reserved_names_as_substrings() {
    assert_eq!(filename::sanitize("CONTROLLER"), "CONTROLLER");
}

#[test]
fn sanitize_falls_back_to_session() {
    assert_eq!(filename::sanitize(""), "session");
    assert_eq!(filename::sanitize("   "), "session");
    assert_eq!(filename::sanitize("/\\:*?\"<>|"), "session");
    assert_eq!(filename::sanitize("..."), "session");
}

// ============================================================================
// Session Filenames
// ============================================================================

#[test]
fn session_filename_adds_extension() {
    assert_eq!(filename::session_filename("demo").unwrap(), "demo.json");
    assert_eq!(
        filename::session_filename("happy eyes").unwrap(),
        "happy-eyes.json"
    );
}

#[test]
fn session_filename_does_not_double_extension() {
    assert_eq!(filename::session_filename("demo.json").unwrap(), "demo.json");
    assert_eq!(filename::session_filename("demo.JSON").unwrap(), "demo.json");
}

#[test]
fn session_filename_for_blank_name_uses_fallback() {
    assert_eq!(filename::session_filename("  ").unwrap(), "session.json");
}

#[test]
fn session_filename_rejects_overlong_names() {
    let name = "a".repeat(300);
    let err = filename::session_filename(&name).unwrap_err();
    assert_eq!(
        err,
        FilenameError::TooLong {
            length: 305,
            max: 255
        }
    );
    assert_eq!(
        err.to_string(),
        "Filename too long: 305 characters (max 255)"
    );
}

#[test]
fn session_path_joins_directory() {
    let path = filename::session_path(Path::new("/tmp/eyes"), "blink fast").unwrap();
    assert_eq!(path, Path::new("/tmp/eyes/blink-fast.json"));
}
