//! Session document loading against on-disk fixtures.

use eyeframe::document::{self, FrameRate};
use eyeframe::frame::PANEL_SIZE;
use tempfile::TempDir;

use crate::helpers::{fixture_path, load_fixture};

#[test]
fn canonical_fixture_loads_clean() {
    let decoded = load_fixture("two_frames.json");
    let session = decoded.session;

    assert!(decoded.report.is_clean());
    assert!(!decoded.report.fps_defaulted);
    assert_eq!(session.fps, FrameRate::new(8));
    assert!(!session.looping);
    assert_eq!(session.frames.len(), 2);

    let first = &session.frames[0];
    assert!((0..PANEL_SIZE).all(|i| first.left.get(i, i)));
    assert_eq!(first.left.count_on(), PANEL_SIZE);
    assert_eq!(first.right.count_on(), 2 * PANEL_SIZE);
    assert!(session.frames[1].left.is_blank());
}

#[test]
fn legacy_nested_planes_are_flattened() {
    let decoded = load_fixture("legacy_nested.json");
    let report = &decoded.report;
    let frames = &decoded.session.frames;

    assert_eq!(report.flattened_planes, 6);
    assert_eq!(report.zero_filled_planes, 0);
    assert_eq!(decoded.session.fps.get(), 6);

    // Row-major: the left column of the first frame, the top row on the right
    assert!((0..PANEL_SIZE).all(|y| frames[0].left.get(0, y)));
    assert!(!frames[0].left.get(1, 0));
    assert!((0..PANEL_SIZE).all(|x| frames[0].right.get(x, 0)));
    assert!(!frames[0].right.get(0, 1));

    assert_eq!(frames[1].left.count_on(), 256);
    assert!(frames[1].right.is_blank());
    assert_eq!(frames[2].left.count_on(), 128);
    assert!(frames[2].left.get(0, 0));
    assert!(frames[2].right.get(1, 0));
}

#[test]
fn malformed_fixture_loads_with_repairs() {
    let decoded = load_fixture("malformed.json");
    let report = &decoded.report;
    let session = &decoded.session;

    assert_eq!(session.frames.len(), 4);
    assert_eq!(session.fps, FrameRate::default());
    assert!(session.looping);
    assert!(report.fps_defaulted);
    assert!(report.loop_defaulted);
    assert_eq!(report.blank_frames, 1);
    assert_eq!(report.zero_filled_planes, 4);
    assert_eq!(report.coerced_values, 2);

    assert!(session.frames[0].left.is_blank());
    assert_eq!(session.frames[0].right.count_on(), PANEL_SIZE + 2);
    assert!(session.frames[1].is_blank());
    assert!(session.frames[2].left.is_blank());
    assert_eq!(session.frames[2].right.count_on(), 256);
    assert!(session.frames[3].is_blank());
}

#[test]
fn normalized_legacy_file_round_trips_clean() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("migrated.json");
    let legacy = load_fixture("legacy_nested.json");

    document::save(&legacy.session, &out).unwrap();
    let migrated = document::load(&out).unwrap();

    assert!(migrated.report.is_clean());
    assert_eq!(migrated.session, legacy.session);
}

#[test]
fn saved_document_uses_flat_planes_and_loop_key() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("flat.json");
    document::save(&load_fixture("two_frames.json").session, &out).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();

    assert_eq!(value["fps"], 8);
    assert_eq!(value["loop"], false);
    let left = value["frames"][0]["left"].as_array().unwrap();
    assert_eq!(left.len(), 256);
    assert!(left.iter().all(|v| v == 0 || v == 1));
}

#[test]
fn non_object_document_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("array.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();

    let err = document::load(&path).unwrap_err();

    assert!(err.to_string().contains("array"));
    assert!(fixture_path("two_frames.json").exists());
}
