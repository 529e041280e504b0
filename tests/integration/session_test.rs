//! Session lifecycle and editing workflows, end to end through files.

use eyeframe::document::{self, FrameRate};
use eyeframe::editor::{CommandOutcome, EditorCommand, EditorState};
use eyeframe::frame::{BitPlane, Frame, Panel};
use eyeframe::session::{SaveOutcome, SessionManager, SessionState};
use tempfile::TempDir;

#[test]
fn demo_session_survives_save_and_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("demo");

    let mut manager = SessionManager::new();
    assert!(manager.start_session(path.to_str().unwrap()));
    manager.store_mut().append(Frame::new(BitPlane::filled(true), BitPlane::new()));
    manager.mark_modified();
    assert_eq!(
        manager.save_if_dirty().unwrap(),
        SaveOutcome::Saved(path.clone())
    );

    let mut reloaded = SessionManager::new();
    reloaded.load_from(&path).unwrap();

    assert_eq!(reloaded.store().len(), 1);
    let frame = reloaded.store().get(0).unwrap();
    assert_eq!(frame.left.to_bits(), vec![1; 256]);
    assert_eq!(frame.right.to_bits(), vec![0; 256]);
    assert_eq!(reloaded.frame_rate(), FrameRate::new(12));
}

#[test]
fn edits_before_first_save_are_not_tracked() {
    let mut manager = SessionManager::new();
    manager.store_mut().set_pixel(Panel::Left, 0, 0, true).unwrap();
    manager.mark_modified();

    assert!(!manager.is_dirty());
    assert_eq!(manager.save_if_dirty().unwrap(), SaveOutcome::NothingToSave);
}

#[test]
fn edits_after_save_are_tracked() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tracked.json");
    let mut manager = SessionManager::new();
    manager.start_session("tracked");
    manager.save_to(&path).unwrap();
    assert!(!manager.is_dirty());

    manager.paint(Panel::Right, 4, 4, true).unwrap();

    assert!(manager.is_dirty());
    assert!(manager.save_if_dirty().unwrap().is_saved());
    assert!(!manager.is_dirty());
}

#[test]
fn editor_workflow_draw_commit_edit_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("wink.json");
    let mut editor = EditorState::new(FrameRate::new(6), false);

    editor
        .apply(EditorCommand::StartSession {
            name: path.to_string_lossy().into_owned(),
        })
        .unwrap();
    for x in 0..16 {
        editor
            .apply(EditorCommand::Paint {
                panel: Panel::Left,
                x,
                y: 8,
                on: true,
            })
            .unwrap();
    }
    assert_eq!(
        editor.apply(EditorCommand::CommitFrame).unwrap(),
        CommandOutcome::FrameAdded(0)
    );
    assert_eq!(
        editor.apply(EditorCommand::CommitFrame).unwrap(),
        CommandOutcome::FrameAdded(1)
    );

    editor.apply(EditorCommand::SelectFrame(1)).unwrap();
    editor
        .apply(EditorCommand::Paint {
            panel: Panel::Right,
            x: 15,
            y: 15,
            on: true,
        })
        .unwrap();
    editor.apply(EditorCommand::SaveFrameChanges).unwrap();
    editor.apply(EditorCommand::SaveIfDirty).unwrap();

    let saved = document::load(&path).unwrap().session;
    assert_eq!(saved.fps.get(), 6);
    assert!(!saved.looping);
    assert_eq!(saved.frames.len(), 2);
    assert_eq!(saved.frames[0].left.count_on(), 16);
    assert!(saved.frames[0].right.is_blank());
    assert_eq!(saved.frames[1].right.count_on(), 1);
}

#[test]
fn ended_session_refuses_painting_but_keeps_frames() {
    let mut editor = EditorState::default();
    editor
        .apply(EditorCommand::StartSession { name: "x".into() })
        .unwrap();
    editor.apply(EditorCommand::CommitFrame).unwrap();
    editor.apply(EditorCommand::EndSession).unwrap();

    let outcome = editor
        .apply(EditorCommand::Paint {
            panel: Panel::Left,
            x: 0,
            y: 0,
            on: true,
        })
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Ignored("no active session"));
    assert_eq!(editor.session().state(), SessionState::Idle);
    assert_eq!(editor.session().store().len(), 1);
}

#[test]
fn generated_text_can_be_saved_and_reloaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hi.json");
    let mut editor = EditorState::default();
    editor
        .apply(EditorCommand::StartSession { name: "hi".into() })
        .unwrap();
    editor
        .apply(EditorCommand::GenerateText("HI".into()))
        .unwrap();
    editor.apply(EditorCommand::SaveAs(path.clone())).unwrap();

    let mut other = EditorState::default();
    let outcome = other.apply(EditorCommand::Load(path)).unwrap();

    match outcome {
        CommandOutcome::Loaded(report) => assert!(report.is_clean()),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(other.session().store().len(), 43);
    assert_eq!(
        other.session().store().frames(),
        editor.session().store().frames()
    );
}
