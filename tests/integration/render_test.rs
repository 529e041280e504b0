//! Text rendering of stored frames.

use eyeframe::render::{self, RenderStyle};

use crate::helpers::load_fixture;

fn ascii() -> RenderStyle {
    RenderStyle {
        on: "#".to_string(),
        off: ".".to_string(),
        gap: 2,
    }
}

#[test]
fn snapshot_diagonal_and_bars() {
    let session = load_fixture("two_frames.json").session;
    let output = render::render_frame(&session.frames[0], &ascii());

    insta::assert_snapshot!(output.trim_end(), @r"
    #...............  ################
    .#..............  ................
    ..#.............  ................
    ...#............  ................
    ....#...........  ................
    .....#..........  ................
    ......#.........  ................
    .......#........  ................
    ........#.......  ................
    .........#......  ................
    ..........#.....  ................
    ...........#....  ................
    ............#...  ................
    .............#..  ................
    ..............#.  ................
    ...............#  ################
    ");
}

#[test]
fn gallery_lists_every_frame() {
    let session = load_fixture("two_frames.json").session;
    let output = render::render_gallery(&session.frames, &RenderStyle::default());

    let headings: Vec<_> = output.lines().filter(|l| l.starts_with("Frame")).collect();
    assert_eq!(headings, vec!["Frame 0", "Frame 1"]);
    // 2 headings, 32 pixel rows, 1 separator
    assert_eq!(output.lines().count(), 35);
    assert!(output.contains('●'));
    assert!(output.contains('○'));
}

#[test]
fn second_frame_draws_anti_diagonal_on_right() {
    let session = load_fixture("two_frames.json").session;
    let output = render::render_frame(&session.frames[1], &ascii());
    let first_row = output.lines().next().unwrap();

    assert_eq!(first_row, "................  ...............#");
}
