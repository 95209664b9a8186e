use tui_bowling::core::{Game, GameSnapshot};
use tui_bowling::term::{
    encode_into, Prompt, ScorecardView, Status, Viewport, GRID_HEIGHT, GRID_WIDTH, VIEW_HEIGHT,
};
use tui_bowling::types::DEMO_ROLLS;

fn snapshot(rolls: &[u8]) -> GameSnapshot {
    Game::from_rolls(rolls).unwrap().snapshot()
}

#[test]
fn scorecard_shows_demo_game() {
    let lines = ScorecardView::new(false).render_text(&snapshot(&DEMO_ROLLS));
    assert_eq!(lines.len(), usize::from(GRID_HEIGHT) + 1);

    assert_eq!(
        lines[3],
        "│ X    │ 7 /  │ 9 -  │ X    │ - 8  │ 8 /  │ - 6  │ X    │ X    │ X 8 1│"
    );
    assert_eq!(
        lines[4],
        "│    20│    39│    48│    66│    74│    84│    90│   120│   148│   167│"
    );
    assert_eq!(lines[6], "Total 167  Game over");
}

#[test]
fn scorecard_shows_standing_pins_mid_frame() {
    let lines = ScorecardView::new(false).render_text(&snapshot(&[3, 4, 6]));
    assert_eq!(lines[6], "Total 13  Frame 2, 4 pins standing");
    assert!(lines[4].starts_with("│     7│      │"));
}

#[test]
fn scorecard_for_empty_game() {
    let lines = ScorecardView::new(false).render_text(&GameSnapshot::default());
    assert_eq!(lines[6], "Total 0");
    assert!(lines[3].chars().all(|c| c == '│' || c == ' '));
}

#[test]
fn scorecard_centers_in_wide_viewport() {
    let width = GRID_WIDTH + 20;
    let fb = ScorecardView::default().render(
        &GameSnapshot::default(),
        None,
        Viewport::new(width, VIEW_HEIGHT),
    );
    assert_eq!(fb.get(9, 0).map(|c| c.ch), Some(' '));
    assert_eq!(fb.get(10, 0).map(|c| c.ch), Some('┌'));
    assert_eq!(fb.get(10 + GRID_WIDTH - 1, 0).map(|c| c.ch), Some('┐'));
}

#[test]
fn scorecard_prompt_with_help_line() {
    let prompt = Prompt {
        entry: "x, 9",
        status: None,
    };
    let fb = ScorecardView::new(false).render(
        &GameSnapshot::default(),
        Some(&prompt),
        Viewport::new(90, VIEW_HEIGHT),
    );
    assert_eq!(fb.row_text(GRID_HEIGHT + 2), "> x, 9_");
    assert!(fb.row_text(GRID_HEIGHT + 3).contains("Ctrl-N new game"));
}

#[test]
fn scorecard_info_status() {
    let status = Status::Info("New game".to_string());
    let prompt = Prompt {
        entry: "",
        status: Some(&status),
    };
    let fb = ScorecardView::new(false).render(
        &GameSnapshot::default(),
        Some(&prompt),
        Viewport::new(80, VIEW_HEIGHT),
    );
    assert_eq!(fb.row_text(GRID_HEIGHT + 3), "New game");
}

#[test]
fn small_viewport_clips_without_panicking() {
    let fb = ScorecardView::default().render(&snapshot(&DEMO_ROLLS), None, Viewport::new(10, 3));
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 3);
    assert_eq!(fb.row_text(0).chars().next(), Some('┌'));

    let mut out = Vec::new();
    encode_into(&fb, &mut out).unwrap();
    assert!(!out.is_empty());
}
