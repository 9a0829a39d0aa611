use tui_match3::core::{GameSnapshot, Grid, Session, TokenCycle};
use tui_match3::term::{AnchorY, FrameBuffer, GameView, HudView, StatusKind, Viewport};
use tui_match3::types::{Pos, Token};

fn small_snapshot() -> GameSnapshot {
    let grid = Grid::parse("RRG\nBGR\nGRB").unwrap();
    Session::with_grid(grid, TokenCycle::new(vec![Token::Green, Token::Red, Token::Blue]))
        .unwrap()
        .snapshot()
}

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = small_snapshot();
    let view = GameView::default();

    // 3x3 board with cell_w=3: frame is 11x5, plus a 2-column gutter on each
    // side and label/prompt rows => exactly fills 15x9.
    let fb = view.render(&snap, &HudView::default(), Viewport::new(15, 9));

    assert_eq!(fb.get(2, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(12, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(2, 5).unwrap().ch, '└');
    assert_eq!(fb.get(12, 5).unwrap().ch, '┘');
}

#[test]
fn term_view_labels_rows_and_columns() {
    let snap = small_snapshot();
    let fb = GameView::default().render(&snap, &HudView::default(), Viewport::new(15, 9));

    assert_eq!(fb.get(0, 2).unwrap().ch, 'A');
    assert_eq!(fb.get(0, 4).unwrap().ch, 'C');
    assert_eq!(fb.get(14, 3).unwrap().ch, 'B');

    assert_eq!(fb.row_text(0).trim(), "1  2  3");
    assert_eq!(fb.row_text(6).trim(), "1  2  3");
}

#[test]
fn term_view_draws_tokens_in_their_colors() {
    let snap = small_snapshot();
    let fb = GameView::default().render(&snap, &HudView::default(), Viewport::new(15, 9));

    // Cell (0,0) is centered in its 3-column slot.
    let red = fb.get(4, 2).unwrap();
    let green = fb.get(10, 2).unwrap();
    assert_eq!(red.ch, '●');
    assert_eq!(green.ch, '●');
    assert_ne!(red.style.fg, green.style.fg);

    // Two reds on row A share a color.
    assert_eq!(fb.get(7, 2).unwrap().style.fg, red.style.fg);
}

#[test]
fn term_view_highlights_selected_cell() {
    let snap = small_snapshot();
    let view = GameView::default();
    let plain = view.render(&snap, &HudView::default(), Viewport::new(15, 9));
    let hud = HudView {
        selected: Some(Pos::new(1, 1)),
        ..HudView::default()
    };
    let marked = view.render(&snap, &hud, Viewport::new(15, 9));

    assert_ne!(marked.get(7, 3).unwrap().style.bg, plain.get(7, 3).unwrap().style.bg);
    assert_eq!(marked.get(4, 3), plain.get(4, 3));
}

#[test]
fn term_view_draws_prompt_and_status() {
    let snap = small_snapshot();
    let hud = HudView {
        question: "First cell: ",
        typed: "B2",
        selected: None,
        status: Some(("specify two adjacent cells", StatusKind::Error)),
    };
    let fb = GameView::default().render(&snap, &hud, Viewport::new(40, 9));

    let all = screen_text(&fb);
    assert!(all.contains("First cell: B2_"));
    assert!(all.contains("specify two adjacent cells"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = small_snapshot();
    snap.score = 1234;
    snap.moves = 9;

    let view = GameView::default();
    let narrow = screen_text(&view.render(&snap, &HudView::default(), Viewport::new(15, 9)));
    assert!(!narrow.contains("SCORE"));

    let wide = screen_text(&view.render(&snap, &HudView::default(), Viewport::new(40, 12)));
    assert!(wide.contains("SCORE"));
    assert!(wide.contains("1234"));
    assert!(wide.contains("MOVES"));
}

#[test]
fn term_view_shows_last_move_batches() {
    let grid = Grid::parse("GBYM\nRYMB\nMRBY\nRGGB").unwrap();
    let refills = vec![
        Token::Yellow,
        Token::Blue,
        Token::Yellow,
        Token::Red,
        Token::Green,
        Token::Red,
    ];
    let mut session = Session::with_grid(grid, TokenCycle::new(refills)).unwrap();
    session.attempt_move(Pos::new(2, 0), Pos::new(2, 1)).unwrap();

    let fb = GameView::default().render(&session.snapshot(), &HudView::default(), Viewport::new(50, 14));
    let all = screen_text(&fb);
    assert!(all.contains("3+3"));
    assert!(all.contains("+6"));
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = small_snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, &HudView::default(), Viewport::new(15, 30));
    // Row 0 holds the column numbers.
    assert_eq!(fb.get(2, 1).unwrap().ch, '┌');
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = small_snapshot();
    let fb = GameView::default().render(&snap, &HudView::default(), Viewport::new(15, 19));

    // (19 - 9) / 2 = 5 rows above the labels.
    assert_eq!(fb.get(2, 6).unwrap().ch, '┌');
}
