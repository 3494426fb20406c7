use blockfall::core::GameSession;
use blockfall::term::{AnchorY, FrameBuffer, GameView, Viewport};
use blockfall::types::PieceKind;

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
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSession::new(1).snapshot();
    snap.board[19][0] = PieceKind::I.cell_code();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let (x0, y0) = (1, 1 + 19);
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, PieceKind::I.color());
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut session = GameSession::new(1);
    session.start();
    let mut snap = session.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(60, 24)));
    for word in ["SCORE", "1234", "LEVEL", "LINES", "NEXT", "pause"] {
        assert!(all.contains(word), "missing {word}");
    }

    // Too narrow for a panel: only the well is drawn.
    let narrow = screen_text(&GameView::default().render(&snap, Viewport::new(30, 24)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameSession::new(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));

    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');
}

#[test]
fn term_view_can_anchor_board_to_top() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&snap, Viewport::new(22, 30));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_game_over_after_lock_out() {
    use blockfall::core::Board;
    use blockfall::types::{Cell, BOARD_WIDTH};

    let mut row: [Cell; BOARD_WIDTH as usize] = [Some(PieceKind::L); BOARD_WIDTH as usize];
    row[0] = None;
    let mut session = GameSession::with_board(4, Board::from_rows(&[row; 20]));
    session.start();
    session.hard_drop();

    let all = screen_text(&GameView::default().render(&session.snapshot(), Viewport::new(60, 24)));
    assert!(all.contains("GAME OVER"));
    assert!(!all.contains("PAUSED"));
}

#[test]
fn term_view_render_into_reuses_buffer_across_sizes() {
    let snap = GameSession::new(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(40, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 24));
    view.render_into(&snap, Viewport::new(22, 22), &mut fb);
    assert_eq!(fb.cells().len(), 22 * 22);
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}
