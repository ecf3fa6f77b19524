//! GameView rendering checks against an in-memory framebuffer.

use flipris::core::{GameState, SequenceSource};
use flipris::term::{GameView, Viewport};
use flipris::types::ShapeKind;

fn state(shapes: &[ShapeKind]) -> GameState {
    GameState::with_source(Box::new(SequenceSource::new(shapes.to_vec())))
}

fn row_text(fb: &flipris::term::FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .filter_map(|x| fb.get(x, y))
        .map(|cell| cell.ch)
        .collect()
}

#[test]
fn test_render_fills_the_viewport() {
    let view = GameView::default();
    let snap = state(&[ShapeKind::I, ShapeKind::O]).snapshot();
    let fb = view.render(&snap, Viewport::new(80, 26));
    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 26);
}

#[test]
fn test_render_shows_the_next_piece_label_and_counters() {
    let view = GameView::default();
    let snap = state(&[ShapeKind::I, ShapeKind::O]).snapshot();
    let fb = view.render(&snap, Viewport::new(80, 26));

    let text: String = (0..fb.height()).map(|y| row_text(&fb, y) + "\n").collect();
    assert!(text.contains("next"));
    assert!(text.contains("score 0"));
    assert!(text.contains("level 1"));
    assert!(text.contains("lines 0"));
}

#[test]
fn test_render_paused_overlay() {
    let view = GameView::default();
    let mut game = state(&[ShapeKind::I, ShapeKind::O]);
    game.toggle_pause();
    let fb = view.render(&game.snapshot(), Viewport::new(80, 26));

    let text: String = (0..fb.height()).map(|y| row_text(&fb, y) + "\n").collect();
    assert!(text.contains("PAUSED"));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn test_render_survives_every_viewport_size() {
    let view = GameView::default();
    let snap = state(&[ShapeKind::T, ShapeKind::Z]).snapshot();
    for w in [0, 1, 10, 40, 200] {
        for h in [0, 1, 5, 24, 100] {
            let _ = view.render(&snap, Viewport::new(w, h));
        }
    }
}
