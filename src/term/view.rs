//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. Grid row 0 is drawn at the top
//! of the well: pieces enter at the bottom of the screen and rise until they
//! rest against the ceiling.

use crate::core::{GameSnapshot, PieceSnapshot};
use crate::term::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{Rgb, ShapeKind, GRID_HEIGHT, GRID_WIDTH, SPAWN_X, SPAWN_Y};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Left margin of the well border, in terminal columns.
const WELL_X: u16 = 2;
/// Top margin of the well border, in terminal rows.
const WELL_Y: u16 = 1;

/// A lightweight terminal view for the upside-down game.
pub struct GameView {
    /// Grid cell width in terminal columns (2 compensates for glyph aspect).
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Terminal column of a grid cell's leftmost glyph.
    fn col(&self, x: i8) -> u16 {
        WELL_X + 1 + (x as u16) * self.cell_w
    }

    /// Terminal row of a grid cell. Row 0 maps to the top of the well.
    fn row(&self, y: i8) -> u16 {
        WELL_Y + 1 + y as u16
    }

    fn sidebar_x(&self) -> u16 {
        WELL_X + (GRID_WIDTH as u16) * self.cell_w + 4
    }

    /// Render the snapshot into an existing framebuffer.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let well_bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(20, 20, 26),
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let text = CellStyle::default();

        let well_w = (GRID_WIDTH as u16) * self.cell_w;
        let well_h = GRID_HEIGHT as u16;

        fb.fill_rect(WELL_X + 1, WELL_Y + 1, well_w, well_h, ' ', well_bg);
        self.draw_border(fb, WELL_X, WELL_Y, well_w + 2, well_h + 2, border);

        // Locked cells.
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    self.draw_block(fb, x as i8, y as i8, *kind);
                }
            }
        }

        // Rising piece (blocks below the resting edge stay hidden).
        for &(x, y) in &snap.current.blocks {
            if y >= 0 {
                self.draw_block(fb, x, y, snap.current.kind);
            }
        }

        self.draw_sidebar(fb, snap, text);

        if snap.game_over {
            self.draw_overlay(fb, "GAME OVER", Some("press r to restart"));
        } else if snap.paused {
            self.draw_overlay(fb, "PAUSED", None);
        }
    }

    /// Convenience wrapper allocating a fresh framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, x: i8, y: i8, kind: ShapeKind) {
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: kind.color(),
            bold: false,
        };
        fb.fill_rect(self.col(x), self.row(y), self.cell_w, 1, ' ', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        fb.fill_rect(x + 1, y, w - 2, 1, '─', style);
        fb.fill_rect(x + 1, y + h - 1, w - 2, 1, '─', style);
        fb.fill_rect(x, y + 1, 1, h - 2, '│', style);
        fb.fill_rect(x + w - 1, y + 1, 1, h - 2, '│', style);
        fb.set(x, y, Cell { ch: '┌', style });
        fb.set(x + w - 1, y, Cell { ch: '┐', style });
        fb.set(x, y + h - 1, Cell { ch: '└', style });
        fb.set(x + w - 1, y + h - 1, Cell { ch: '┘', style });
    }

    fn draw_sidebar(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, text: CellStyle) {
        let x = self.sidebar_x();

        let label = format!("next ({})", snap.next.kind.as_str());
        fb.draw_text(x, WELL_Y + 1, &label, text);
        self.draw_preview(fb, &snap.next, x, WELL_Y + 3);

        fb.draw_text(x, WELL_Y + 10, &format!("score {}", snap.score), text);
        fb.draw_text(x, WELL_Y + 11, &format!("level {}", snap.level), text);
        fb.draw_text(x, WELL_Y + 12, &format!("lines {}", snap.lines_cleared), text);

        let dim = CellStyle {
            fg: Rgb::new(120, 120, 120),
            ..text
        };
        fb.draw_text(x, WELL_Y + 15, "arrows move, up rises", dim);
        fb.draw_text(x, WELL_Y + 16, "down rotates, space slams", dim);
        fb.draw_text(x, WELL_Y + 17, "p pause, q quit", dim);
    }

    /// Draw the queued piece in pattern-local coordinates.
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &PieceSnapshot, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(0, 0, 0),
            bg: piece.kind.color(),
            bold: false,
        };
        for &(bx, by) in &piece.blocks {
            let dx = (bx - SPAWN_X) as u16;
            let dy = (by - SPAWN_Y) as u16;
            fb.fill_rect(x + dx * self.cell_w, y + dy, self.cell_w, 1, ' ', style);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, title: &str, hint: Option<&str>) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(60, 0, 0),
            bold: true,
        };
        let well_w = (GRID_WIDTH as u16) * self.cell_w;
        let cx = WELL_X + 1 + well_w / 2;
        let cy = WELL_Y + 1 + (GRID_HEIGHT as u16) / 2;

        let tx = cx.saturating_sub(title.len() as u16 / 2);
        fb.draw_text(tx, cy, title, style);
        if let Some(hint) = hint {
            let hx = cx.saturating_sub(hint.len() as u16 / 2);
            fb.draw_text(hx, cy + 2, hint, style);
        }
    }
}
