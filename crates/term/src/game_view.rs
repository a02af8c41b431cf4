//! GameView: maps a `GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameState, Piece};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Widest board cell, in terminal columns.
pub const MAX_CELL_WIDTH: u16 = 4;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED_FG: Rgb = Rgb::new(150, 150, 160);

/// Paints the board, the falling piece and a side panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are about twice as tall as wide
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// `cell_w` is clamped to `1..=MAX_CELL_WIDTH`.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.clamp(1, MAX_CELL_WIDTH),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let frame_w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        let empty = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: PLAYFIELD_BG,
            bold: false,
            dim: true,
        };
        let locked = CellStyle {
            fg: LOCKED_FG,
            bg: PLAYFIELD_BG,
            bold: false,
            dim: false,
        };
        for (y, row) in state.board().rows().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                let (ch, style) = if value == 1 { ('█', locked) } else { ('·', empty) };
                self.fill_board_cell(fb, start_x, start_y, x as u16, y as u16, ch, style);
            }
        }

        self.draw_piece(fb, start_x, start_y, state.active());

        self.draw_side_panel(fb, state, viewport, start_x + frame_w + 2, start_y);

        if state.game_end() {
            let text = "GAME OVER";
            let x = start_x + frame_w.saturating_sub(text.len() as u16) / 2;
            let style = CellStyle {
                bold: true,
                ..CellStyle::fg(Rgb::new(255, 255, 255))
            };
            fb.put_str(x, start_y + frame_h / 2, text, style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::fg(Rgb::new(200, 200, 200));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Cells above the grid (spawning rows) are skipped.
    fn draw_piece(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, piece: &Piece) {
        let style = CellStyle {
            fg: piece.color(),
            bg: PLAYFIELD_BG,
            bold: true,
            dim: false,
        };
        for cell in piece.cells() {
            if cell.x >= 0 && cell.x < BOARD_WIDTH as i8 && cell.y >= 0 && cell.y < BOARD_HEIGHT as i8 {
                self.fill_board_cell(fb, start_x, start_y, cell.x as u16, cell.y as u16, '█', style);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        ch: char,
        style: CellStyle,
    ) {
        fb.fill_rect(start_x + 1 + x * self.cell_w, start_y + 1 + y, self.cell_w, 1, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        for (name, number) in [
            ("SCORE", state.score()),
            ("HIGH", state.high_score()),
            ("LEVEL", state.level()),
            ("LINES", state.lines()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        self.draw_preview(fb, panel_x, y + 1, Some(state.next()));
        y += 4;

        fb.put_str(panel_x, y, "HOLD", label);
        if state.hold_used() {
            fb.put_char(panel_x + 5, y, '*', CellStyle { dim: true, ..value });
        }
        self.draw_preview(fb, panel_x, y + 1, state.held());
    }

    /// Small 4x2 picture of a piece in its catalog layout.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: Option<&Piece>) {
        let Some(piece) = piece else {
            fb.put_char(x, y, '-', CellStyle::default());
            return;
        };
        let min_x = piece.cells().iter().map(|c| c.x).min().unwrap_or(0);
        let min_y = piece.cells().iter().map(|c| c.y).min().unwrap_or(0);
        let style = CellStyle::fg(piece.color());
        for cell in piece.cells() {
            let px = x + (cell.x - min_x) as u16 * self.cell_w;
            let py = y + (cell.y - min_y) as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}
