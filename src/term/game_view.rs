//! GameView: maps a `core::Grid` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

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

/// Transient per-frame info shown around the board.
#[derive(Debug, Clone, Copy)]
pub struct Hud<'a> {
    /// Running score: the sum of all tiles.
    pub score: u32,
    pub game_over: bool,
    /// Direction keys in Up/Left/Down/Right order, for the help line.
    pub controls: [char; 4],
    /// Feedback after an unrecognized or ineffective key.
    pub hint: Option<&'a str>,
}

/// A lightweight terminal view for the 2048 grid.
pub struct GameView {
    /// Grid cell width in terminal columns; fits a right-aligned tile value.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x2 leaves room for values up to six digits and keeps the board
        // roughly square in typical terminal glyph aspect ratio.
        Self {
            cell_w: 7,
            cell_h: 2,
        }
    }
}

impl GameView {
    /// Render the grid and HUD into a framebuffer.
    pub fn render(&self, grid: &Grid, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (GRID_SIZE as u16) * self.cell_w;
        let board_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = grid.get(row, col);
                if value == 0 {
                    self.draw_empty_cell(&mut fb, start_x, start_y, row as u16, col as u16);
                } else {
                    self.draw_tile(&mut fb, start_x, start_y, row as u16, col as u16, value);
                }
            }
        }

        self.draw_side_panel(&mut fb, hud, viewport, start_x, start_y, frame_w);

        if hud.game_over {
            self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, row: u16, col: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        let (px, py) = self.cell_origin(start_x, start_y, row, col);
        fb.put_char(px + self.cell_w - 2, py + (self.cell_h - 1) / 2, '·', style);
    }

    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
    ) {
        let style = CellStyle {
            fg: tile_color(value),
            bg: Rgb::new(30, 30, 40),
            bold: value >= 128,
            dim: false,
        };
        let (px, py) = self.cell_origin(start_x, start_y, row, col);
        let text = format!("{value:>width$}", width = (self.cell_w - 1) as usize);
        fb.put_str(px, py + (self.cell_h - 1) / 2, &text, style);
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        (
            start_x + 1 + col * self.cell_w,
            start_y + 1 + row * self.cell_h,
        )
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        hud: &Hud<'_>,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let hint = CellStyle {
            fg: Rgb::new(230, 140, 100),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", hud.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "KEYS", label);
        y = y.saturating_add(1);
        let [up, left, down, right] = hud.controls;
        fb.put_str(
            panel_x,
            y,
            &format!("{up} {left} {down} {right} or arrows"),
            value,
        );
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "esc quits", CellStyle { dim: true, ..value });
        y = y.saturating_add(2);

        if let Some(text) = hud.hint {
            fb.put_str(panel_x, y, text, hint);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Tile foreground color by magnitude, loosely after the classic palette.
fn tile_color(value: u32) -> Rgb {
    match value {
        2 => Rgb::new(238, 228, 218),
        4 => Rgb::new(237, 224, 200),
        8 => Rgb::new(242, 177, 121),
        16 => Rgb::new(245, 149, 99),
        32 => Rgb::new(246, 124, 95),
        64 => Rgb::new(246, 94, 59),
        128 => Rgb::new(237, 207, 114),
        256 => Rgb::new(237, 204, 97),
        512 => Rgb::new(237, 200, 80),
        1024 => Rgb::new(237, 197, 63),
        _ => Rgb::new(237, 194, 46),
    }
}
