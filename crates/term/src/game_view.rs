//! GameView: maps a `core::GameState` onto a [`FrameBuffer`].
//!
//! This module is pure (no I/O), so every part of the board layout can be
//! unit-tested by inspecting framebuffer cells.
//!
//! Layout:
//!
//! ```text
//! ┌--------------------┐
//! │ board (tiles)      │   TIME
//! │                    │   0:42
//! │                    │
//! │                    │   MOVES
//! │                    │   16
//! └--------------------┘
//!      footer hints
//! ```
//!
//! Each tile occupies a `tile_w` x `tile_h` cell block. Face-down tiles render
//! as a shaded block, face-up tiles show their label on a lit background, and
//! matched tiles fade into the board so the remaining pairs stand out.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::TileStatus;

/// Terminal area the view may draw into, in character cells.
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

/// Renders the board, the stats panel, and the win overlay.
pub struct GameView {
    tile_w: u16,
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 5x3 reads roughly square in common terminal fonts.
        Self::new(5, 3)
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(3),
            tile_h: tile_h.max(1),
        }
    }

    /// Render into a fresh framebuffer. Convenience for tests.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Render the full frame: board, cursor, stats panel, footer, overlay.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let cols = state.cols() as u16;
        let rows = state.rows() as u16;
        let frame_w = cols * self.tile_w + 2;
        let frame_h = rows * self.tile_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_board_frame(fb, start_x, start_y, frame_w, frame_h);
        self.draw_tiles(fb, state, start_x, start_y);
        self.draw_cursor(fb, state, start_x, start_y);
        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);
        self.draw_footer(fb, viewport);

        if state.game_won() {
            self.draw_win_overlay(fb, state, start_x, start_y, frame_w, frame_h);
        }
    }

    fn draw_board_frame(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            ..CellStyle::default()
        };
        fb.fill_rect(x, y, w, h, ' ', bg);

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        self.draw_border(fb, x, y, w, h, border);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }
        let right = x + w - 1;
        let bottom = y + h - 1;
        for cx in x + 1..right {
            fb.put_char(cx, y, '─', style);
            fb.put_char(cx, bottom, '─', style);
        }
        for cy in y + 1..bottom {
            fb.put_char(x, cy, '│', style);
            fb.put_char(right, cy, '│', style);
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);
    }

    fn draw_tiles(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        let cols = state.cols() as usize;
        for (index, tile) in state.deck().iter().enumerate() {
            let col = (index % cols) as u16;
            let row = (index / cols) as u16;
            let px = start_x + 1 + col * self.tile_w;
            let py = start_y + 1 + row * self.tile_h;

            match state.tile_status(index) {
                TileStatus::Hidden => {
                    let back = CellStyle {
                        fg: Rgb::new(90, 100, 130),
                        bg: Rgb::new(30, 30, 40),
                        ..CellStyle::default()
                    };
                    fb.fill_rect(px, py, self.tile_w, self.tile_h, '▒', back);
                }
                TileStatus::Flipped => {
                    let face = CellStyle {
                        fg: Rgb::new(235, 240, 245),
                        bg: Rgb::new(48, 72, 89),
                        bold: true,
                        ..CellStyle::default()
                    };
                    fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', face);
                    self.draw_label(fb, px, py, tile.label.as_str(), face);
                }
                TileStatus::Matched => {
                    let faded = CellStyle {
                        fg: Rgb::new(130, 140, 150),
                        bg: Rgb::new(30, 30, 40),
                        dim: true,
                        ..CellStyle::default()
                    };
                    fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', faded);
                    self.draw_label(fb, px, py, tile.label.as_str(), faded);
                }
            }
        }
    }

    fn draw_label(&self, fb: &mut FrameBuffer, px: u16, py: u16, label: &str, style: CellStyle) {
        let len = label.chars().count() as u16;
        let lx = px + self.tile_w.saturating_sub(len) / 2;
        let ly = py + self.tile_h / 2;
        fb.put_str(lx, ly, label, style);
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, state: &GameState, start_x: u16, start_y: u16) {
        if state.game_won() {
            return;
        }
        let cols = state.cols() as usize;
        let index = state.cursor();
        let col = (index % cols) as u16;
        let row = (index / cols) as u16;
        let px = start_x + 1 + col * self.tile_w;
        let py = start_y + 1 + row * self.tile_h + self.tile_h / 2;

        // Brackets take the tile's own background so the cursor does not
        // punch holes into a face-up tile.
        let bg = match state.tile_status(index) {
            TileStatus::Flipped => Rgb::new(48, 72, 89),
            _ => Rgb::new(30, 30, 40),
        };
        let marker = CellStyle {
            fg: Rgb::new(240, 200, 80),
            bg,
            bold: true,
            ..CellStyle::default()
        };
        fb.put_char(px, py, '[', marker);
        fb.put_char(px + self.tile_w - 1, py, ']', marker);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x + frame_w + 2;
        if panel_x + 10 > viewport.width {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "TIME", label);
        put_clock(fb, panel_x, y + 1, state.elapsed_seconds(), value);
        y += 3;

        fb.put_str(panel_x, y, "MOVES", label);
        fb.put_u32(panel_x, y + 1, state.move_count(), value);
        y += 3;

        fb.put_str(panel_x, y, "PAIRS", label);
        let w = fb.put_u32(panel_x, y + 1, state.matched_pairs() as u32, value);
        fb.put_char(panel_x + w, y + 1, '/', value);
        fb.put_u32(panel_x + w + 1, y + 1, (state.deck().len() / 2) as u32, value);
        y += 3;

        if state.player_count() > 1 {
            fb.put_str(panel_x, y, "SCORE", label);
            y += 1;
            let accent = CellStyle {
                fg: Rgb::new(240, 200, 80),
                bold: true,
                ..CellStyle::default()
            };
            for (i, score) in state.scores().iter().enumerate() {
                let current = i == state.turn();
                let style = if current { accent } else { value };
                if current {
                    fb.put_char(panel_x, y, '>', accent);
                }
                fb.put_char(panel_x + 2, y, 'P', style);
                fb.put_u32(panel_x + 3, y, (i + 1) as u32, style);
                fb.put_u32(panel_x + 6, y, *score, style);
                y += 1;
            }
        }
    }

    fn draw_footer(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        if viewport.height < 2 {
            return;
        }
        let hint = CellStyle {
            fg: Rgb::new(120, 120, 130),
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str_centered(
            0,
            viewport.width,
            viewport.height - 1,
            "arrows move   space flip   r restart   n new game   q quit",
            hint,
        );
    }

    fn draw_win_overlay(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let secs = state.elapsed_seconds();
        let players = state.player_count();
        let winners = state.top_scorers();

        // Interior width must fit the widest line.
        let mut interior: u16 = if players == 1 {
            let time_w = 5 + clock_width(secs);
            let moves_w = 6 + u32_width(state.move_count());
            11u16.max(time_w).max(moves_w)
        } else if winners.len() > 1 {
            11
        } else {
            14
        };
        interior += 4;

        let stat_rows = if players == 1 { 2 } else { players as u16 };
        let box_w = interior + 2;
        let box_h = stat_rows + 5;
        let box_x = start_x + frame_w.saturating_sub(box_w) / 2;
        let box_y = start_y + frame_h.saturating_sub(box_h) / 2;

        let backdrop = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(20, 24, 30),
            ..CellStyle::default()
        };
        fb.fill_rect(box_x, box_y, box_w, box_h, ' ', backdrop);
        let border = CellStyle {
            fg: Rgb::new(240, 200, 80),
            bg: Rgb::new(20, 24, 30),
            ..CellStyle::default()
        };
        self.draw_border(fb, box_x, box_y, box_w, box_h, border);

        let title = CellStyle {
            fg: Rgb::new(240, 200, 80),
            bg: Rgb::new(20, 24, 30),
            bold: true,
            ..CellStyle::default()
        };
        let text = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(20, 24, 30),
            ..CellStyle::default()
        };

        let ix = box_x + 1;
        let mut ly = box_y + 2;

        if players == 1 {
            fb.put_str_centered(ix, interior, ly, "YOU DID IT!", title);
            ly += 2;

            let time_w = 5 + clock_width(secs);
            let tx = ix + interior.saturating_sub(time_w) / 2;
            fb.put_str(tx, ly, "TIME ", text);
            put_clock(fb, tx + 5, ly, secs, text);
            ly += 1;

            let moves_w = 6 + u32_width(state.move_count());
            let mx = ix + interior.saturating_sub(moves_w) / 2;
            fb.put_str(mx, ly, "MOVES ", text);
            fb.put_u32(mx + 6, ly, state.move_count(), text);
        } else {
            if winners.len() > 1 {
                fb.put_str_centered(ix, interior, ly, "IT'S A TIE!", title);
            } else {
                let player = winners[0] as u32;
                let line_w = 13 + u32_width(player);
                let tx = ix + interior.saturating_sub(line_w) / 2;
                fb.put_str(tx, ly, "PLAYER ", title);
                let w = fb.put_u32(tx + 7, ly, player, title);
                fb.put_str(tx + 7 + w, ly, " WINS!", title);
            }
            ly += 2;

            for (i, score) in state.scores().iter().enumerate() {
                let won = winners.contains(&(i + 1));
                let style = if won { title } else { text };
                let row_w = 4 + u32_width(*score);
                let rx = ix + interior.saturating_sub(row_w) / 2;
                fb.put_char(rx, ly, 'P', style);
                fb.put_u32(rx + 1, ly, (i + 1) as u32, style);
                fb.put_u32(rx + 4, ly, *score, style);
                ly += 1;
            }
        }
    }
}

/// Write elapsed time as `m:ss`, minutes unpadded, seconds always two digits.
fn put_clock(fb: &mut FrameBuffer, x: u16, y: u16, total_secs: u32, style: CellStyle) {
    let secs = total_secs % 60;
    let w = fb.put_u32(x, y, total_secs / 60, style);
    fb.put_char(x + w, y, ':', style);
    fb.put_char(x + w + 1, y, (b'0' + (secs / 10) as u8) as char, style);
    fb.put_char(x + w + 2, y, (b'0' + (secs % 10) as u8) as char, style);
}

fn clock_width(total_secs: u32) -> u16 {
    u32_width(total_secs / 60) + 3
}

fn u32_width(value: u32) -> u16 {
    let mut w = 1;
    let mut n = value / 10;
    while n > 0 {
        w += 1;
        n /= 10;
    }
    w
}
