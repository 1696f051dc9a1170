//! MenuView: renders the settings screen onto a [`FrameBuffer`].
//!
//! Three rows (theme, grid, players) with the selected row highlighted and
//! bracketed by `<` `>` to show that left/right cycles its value.

use crate::core::{MenuRow, SettingsMenu};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::game_view::Viewport;

#[derive(Default)]
pub struct MenuView;

impl MenuView {
    /// Render into a fresh framebuffer. Convenience for tests.
    pub fn render(&self, menu: &SettingsMenu, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, viewport, &mut fb);
        fb
    }

    pub fn render_into(&self, menu: &SettingsMenu, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let bw: u16 = 26;
        let bh: u16 = 7;
        let bx = viewport.width.saturating_sub(bw) / 2;
        let by = viewport.height.saturating_sub(bh) / 2;

        let title = CellStyle {
            fg: Rgb::new(240, 200, 80),
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str_centered(bx, bw, by, "P A I R S", title);

        let draft = menu.settings();
        let rows = [
            (MenuRow::Theme, "THEME"),
            (MenuRow::Grid, "GRID"),
            (MenuRow::Players, "PLAYERS"),
        ];
        for (i, (row, label)) in rows.iter().enumerate() {
            let y = by + 2 + 2 * i as u16;
            let selected = menu.row() == *row;
            let style = if selected {
                CellStyle {
                    fg: Rgb::new(240, 200, 80),
                    bold: true,
                    ..CellStyle::default()
                }
            } else {
                CellStyle {
                    fg: Rgb::new(200, 200, 200),
                    ..CellStyle::default()
                }
            };

            if selected {
                fb.put_char(bx, y, '>', style);
            }
            fb.put_str(bx + 2, y, label, style);

            let vx = bx + 14;
            let vw = match row {
                MenuRow::Theme => {
                    let name = draft.theme.as_str();
                    fb.put_str(vx, y, name, style);
                    name.chars().count() as u16
                }
                MenuRow::Grid => {
                    let w = fb.put_u32(vx, y, draft.grid.rows as u32, style);
                    fb.put_str(vx + w, y, " x ", style);
                    w + 3 + fb.put_u32(vx + w + 3, y, draft.grid.cols as u32, style)
                }
                MenuRow::Players => fb.put_u32(vx, y, draft.player_count as u32, style),
            };
            if selected {
                fb.put_char(vx - 2, y, '<', style);
                fb.put_char(vx + vw + 1, y, '>', style);
            }
        }

        if viewport.height >= 2 {
            let hint = CellStyle {
                fg: Rgb::new(120, 120, 130),
                dim: true,
                ..CellStyle::default()
            };
            fb.put_str_centered(
                0,
                viewport.width,
                viewport.height - 1,
                "arrows adjust   enter start   q quit",
                hint,
            );
        }
    }
}
