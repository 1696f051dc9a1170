//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are encoded into an internal byte queue first and written to stdout
//! in one burst. After the first frame only changed cell spans are repainted;
//! [`TerminalRenderer::invalidate`] forces the next frame back to a full
//! clear-and-repaint (needed after a terminal resize, where stale cells may
//! sit outside the next diff).

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    prev: Option<FrameBuffer>,
    /// Whether `prev` reflects what is actually on screen.
    has_frame: bool,
    queue: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            prev: None,
            has_frame: false,
            queue: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.queue.clear();
        self.queue.queue(terminal::EnterAlternateScreen)?;
        self.queue.queue(cursor::Hide)?;
        self.queue.queue(terminal::DisableLineWrap)?;
        self.flush_queue()?;
        self.has_frame = false;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.queue.clear();
        self.queue.queue(ResetColor)?;
        self.queue.queue(SetAttribute(Attribute::Reset))?;
        self.queue.queue(terminal::EnableLineWrap)?;
        self.queue.queue(cursor::Show)?;
        self.queue.queue(terminal::LeaveAlternateScreen)?;
        self.flush_queue()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next frame to be a full clear-and-repaint.
    pub fn invalidate(&mut self) {
        self.has_frame = false;
    }

    /// Present a frame, swapping it into internal state.
    ///
    /// Callers keep a single `FrameBuffer` and pass it in every frame; the
    /// renderer diffs against the previous frame and swaps buffers so no
    /// frame is ever cloned.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let mut prev = match self.prev.take() {
            Some(prev) => prev,
            None => FrameBuffer::new(fb.width(), fb.height()),
        };

        let same_size = prev.width() == fb.width() && prev.height() == fb.height();

        self.queue.clear();
        if self.has_frame && same_size {
            encode_changed(&prev, fb, &mut self.queue)?;
        } else {
            encode_full(fb, &mut self.queue)?;
            prev.resize(fb.width(), fb.height());
        }
        self.flush_queue()?;

        std::mem::swap(&mut prev, fb);
        self.prev = Some(prev);
        self.has_frame = true;
        Ok(())
    }

    fn flush_queue(&mut self) -> Result<()> {
        self.stdout.write_all(&self.queue)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks the style the terminal is currently set to, so runs of same-styled
/// cells cost one SGR sequence instead of one per cell.
#[derive(Default)]
struct StylePen {
    applied: Option<CellStyle>,
}

impl StylePen {
    fn emit(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        if self.applied != Some(cell.style) {
            out.queue(SetAttribute(Attribute::Reset))?;
            out.queue(SetForegroundColor(to_color(cell.style.fg)))?;
            out.queue(SetBackgroundColor(to_color(cell.style.bg)))?;
            if cell.style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if cell.style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.applied = Some(cell.style);
        }
        out.queue(Print(cell.ch))?;
        Ok(())
    }
}

/// Encode a full clear-and-repaint into `out`.
pub fn encode_full(next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = StylePen::default();
    for y in 0..next.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for &cell in next.row(y) {
            pen.emit(out, cell)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Encode only the cell spans that differ between two equally sized frames.
///
/// Emits nothing at all when the frames are identical.
pub fn encode_changed(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = StylePen::default();
    let mut wrote_any = false;

    for y in 0..next.height() {
        let before = prev.row(y);
        let after = next.row(y);

        let mut from = 0;
        while let Some((start, end)) = next_changed_span(before, after, from) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for &cell in &after[start..end] {
                pen.emit(out, cell)?;
            }
            wrote_any = true;
            from = end;
        }
    }

    if wrote_any {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Find the next `[start, end)` span where the rows differ, scanning from
/// `from`. Adjacent changed cells coalesce into one span.
fn next_changed_span(before: &[Cell], after: &[Cell], from: usize) -> Option<(usize, usize)> {
    let len = before.len().min(after.len());

    let mut start = from;
    while start < len && before[start] == after[start] {
        start += 1;
    }
    if start >= len {
        return None;
    }

    let mut end = start + 1;
    while end < len && before[end] != after[end] {
        end += 1;
    }
    Some((start, end))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
