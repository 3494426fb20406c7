//! TerminalRenderer: presents framebuffers on a terminal.
//!
//! The renderer keeps a copy of the last frame it presented. A new frame is
//! compared row by row against that copy and only the differing spans are
//! rewritten. Spans separated by a short run of unchanged cells are merged,
//! since one cursor move costs about as much as reprinting a few cells. The
//! first frame, a size change or [`TerminalRenderer::invalidate`] repaints
//! everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Unchanged cells allowed inside one rewritten span.
const MERGE_GAP: usize = 3;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    /// What the terminal currently shows, if known.
    front: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer writing escape sequences to `out`.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            front: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf
            .queue(terminal::EnterAlternateScreen)?
            .queue(cursor::Hide)?
            .queue(terminal::DisableLineWrap)?;
        self.flush()
    }

    /// Restore the terminal. Safe to call after a partial `enter`.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf
            .queue(SetAttribute(Attribute::Reset))?
            .queue(ResetColor)?
            .queue(terminal::EnableLineWrap)?
            .queue(cursor::Show)?
            .queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        self.front = None;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what the terminal shows; the next frame repaints everything.
    pub fn invalidate(&mut self) {
        self.front = None;
    }

    /// Bring the terminal up to date with `frame`.
    ///
    /// Returns the number of cells written; an unchanged frame writes nothing.
    pub fn present(&mut self, frame: &FrameBuffer) -> Result<usize> {
        let width = frame.width() as usize;
        let before = self
            .front
            .as_ref()
            .filter(|f| f.width() == frame.width() && f.height() == frame.height());

        self.buf.clear();
        if before.is_none() {
            self.buf
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut pen = Pen::default();
        let mut written = 0;
        if width > 0 {
            for (y, row) in frame.cells().chunks_exact(width).enumerate() {
                match before {
                    None => written += write_span(&mut self.buf, &mut pen, 0, y, row)?,
                    Some(front) => {
                        let old = &front.cells()[y * width..(y + 1) * width];
                        for (start, end) in dirty_spans(old, row) {
                            written +=
                                write_span(&mut self.buf, &mut pen, start, y, &row[start..end])?;
                        }
                    }
                }
            }
        }
        pen.finish(&mut self.buf)?;

        if !self.buf.is_empty() {
            self.flush()?;
        }
        self.front
            .get_or_insert_with(|| FrameBuffer::new(0, 0))
            .copy_from(frame);
        Ok(written)
    }

    fn flush(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Tracks the style the terminal is drawing with so only differences go out.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn switch(&mut self, buf: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let attrs_changed = self
            .current
            .map_or(true, |c| (c.bold, c.dim) != (style.bold, style.dim));
        if attrs_changed {
            // SGR reset also drops colors; they are re-sent below.
            buf.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                buf.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                buf.queue(SetAttribute(Attribute::Dim))?;
            }
        }

        let colors_changed = self
            .current
            .map_or(true, |c| (c.fg, c.bg) != (style.fg, style.bg));
        if attrs_changed || colors_changed {
            buf.queue(SetColors(Colors::new(color(style.fg), color(style.bg))))?;
        }

        self.current = Some(style);
        Ok(())
    }

    /// Leave the terminal in its default style if anything was drawn.
    fn finish(&mut self, buf: &mut Vec<u8>) -> Result<()> {
        if self.current.take().is_some() {
            buf.queue(SetAttribute(Attribute::Reset))?.queue(ResetColor)?;
        }
        Ok(())
    }
}

fn write_span(
    buf: &mut Vec<u8>,
    pen: &mut Pen,
    x: usize,
    y: usize,
    cells: &[Cell],
) -> Result<usize> {
    buf.queue(cursor::MoveTo(x as u16, y as u16))?;
    for cell in cells {
        pen.switch(buf, cell.style)?;
        buf.queue(Print(cell.ch))?;
    }
    Ok(cells.len())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Half-open column ranges where `after` differs from `before`. Gaps of up
/// to [`MERGE_GAP`] unchanged cells are folded into the surrounding span.
fn dirty_spans<'a>(
    before: &'a [Cell],
    after: &'a [Cell],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let len = before.len().min(after.len());
    let differs = move |i: usize| before[i] != after[i];
    let mut x = 0;

    std::iter::from_fn(move || {
        let start = (x..len).find(|&i| differs(i))?;
        let mut end = start + 1;
        let mut i = end;
        while i < len {
            if differs(i) {
                end = i + 1;
            } else if i + 1 - end > MERGE_GAP {
                break;
            }
            i += 1;
        }
        x = end;
        Some((start, end))
    })
}
