//! TerminalRenderer: flushes a scorecard framebuffer to a real terminal.
//!
//! The scorecard changes only on input, so every draw is a full redraw and
//! unchanged frames are skipped entirely.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb` unless it is identical to the last frame drawn.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        if self.last.as_ref() == Some(fb) {
            return Ok(());
        }

        self.buf.clear();
        encode_into(fb, &mut self.buf)?;
        self.flush_buf()?;

        match self.last.as_mut() {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full redraw of `fb` as terminal commands into `out`.
pub fn encode_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut current: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(style.fg))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::style::Color;

    #[test]
    fn encodes_every_cell() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.put_str(0, 0, "X/-", CellStyle::fg(Color::Yellow));
        fb.put_str(0, 1, "167", CellStyle::default());

        let mut out = Vec::new();
        encode_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        assert!(text.contains("X/-"));
        assert!(text.contains("167"));
    }

    #[test]
    fn style_runs_are_not_repeated() {
        let mut fb = FrameBuffer::new(4, 1);
        fb.put_str(0, 0, "abcd", CellStyle::default());

        let mut out = Vec::new();
        encode_into(&fb, &mut out).unwrap();
        let text = String::from_utf8_lossy(&out);

        // One style change for the whole run keeps the characters contiguous.
        assert!(text.contains("abcd"));
    }
}
