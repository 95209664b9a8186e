//! ScorecardView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, one column per frame:
//!
//! ```text
//! ┌──────┬──────┬ ... ┬──────┐
//! │  1   │  2   │     │  10  │
//! ├──────┼──────┼ ... ┼──────┤
//! │ X    │ 7 /  │     │ X X X│
//! │    20│    39│     │   167│
//! └──────┴──────┴ ... ┴──────┘
//! ```
//!
//! Cumulative scores appear only once a frame's score is final.

use crossterm::style::Color;

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::FRAME_COUNT;

/// Inner width of one frame column.
pub const COLUMN_WIDTH: u16 = 6;

/// Width of the whole grid, borders included.
pub const GRID_WIDTH: u16 = (COLUMN_WIDTH + 1) * FRAME_COUNT as u16 + 1;

/// Rows used by the grid.
pub const GRID_HEIGHT: u16 = 6;

/// Rows used by the full view (grid, totals, entry, status).
pub const VIEW_HEIGHT: u16 = GRID_HEIGHT + 4;

const BORDER: CellStyle = CellStyle::fg(Color::DarkGrey);
const TEXT: CellStyle = CellStyle::fg(Color::Reset);
const CURRENT: CellStyle = CellStyle::fg(Color::Green).bold();
const STRIKE: CellStyle = CellStyle::fg(Color::Yellow).bold();
const SPARE: CellStyle = CellStyle::fg(Color::Cyan).bold();
const MISS: CellStyle = CellStyle::fg(Color::Reset).dim();
const ERROR: CellStyle = CellStyle::fg(Color::Red);
const HINT: CellStyle = CellStyle::fg(Color::DarkGrey);

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

/// Message under the entry line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// The interactive part of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt<'a> {
    pub entry: &'a str,
    pub status: Option<&'a Status>,
}

/// A scoresheet renderer for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorecardView {
    /// Center the grid horizontally in wide viewports.
    center: bool,
}

impl Default for ScorecardView {
    fn default() -> Self {
        Self { center: true }
    }
}

impl ScorecardView {
    pub fn new(center: bool) -> Self {
        Self { center }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        prompt: Option<&Prompt<'_>>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.reset(viewport.width, viewport.height);

        let x0 = if self.center {
            viewport.width.saturating_sub(GRID_WIDTH) / 2
        } else {
            0
        };

        self.draw_grid(fb, x0, 0);
        for number in 1..=FRAME_COUNT {
            self.draw_frame(fb, snap, x0, number);
        }
        self.draw_summary(fb, snap, x0, GRID_HEIGHT);

        if let Some(prompt) = prompt {
            self.draw_prompt(fb, prompt, x0, GRID_HEIGHT + 2);
        }
    }

    pub fn render(
        &self,
        snap: &GameSnapshot,
        prompt: Option<&Prompt<'_>>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, prompt, viewport, &mut fb);
        fb
    }

    /// Plain-text scorecard (grid and summary line), one string per row.
    pub fn render_text(&self, snap: &GameSnapshot) -> Vec<String> {
        let fb = self.render(snap, None, Viewport::new(GRID_WIDTH, GRID_HEIGHT + 1));
        (0..fb.height()).map(|y| fb.row_text(y)).collect()
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        let rows: [(char, char, char); 3] = [('┌', '┬', '┐'), ('├', '┼', '┤'), ('└', '┴', '┘')];
        let rule_rows = [y0, y0 + 2, y0 + GRID_HEIGHT - 1];

        for ((left, join, right), y) in rows.into_iter().zip(rule_rows) {
            for column in 0..=FRAME_COUNT as u16 {
                let x = x0 + column * (COLUMN_WIDTH + 1);
                let ch = match column {
                    0 => left,
                    c if c == FRAME_COUNT as u16 => right,
                    _ => join,
                };
                fb.put_char(x, y, ch, BORDER);
                if column < FRAME_COUNT as u16 {
                    for dx in 1..=COLUMN_WIDTH {
                        fb.put_char(x + dx, y, '─', BORDER);
                    }
                }
            }
        }

        for y in [y0 + 1, y0 + 3, y0 + 4] {
            for column in 0..=FRAME_COUNT as u16 {
                fb.put_char(x0 + column * (COLUMN_WIDTH + 1), y, '│', BORDER);
            }
        }
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, number: u8) {
        let left = x0 + (u16::from(number) - 1) * (COLUMN_WIDTH + 1) + 1;
        let is_current = !snap.is_over && snap.current_frame == Some(number);

        let label = format!("{:^width$}", number, width = COLUMN_WIDTH as usize);
        fb.put_str(left, 1, &label, if is_current { CURRENT } else { TEXT });

        let Some(frame) = snap.frame(number) else {
            return;
        };

        let mut x = left + 1;
        for ch in frame.marks.chars() {
            let style = match ch {
                'X' => STRIKE,
                '/' => SPARE,
                '-' => MISS,
                _ => TEXT,
            };
            fb.put_char(x, 3, ch, style);
            x += 1;
        }

        if let Some(score) = snap.settled_score(number) {
            let text = format!("{:>width$}", score, width = COLUMN_WIDTH as usize);
            fb.put_str(left, 4, &text, TEXT);
        }
    }

    fn draw_summary(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x0: u16, y: u16) {
        let x = fb.put_str(x0, y, &format!("Total {}", snap.total_score), TEXT.bold());

        if snap.is_over {
            fb.put_str(x + 2, y, "Game over", CURRENT);
        } else if let Some(frame) = snap.current_frame.and_then(|n| snap.frame(n)) {
            let text = format!(
                "Frame {}, {} pins standing",
                frame.frame_number, frame.pins_remaining
            );
            fb.put_str(x + 2, y, &text, HINT);
        }
    }

    fn draw_prompt(&self, fb: &mut FrameBuffer, prompt: &Prompt<'_>, x0: u16, y: u16) {
        let x = fb.put_str(x0, y, "> ", HINT);
        let x = fb.put_str(x, y, prompt.entry, TEXT);
        fb.put_char(x, y, '_', TEXT.dim());

        match prompt.status {
            Some(Status::Error(text)) => {
                fb.put_str(x0, y + 1, text, ERROR);
            }
            Some(Status::Info(text)) => {
                fb.put_str(x0, y + 1, text, HINT);
            }
            None => {
                fb.put_str(
                    x0,
                    y + 1,
                    "rolls: 0-10 x / - (comma separated)  Enter roll  Ctrl-N new game  Esc quit",
                    HINT,
                );
            }
        }
    }
}
