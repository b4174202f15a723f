//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame and any frame after a size change are full redraws; every
//! other frame only rewrites runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{
        KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::FrameBuffer;
use crate::screen::Surface;
use crate::types::Attr;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    keyboard_enhanced: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
            keyboard_enhanced: false,
        }
    }

    /// Raw mode, alternate screen, hidden cursor. Asks for key release events
    /// where the terminal supports it.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;

        self.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.keyboard_enhanced {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        log::debug!("terminal entered (keyboard enhancement: {})", self.keyboard_enhanced);

        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.keyboard_enhanced {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.keyboard_enhanced = false;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        log::debug!("terminal restored");
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previous one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            Some(prev) => {
                log::debug!("full redraw at {}x{}", fb.width(), fb.height());
                encode_full_into(fb, &mut self.buf)?;
                prev.clone_from(fb);
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TerminalRenderer {
    fn size(&self) -> Option<(u16, u16)> {
        terminal::size().ok()
    }

    fn flush(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.draw(fb)
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(SetBackgroundColor(Color::Black))?;

    let mut current: Option<Attr> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(i32::from(x), i32::from(y));
            if current != Some(cell.attr) {
                out.queue(SetForegroundColor(attr_to_color(cell.attr)))?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.glyph))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a diff redraw (changed runs) into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Attr> = None;
    out.queue(SetBackgroundColor(Color::Black))?;

    for_each_changed_run(prev, next, |x, y, len| {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(i32::from(x + dx), i32::from(y));
            if current != Some(cell.attr) {
                out.queue(SetForegroundColor(attr_to_color(cell.attr)))?;
                current = Some(cell.attr);
            }
            out.queue(Print(cell.glyph))?;
        }
        Ok(())
    })?;

    out.queue(ResetColor)?;
    Ok(())
}

/// Map the colour bitmask onto the 16-colour palette. The intensity bit picks
/// the bright variant.
pub fn attr_to_color(attr: Attr) -> Color {
    let bright = attr.is_intense();
    match (attr.base().bits(), bright) {
        (0, false) => Color::Black,
        (0, true) => Color::DarkGrey,
        (1, false) => Color::DarkBlue,
        (1, true) => Color::Blue,
        (2, false) => Color::DarkGreen,
        (2, true) => Color::Green,
        (3, false) => Color::DarkCyan,
        (3, true) => Color::Cyan,
        (4, false) => Color::DarkRed,
        (4, true) => Color::Red,
        (5, false) => Color::DarkMagenta,
        (5, true) => Color::Magenta,
        (6, false) => Color::DarkYellow,
        (6, true) => Color::Yellow,
        (_, false) => Color::Grey,
        (_, true) => Color::White,
    }
}

fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, next.width())?;
        }
        return Ok(());
    }

    let w = next.width();
    let row = w as usize;

    for (y, (a_row, b_row)) in prev
        .cells()
        .chunks(row.max(1))
        .zip(next.cells().chunks(row.max(1)))
        .enumerate()
    {
        let mut x = 0usize;
        while x < row {
            if a_row[x] == b_row[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < row && a_row[x] != b_row[x] {
                x += 1;
            }
            f(start as u16, y as u16, (x - start) as u16)?;
        }
    }

    Ok(())
}
