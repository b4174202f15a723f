//! A framebuffer bound to the surface it is presented on.

use anyhow::Result;

use crate::fb::FrameBuffer;

/// Something a finished frame can be shown on.
pub trait Surface {
    /// Current size in cells, or `None` if it cannot be determined right now.
    fn size(&self) -> Option<(u16, u16)>;

    fn flush(&mut self, fb: &FrameBuffer) -> Result<()>;
}

/// Back buffer plus the surface it is flushed to.
pub struct Screen<S: Surface> {
    fb: FrameBuffer,
    surface: S,
}

impl<S: Surface> Screen<S> {
    /// Size the buffer from the surface, falling back to `fallback` if the
    /// surface cannot report a size.
    pub fn new(surface: S, fallback: (u16, u16)) -> Self {
        let (w, h) = surface.size().unwrap_or(fallback);
        Self {
            fb: FrameBuffer::new(w, h),
            surface,
        }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn buffer_mut(&mut self) -> &mut FrameBuffer {
        &mut self.fb
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Flush the buffer. With `auto_clear` the buffer starts the next frame blank.
    pub fn present(&mut self, auto_clear: bool) -> Result<()> {
        self.surface.flush(&self.fb)?;
        if auto_clear {
            self.fb.clear();
        }
        Ok(())
    }

    /// Match the buffer to the surface. Returns true if the buffer was
    /// reallocated; a failed probe counts as no change.
    pub fn update_size_if_changed(&mut self) -> bool {
        let Some((w, h)) = self.surface.size() else {
            return false;
        };
        if (w, h) == (self.fb.width(), self.fb.height()) {
            return false;
        }
        log::debug!(
            "surface resized {}x{} -> {}x{}",
            self.fb.width(),
            self.fb.height(),
            w,
            h
        );
        self.fb.resize(w, h);
        true
    }
}

/// In-memory surface that records every presented frame.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    size: Option<(u16, u16)>,
    frames: Vec<FrameBuffer>,
}

impl MemorySurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            size: Some((width, height)),
            frames: Vec::new(),
        }
    }

    /// Change what the next size probe reports. `None` simulates a failed probe.
    pub fn set_size(&mut self, size: Option<(u16, u16)>) {
        self.size = size;
    }

    pub fn frames(&self) -> &[FrameBuffer] {
        &self.frames
    }

    pub fn last_frame(&self) -> Option<&FrameBuffer> {
        self.frames.last()
    }
}

impl Surface for MemorySurface {
    fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    fn flush(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.frames.push(fb.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;
    use crate::types::Attr;

    #[test]
    fn present_with_auto_clear_blanks_the_buffer() {
        let mut screen = Screen::new(MemorySurface::new(4, 2), (1, 1));
        screen.buffer_mut().draw_char(1, 1, '#', Attr::RED);
        screen.present(true).unwrap();

        let shown = screen.surface().last_frame().unwrap();
        assert_eq!(shown.get(1, 1), Cell::new('#', Attr::RED));
        assert!(screen.buffer().cells().iter().all(|c| *c == Cell::BLANK));
    }

    #[test]
    fn present_without_clear_keeps_the_frame() {
        let mut screen = Screen::new(MemorySurface::new(4, 2), (1, 1));
        screen.buffer_mut().draw_char(0, 0, '#', Attr::RED);
        screen.present(false).unwrap();
        assert_eq!(screen.buffer().get(0, 0).glyph, '#');
    }

    #[test]
    fn resize_probe_reallocates_on_change() {
        let mut screen = Screen::new(MemorySurface::new(4, 2), (1, 1));
        screen.buffer_mut().draw_char(0, 0, '#', Attr::RED);

        assert!(!screen.update_size_if_changed());
        assert_eq!(screen.buffer().get(0, 0).glyph, '#');

        screen.surface_mut().set_size(Some((6, 3)));
        assert!(screen.update_size_if_changed());
        assert_eq!((screen.buffer().width(), screen.buffer().height()), (6, 3));
        assert_eq!(screen.buffer().get(0, 0), Cell::BLANK);
    }

    #[test]
    fn failed_probe_is_no_change() {
        let mut screen = Screen::new(MemorySurface::new(4, 2), (1, 1));
        screen.surface_mut().set_size(None);
        assert!(!screen.update_size_if_changed());
        assert_eq!((screen.buffer().width(), screen.buffer().height()), (4, 2));
    }

    #[test]
    fn falls_back_when_surface_has_no_size() {
        let mut surface = MemorySurface::default();
        surface.set_size(None);
        let screen = Screen::new(surface, (120, 30));
        assert_eq!((screen.buffer().width(), screen.buffer().height()), (120, 30));
    }
}
