//! Framebuffer of attributed character cells plus the drawing primitives the
//! games render with.
//!
//! Every coordinate is clamped into the buffer, so drawing never fails and
//! never panics. Anything drawn past an edge lands on that edge, except
//! [`FrameBuffer::draw_text`] (drops overflow), [`FrameBuffer::draw_circle`]
//! and [`FrameBuffer::draw_sprite`] (skip cells outside the buffer).

use crate::core::GlyphMask;
use crate::types::Attr;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub attr: Attr,
}

impl Cell {
    pub const BLANK: Cell = Cell {
        glyph: ' ',
        attr: Attr::NONE,
    };

    pub const fn new(glyph: char, attr: Attr) -> Self {
        Self { glyph, attr }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::BLANK
    }
}

/// 2D framebuffer of attributed character cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reallocate to `width × height` and clear.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.clear();
        self.cells.resize(len, Cell::BLANK);
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn clamp_x(&self, x: i32) -> i32 {
        x.min(i32::from(self.width) - 1).max(0)
    }

    pub fn clamp_y(&self, y: i32) -> i32 {
        y.min(i32::from(self.height) - 1).max(0)
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if self.cells.is_empty() {
            return None;
        }
        let x = self.clamp_x(x) as usize;
        let y = self.clamp_y(y) as usize;
        Some(y * (self.width as usize) + x)
    }

    #[inline(always)]
    fn idx_unclamped(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Clamped read. A zero-sized buffer reads as blank.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.idx(x, y).map_or(Cell::BLANK, |i| self.cells[i])
    }

    /// Clamped write.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::BLANK);
    }

    pub fn draw_char(&mut self, x: i32, y: i32, glyph: char, attr: Attr) {
        self.set(x, y, Cell::new(glyph, attr));
    }

    /// Write `text` left to right from the clamped origin. No wrapping; glyphs
    /// past the end of the row are dropped.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, attr: Attr) {
        if self.cells.is_empty() {
            return;
        }
        let x = self.clamp_x(x);
        let y = self.clamp_y(y);
        for (cx, glyph) in (x..i32::from(self.width)).zip(text.chars()) {
            self.draw_char(cx, y, glyph, attr);
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub fn draw_box(
        &mut self,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        glyph: char,
        attr: Attr,
        filled: bool,
    ) {
        if self.cells.is_empty() {
            return;
        }
        let x = self.clamp_x(x);
        let y = self.clamp_y(y);
        let w = self.clamp_x(w);
        let h = self.clamp_y(h);

        if filled {
            for dy in 0..h {
                for dx in 0..w {
                    self.draw_char(x + dx, y + dy, glyph, attr);
                }
            }
            return;
        }

        if w == 0 || h == 0 {
            return;
        }
        for dx in 0..w {
            self.draw_char(x + dx, y, glyph, attr);
            self.draw_char(x + dx, y + h - 1, glyph, attr);
        }
        for dy in 0..h {
            self.draw_char(x, y + dy, glyph, attr);
            self.draw_char(x + w - 1, y + dy, glyph, attr);
        }
    }

    /// Filled circle, squashed vertically to compensate for tall cells.
    ///
    /// Only the part of the bounding box that lies on the buffer is visited.
    pub fn draw_circle(&mut self, cx: i32, cy: i32, r: i32, glyph: char, attr: Attr) {
        if self.cells.is_empty() || r < 0 {
            return;
        }
        let cx = i64::from(self.clamp_x(cx));
        let cy = i64::from(self.clamp_y(cy));
        let r = i64::from(r);
        let r2 = r * r;
        let (w, h) = (i64::from(self.width), i64::from(self.height));

        // dx² + (2dy)² <= r² bounds |dx| by r and |dy| by r / 2.
        let (x_lo, x_hi) = ((cx - r).max(0), (cx + r).min(w - 1));
        let (y_lo, y_hi) = ((cy - r / 2).max(0), (cy + r / 2).min(h - 1));
        for y in y_lo..=y_hi {
            let dy2 = 4 * (y - cy) * (y - cy);
            for x in x_lo..=x_hi {
                if (x - cx) * (x - cx) + dy2 <= r2 {
                    self.cells[(y * w + x) as usize] = Cell::new(glyph, attr);
                }
            }
        }
    }

    /// Integer midpoint line, both endpoints included. Every point goes
    /// through the clamp, so a line running off the buffer continues along
    /// the edge it crossed.
    pub fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, glyph: char, attr: Attr) {
        if self.cells.is_empty() {
            return;
        }
        let (x0, y0) = (i64::from(x0), i64::from(y0));
        let (dx, dy) = (i64::from(x1) - x0, i64::from(y1) - y0);
        let cell = Cell::new(glyph, attr);
        if dx.abs() >= dy.abs() {
            self.line_along_major(x0, y0, dx, dy, false, cell);
        } else {
            self.line_along_major(y0, x0, dy, dx, true, cell);
        }
    }

    /// Walk a line one step per major-axis unit. `transposed` means the major
    /// axis is y. Stretches off the buffer along the major axis collapse onto
    /// the edge, so the work is bounded by the buffer size.
    fn line_along_major(
        &mut self,
        a0: i64,
        b0: i64,
        da: i64,
        db: i64,
        transposed: bool,
        cell: Cell,
    ) {
        // Always walk towards increasing major coordinate.
        let (a0, b0, da, db) = if da < 0 {
            (a0 + da, b0 + db, -da, -db)
        } else {
            (a0, b0, da, db)
        };
        let extent = i64::from(if transposed { self.height } else { self.width });
        let minor_at = |k: i64| -> i64 {
            if da == 0 {
                return b0;
            }
            let num = 2 * i128::from(k) * i128::from(db.abs()) + i128::from(da);
            let step = (num / (2 * i128::from(da))) as i64;
            b0 + db.signum() * step
        };

        // First and last step whose major coordinate is on the buffer.
        let first_in = (-a0).clamp(0, da + 1);
        let last_in = (extent - 1 - a0).clamp(-1, da);

        if first_in > 0 {
            self.line_edge_run(0, minor_at(0), minor_at(first_in - 1), transposed, cell);
        }
        for k in first_in..=last_in {
            self.line_plot(a0 + k, minor_at(k), transposed, cell);
        }
        if last_in < da {
            let from = (last_in + 1).max(0);
            self.line_edge_run(extent - 1, minor_at(from), minor_at(da), transposed, cell);
        }
    }

    /// Minor coordinates change by at most one per step, so an off-buffer
    /// stretch covers every minor value between its ends.
    fn line_edge_run(&mut self, major: i64, from: i64, to: i64, transposed: bool, cell: Cell) {
        let extent = i64::from(if transposed { self.width } else { self.height });
        let lo = from.min(to).clamp(0, extent - 1);
        let hi = from.max(to).clamp(0, extent - 1);
        for b in lo..=hi {
            self.line_plot(major, b, transposed, cell);
        }
    }

    fn line_plot(&mut self, major: i64, minor: i64, transposed: bool, cell: Cell) {
        let (x, y) = if transposed { (minor, major) } else { (major, minor) };
        let x = x.clamp(0, i64::from(self.width) - 1);
        let y = y.clamp(0, i64::from(self.height) - 1);
        self.cells[(y * i64::from(self.width) + x) as usize] = cell;
    }

    /// Stamp `glyph` wherever the row-major `mask` is set.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_object(
        &mut self,
        mask: &[bool],
        w: i32,
        h: i32,
        x: i32,
        y: i32,
        glyph: char,
        attr: Attr,
    ) {
        if self.cells.is_empty() || w <= 0 || h <= 0 {
            return;
        }
        let x = self.clamp_x(x);
        let y = self.clamp_y(y);
        let cols = w as usize;
        let cells = (w as usize).saturating_mul(h as usize);
        for (i, _) in mask.iter().take(cells).enumerate().filter(|(_, set)| **set) {
            let (dx, dy) = ((i % cols) as i32, (i / cols) as i32);
            self.draw_char(x.saturating_add(dx), y.saturating_add(dy), glyph, attr);
        }
    }

    /// Stamp each opaque glyph of `mask` at its own glyph, cropped to the buffer.
    pub fn draw_sprite(&mut self, mask: &GlyphMask, x: i32, y: i32, attr: Attr) {
        for (dx, dy, glyph) in mask.opaque_cells() {
            let (cx, cy) = (i64::from(x) + dx as i64, i64::from(y) + dy as i64);
            if let Some(i) = self.idx_unclamped(cx, cy) {
                self.cells[i] = Cell::new(glyph, attr);
            }
        }
    }

    /// Render each row as a string. Handy for snapshot-style assertions.
    pub fn row_string(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|c| c.glyph)
            .collect()
    }
}
