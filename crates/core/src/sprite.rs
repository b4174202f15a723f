//! Glyph masks and sprites
//!
//! A glyph mask is a rectangular grid of characters used both as an entity's
//! visual shape and as its hit box. Spaces are transparent.
//!
//! Masks can be loaded from plain-text asset files (one row per line). A
//! failed load leaves the sprite's shape unchanged; callers must treat a
//! freshly built sprite as possibly blank.

use std::fs;
use std::io;
use std::path::Path;
use std::rc::Rc;

use log::debug;

use crate::types::{Attr, Position, Rect};

/// The transparent glyph.
pub const BLANK: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlyphMask {
    width: usize,
    height: usize,
    glyphs: Vec<char>,
}

impl GlyphMask {
    /// A fully transparent mask.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            glyphs: vec![BLANK; width * height],
        }
    }

    /// A mask with every cell set to `glyph`.
    pub fn filled(width: usize, height: usize, glyph: char) -> Self {
        Self {
            width,
            height,
            glyphs: vec![glyph; width * height],
        }
    }

    /// Build from text rows. Rows are padded with spaces to the longest one;
    /// a trailing `\r` (CRLF files) is stripped.
    pub fn parse(text: &str) -> Self {
        let rows: Vec<&str> = text
            .lines()
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

        let mut mask = Self::new(width, rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                mask.set(x, y, ch);
            }
        }
        mask
    }

    /// Load a mask from a plain-text asset file.
    ///
    /// An empty file is reported as `InvalidData`.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let mask = Self::parse(&text);
        if mask.height == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("empty glyph file: {}", path.as_ref().display()),
            ));
        }
        Ok(mask)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at `(x, y)`; out-of-range reads are transparent.
    pub fn get(&self, x: usize, y: usize) -> char {
        if x >= self.width || y >= self.height {
            return BLANK;
        }
        self.glyphs[y * self.width + x]
    }

    /// Out-of-range writes are ignored.
    pub fn set(&mut self, x: usize, y: usize, glyph: char) {
        if x < self.width && y < self.height {
            self.glyphs[y * self.width + x] = glyph;
        }
    }

    /// True when every cell is transparent (or the mask is empty).
    pub fn is_blank(&self) -> bool {
        self.glyphs.iter().all(|&g| g == BLANK)
    }

    /// Occupied cells as `(x, y, glyph)`, row-major.
    pub fn opaque_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.glyphs.iter().enumerate().filter_map(move |(i, &g)| {
            (g != BLANK).then(|| (i % self.width, i / self.width, g))
        })
    }
}

/// A positioned, coloured glyph mask.
///
/// The mask is shared: bullets fired from the same source reuse one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    mask: Rc<GlyphMask>,
    attr: Attr,
}

impl Sprite {
    pub fn new(mask: Rc<GlyphMask>, attr: Attr) -> Self {
        Self { mask, attr }
    }

    /// A sprite with no shape yet.
    pub fn blank(attr: Attr) -> Self {
        Self::new(Rc::new(GlyphMask::default()), attr)
    }

    pub fn mask(&self) -> &GlyphMask {
        &self.mask
    }

    pub fn attr(&self) -> Attr {
        self.attr
    }

    pub fn width(&self) -> i32 {
        self.mask.width() as i32
    }

    pub fn height(&self) -> i32 {
        self.mask.height() as i32
    }

    /// Hit box of this sprite placed at `pos`.
    pub fn rect_at(&self, pos: Position) -> Rect {
        Rect::at(pos, self.width(), self.height())
    }

    /// Replace the shape from a text file. Failure is a silent no-op.
    pub fn load_from_text(&mut self, path: impl AsRef<Path>) -> bool {
        match GlyphMask::load(path.as_ref()) {
            Ok(mask) => {
                self.mask = Rc::new(mask);
                true
            }
            Err(e) => {
                debug!("sprite {} not loaded: {}", path.as_ref().display(), e);
                false
            }
        }
    }
}
