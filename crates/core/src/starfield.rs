//! Scrolling background stars for the shooter.

use rand::Rng;

use crate::types::{FieldConfig, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub pos: Position,
    /// Columns per tick, 1..=3.
    pub speed: i32,
}

impl Star {
    /// Faster stars look brighter.
    pub fn glyph(&self) -> char {
        match self.speed {
            1 => '.',
            2 => '+',
            _ => '*',
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(count: usize, field: FieldConfig, rng: &mut impl Rng) -> Self {
        let stars = (0..count)
            .map(|_| Star {
                pos: random_cell(field, rng),
                speed: 1,
            })
            .collect();
        Self { stars }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Scroll left; stars leaving the left edge wrap to the right edge on a
    /// random row with a new speed.
    pub fn scroll(&mut self, field: FieldConfig, rng: &mut impl Rng) {
        for star in &mut self.stars {
            star.pos.x -= star.speed;
            if star.pos.x < 0 {
                star.pos.x = field.width - 1;
                star.pos.y = rng.gen_range(0..field.height.max(1));
                star.speed = rng.gen_range(1..=3);
            }
        }
    }
}

fn random_cell(field: FieldConfig, rng: &mut impl Rng) -> Position {
    Position::new(
        rng.gen_range(0..field.width.max(1)),
        rng.gen_range(0..field.height.max(1)),
    )
}
