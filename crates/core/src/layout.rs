//! Brick layouts built once per round.
//!
//! Iteration order of the returned vector is also the collision tie-break
//! order: row-major for the grid, increasing angle for the ring. Every built
//! brick lies inside the field; a layout too big for it is cut down.

use crate::entities::Brick;
use crate::types::{FieldConfig, Position, Rect};

/// Which arrangement a round starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrickLayout {
    /// `rows x cols` block of 1x1 bricks, centred horizontally, starting at row 2.
    Grid { rows: i32, cols: i32 },
    /// `count` 1x1 bricks on a circle of `radius` around `(width / 2, 5)`.
    Ring { count: i32, radius: i32 },
}

impl Default for BrickLayout {
    fn default() -> Self {
        BrickLayout::Grid { rows: 13, cols: 50 }
    }
}

impl BrickLayout {
    pub fn ring() -> Self {
        BrickLayout::Ring {
            count: 60,
            radius: 5,
        }
    }

    pub fn build(self, field: FieldConfig) -> Vec<Brick> {
        let mut bricks = match self {
            BrickLayout::Grid { rows, cols } => grid(rows, cols, field),
            BrickLayout::Ring { count, radius } => {
                ring(count, radius, Position::new(field.width / 2, 5))
            }
        };
        bricks.retain(|b| fits(b.rect(), field));
        bricks
    }
}

fn fits(rect: Rect, field: FieldConfig) -> bool {
    rect.left() >= 0
        && rect.top() >= 0
        && rect.right() <= field.width
        && rect.bottom() <= field.height
}

/// Columns beyond the field width and rows below the floor are dropped.
pub fn grid(rows: i32, cols: i32, field: FieldConfig) -> Vec<Brick> {
    const BRICK_W: i32 = 1;
    const BRICK_H: i32 = 1;
    const TOP: i32 = 2;

    let cols = cols.min(field.width / BRICK_W);
    let rows = rows.min((field.height - TOP) / BRICK_H);
    let left = (field.width - cols) / 2;
    let mut bricks = Vec::with_capacity((rows.max(0) * cols.max(0)) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = col * BRICK_W + left;
            let y = row * BRICK_H + TOP;
            bricks.push(Brick::new(x, y, BRICK_W, BRICK_H));
        }
    }
    bricks
}

pub fn ring(count: i32, radius: i32, center: Position) -> Vec<Brick> {
    (0..count.max(0))
        .map(|i| {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            let x = (center.x as f32 + radius as f32 * angle.cos()) as i32;
            let y = (center.y as f32 + radius as f32 * angle.sin()) as i32;
            Brick::new(x, y, 1, 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_13_by_50_has_650_unit_bricks_centered() {
        let field = FieldConfig::new(120, 30);
        let bricks = grid(13, 50, field);
        assert_eq!(bricks.len(), 650);
        assert!(bricks.iter().all(|b| b.width() == 1 && b.height() == 1));

        let min_x = bricks.iter().map(|b| b.position().x).min().unwrap();
        let max_x = bricks.iter().map(|b| b.rect().right()).max().unwrap();
        assert_eq!(min_x, 35);
        assert_eq!(field.width - max_x, min_x);

        let min_y = bricks.iter().map(|b| b.position().y).min().unwrap();
        let max_y = bricks.iter().map(|b| b.position().y).max().unwrap();
        assert_eq!((min_y, max_y), (2, 14));
    }

    #[test]
    fn grid_is_row_major() {
        let bricks = grid(2, 3, FieldConfig::new(10, 10));
        let coords: Vec<_> = bricks
            .iter()
            .map(|b| (b.position().x, b.position().y))
            .collect();
        assert_eq!(coords, vec![(3, 2), (4, 2), (5, 2), (3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn ring_stays_within_radius() {
        let center = Position::new(60, 5);
        let bricks = ring(60, 5, center);
        assert_eq!(bricks.len(), 60);
        for b in &bricks {
            let p = b.position();
            assert!((p.x - center.x).abs() <= 5);
            assert!((p.y - center.y).abs() <= 5);
        }
        // Angle zero lands straight right of the centre.
        assert_eq!(bricks[0].position(), Position::new(65, 5));
    }

    #[test]
    fn narrow_field_clips_the_grid() {
        let field = FieldConfig::new(20, 30);
        let bricks = BrickLayout::default().build(field);
        assert_eq!(bricks.len(), 13 * 20);
        assert_eq!(bricks[0].position(), Position::new(0, 2));

        let short = FieldConfig::new(120, 6);
        assert_eq!(grid(13, 50, short).len(), 4 * 50);
    }

    #[test]
    fn every_layout_fits_every_field() {
        for width in [20, 35, 51, 52, 120, 1000] {
            for height in [10, 11, 30, 500] {
                let field = FieldConfig::new(width, height);
                for layout in [BrickLayout::default(), BrickLayout::ring()] {
                    let bricks = layout.build(field);
                    assert!(!bricks.is_empty(), "{layout:?} at {width}x{height}");
                    for b in &bricks {
                        assert!(fits(b.rect(), field), "{:?} at {width}x{height}", b.rect());
                    }
                }
            }
        }
    }

    #[test]
    fn default_layout_is_the_grid() {
        let bricks = BrickLayout::default().build(FieldConfig::breakout());
        assert_eq!(bricks.len(), 650);
    }
}
