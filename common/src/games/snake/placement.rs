use std::collections::HashSet;

use crate::games::RandomSource;
use super::entity::Snake;
use super::types::{FieldSize, Point};

/// Picks a free cell for food, or `None` when the snake fills the field.
///
/// Free cells are enumerated row-major and one is chosen by
/// `floor(r * count)`, so a source pinned to `0.0` always yields the first
/// free cell.
pub fn place_food<R>(snake: &Snake, field_size: &FieldSize, rng: &mut R) -> Option<Point>
where
    R: RandomSource + ?Sized,
{
    let occupied: HashSet<Point> = snake.segments().copied().collect();
    let candidates: Vec<Point> = field_size
        .cells()
        .filter(|cell| !occupied.contains(cell))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    let index = (rng.next_unit() * candidates.len() as f64).floor() as usize;
    candidates.get(index.min(candidates.len() - 1)).copied()
}
