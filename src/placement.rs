use std::collections::HashSet;

use rand::Rng;

use crate::config::GridSize;
use crate::snake::Position;

/// Picks a uniformly random unoccupied cell, or `None` when the board has
/// no free cell left.
///
/// A full board is an expected condition here, not an error: callers skip
/// the placement and the win check picks the situation up.
///
/// Free cells are enumerated in row-major order, one RNG draw per call, so
/// a seeded RNG yields a reproducible placement sequence.
#[must_use]
pub fn place_random_cell<R: Rng + ?Sized>(
    size: GridSize,
    occupied: &HashSet<Position>,
    rng: &mut R,
) -> Option<Position> {
    let mut candidates = Vec::with_capacity(size.total_cells().saturating_sub(occupied.len()));

    for y in 0..i32::from(size.rows) {
        for x in 0..i32::from(size.cols) {
            let position = Position { x, y };
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
