//! Random board generation.

use crate::core::{Board, CellState, Coordinate, LifeRng};

/// A random board with coordinates in `[0, max_x] × [0, max_y]`.
///
/// Places `max_x * max_y / load_factor` cells; collisions collapse, so the
/// population can come out slightly lower. Every cell is `Stable`.
/// A zero `load_factor` is treated as 1.
#[must_use]
pub fn random_board(max_x: u32, max_y: u32, load_factor: u32, rng: &mut LifeRng) -> Board {
    let count = draw_count(max_x, max_y, load_factor);
    let x_end = upper_bound(max_x);
    let y_end = upper_bound(max_y);

    (0..count)
        .map(|_| Coordinate::new(rng.gen_range(0..x_end), rng.gen_range(0..y_end)))
        .map(|c| (c, CellState::Stable))
        .collect()
}

/// How many coordinates [`random_board`] draws before duplicates collapse.
#[must_use]
pub fn draw_count(max_x: u32, max_y: u32, load_factor: u32) -> u64 {
    u64::from(max_x) * u64::from(max_y) / u64::from(load_factor.max(1))
}

/// Exclusive upper bound for an inclusive maximum, kept inside `i32`.
fn upper_bound(max: u32) -> i32 {
    i32::try_from(max).map_or(i32::MAX, |m| m.saturating_add(1))
}
