//! One tick of falling-sand physics.
//!
//! Rows are visited bottom-up so a falling particle lands in a row that has
//! already been processed. The horizontal direction alternates with
//! `(row + generation)` parity, and every left/right choice is a draw from the
//! world's seeded RNG, so piles and flows carry no directional bias while
//! staying reproducible.
//!
//! Moves only ever go into `Empty` cells. The destination of each move is
//! flagged in `moved` so a particle that lands in a row still to be visited
//! (rising gas, sideways spread) is not processed twice in the same tick.

use rand::Rng;

use super::grid::{index_of, offset_index};
use super::material::{Behaviour, Cell};
use crate::state::World;

/// Step the world forward by one generation. Returns the number of moves made.
pub fn step_world(world: &mut World) -> usize {
    world.moved.fill(false);

    let width = world.width;
    let mut moves = 0;

    for y in (0..world.height).rev() {
        let left_to_right = (y as u64).wrapping_add(world.generation) % 2 == 0;

        for i in 0..width {
            let x = if left_to_right { i } else { width - 1 - i };
            let idx = index_of(world, x, y);
            if world.moved[idx] {
                continue;
            }

            let moved = match world.cells[idx].behaviour() {
                Behaviour::Passive | Behaviour::Static => false,
                Behaviour::Powder => update_powder(world, x, y),
                Behaviour::Liquid => update_liquid(world, x, y),
                Behaviour::Gas => update_gas(world, x, y),
            };
            if moved {
                moves += 1;
            }
        }
    }

    world.generation += 1;
    tracing::trace!(generation = world.generation, moves, "tick");
    moves
}

/// Down, then down-left/down-right.
fn update_powder(world: &mut World, x: usize, y: usize) -> bool {
    try_move(world, x, y, 0, 1) || try_either_side(world, x, y, 1)
}

/// Down, then down-left/down-right, then left/right.
fn update_liquid(world: &mut World, x: usize, y: usize) -> bool {
    try_move(world, x, y, 0, 1)
        || try_either_side(world, x, y, 1)
        || try_either_side(world, x, y, 0)
}

/// Up, then up-left/up-right, then left/right.
fn update_gas(world: &mut World, x: usize, y: usize) -> bool {
    try_move(world, x, y, 0, -1)
        || try_either_side(world, x, y, -1)
        || try_either_side(world, x, y, 0)
}

/// Try `(-1, dy)` and `(1, dy)` in an order drawn from the RNG.
fn try_either_side(world: &mut World, x: usize, y: usize, dy: isize) -> bool {
    let first: isize = if world.rng.gen::<bool>() { -1 } else { 1 };
    try_move(world, x, y, first, dy) || try_move(world, x, y, -first, dy)
}

/// Move the particle at `(x, y)` by `(dx, dy)` if the target is in range and empty.
fn try_move(world: &mut World, x: usize, y: usize, dx: isize, dy: isize) -> bool {
    let Some(target) = offset_index(world, x, y, dx, dy) else {
        return false;
    };
    if !world.cells[target].is_empty() {
        return false;
    }

    let source = index_of(world, x, y);
    world.cells[target] = world.cells[source];
    world.cells[source] = Cell::Empty;
    world.moved[target] = true;
    true
}
