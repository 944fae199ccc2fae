//! RGBA texture generation.
//!
//! Each cell maps to 4 bytes. Sand and stone get a per-position jitter from a
//! stable hash of `(x, y)`, so a resting pile does not flicker between frames.

use rayon::prelude::*;

use super::material::Cell;
use crate::state::World;

pub const BACKGROUND: [u8; 4] = [0, 0, 0, 255];
pub const SAND_BASE: [u8; 4] = [210, 210, 180, 255];
pub const WATER: [u8; 4] = [0, 100, 200, 220];
pub const STONE_BASE: [u8; 4] = [110, 110, 118, 255];
pub const STEAM: [u8; 4] = [210, 215, 230, 150];

/// Mix a grid position into 64 well-distributed bits (splitmix64 finaliser).
#[inline]
pub fn position_hash(x: usize, y: usize) -> u64 {
    let mut z = (((x as u64) << 32) ^ (y as u64)).wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Colour of `cell` drawn at `(x, y)`.
pub fn cell_color(cell: Cell, x: usize, y: usize) -> [u8; 4] {
    match cell {
        Cell::Empty => BACKGROUND,
        Cell::Sand => {
            let j = (position_hash(x, y) % 46) as u8;
            [SAND_BASE[0] + j, SAND_BASE[1] + j, SAND_BASE[2], SAND_BASE[3]]
        }
        Cell::Water => WATER,
        Cell::Stone => {
            let j = (position_hash(x, y) % 24) as u8;
            [STONE_BASE[0] + j, STONE_BASE[1] + j, STONE_BASE[2] + j, STONE_BASE[3]]
        }
        Cell::Steam => STEAM,
    }
}

fn fill_row(cells: &[Cell], y: usize, out: &mut [u8]) {
    for (x, (cell, pixel)) in cells.iter().zip(out.chunks_exact_mut(4)).enumerate() {
        pixel.copy_from_slice(&cell_color(*cell, x, y));
    }
}

/// Recompute every pixel. Rows are split across the texture pool when one is configured.
pub fn generate_texture(world: &mut World) {
    let World {
        width,
        cells,
        texture,
        texture_pool,
        ..
    } = world;
    let width = *width;
    let stride = width * 4;

    match texture_pool {
        Some(pool) => pool.install(|| {
            texture
                .par_chunks_mut(stride)
                .zip(cells.par_chunks(width))
                .enumerate()
                .for_each(|(y, (out, row))| fill_row(row, y, out));
        }),
        None => {
            let rows = texture.chunks_mut(stride).zip(cells.chunks(width));
            for (y, (out, row)) in rows.enumerate() {
                fill_row(row, y, out);
            }
        }
    }
}
