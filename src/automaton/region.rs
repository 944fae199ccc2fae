//! Rectangular region painting and extraction.

use super::grid::index_of;
use super::material::Cell;
use crate::state::World;

/// Clamp one axis coordinate into `[0, len]`.
#[inline]
fn clamp_axis(v: i32, len: usize) -> usize {
    usize::try_from(v).map_or(0, |v| v.min(len))
}

/// Clamp `[min, max)` to the grid. Returns `None` for an empty or inverted region.
fn clamp_region(
    world: &World,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> Option<(usize, usize, usize, usize)> {
    let min_x = clamp_axis(min_x, world.width);
    let min_y = clamp_axis(min_y, world.height);
    let max_x = clamp_axis(max_x, world.width);
    let max_y = clamp_axis(max_y, world.height);

    if min_x >= max_x || min_y >= max_y {
        return None;
    }
    Some((min_x, min_y, max_x, max_y))
}

/// Paint every cell of `[min, max)` with `cell`.
///
/// Coordinates are clamped to the grid, so a brush hanging off the edge paints
/// only its in-range part.
///
/// # Returns
/// Number of cells written.
pub fn fill_region(
    world: &mut World,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
    cell: Cell,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(world, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    for y in min_y..max_y {
        let start = index_of(world, min_x, y);
        let end = index_of(world, max_x, y);
        world.cells[start..end].fill(cell);
    }

    ((max_x - min_x) * (max_y - min_y)) as u64
}

/// Extract the cell tags of `[min, max)` into a flat buffer.
///
/// # Layout
/// Row-major: y changes slowest, x fastest.
///
/// # Returns
/// Number of bytes written, or 0 if the region is empty or `out_buf` is too small.
pub fn extract_region(
    world: &World,
    out_buf: &mut [u8],
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    let Some((min_x, min_y, max_x, max_y)) = clamp_region(world, min_x, min_y, max_x, max_y)
    else {
        return 0;
    };

    let total_size = (max_x - min_x) * (max_y - min_y);
    if out_buf.len() < total_size {
        return 0;
    }

    let mut offset = 0;
    for y in min_y..max_y {
        for x in min_x..max_x {
            out_buf[offset] = world.cells[index_of(world, x, y)].tag();
            offset += 1;
        }
    }

    offset as u64
}
