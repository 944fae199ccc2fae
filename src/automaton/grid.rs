//! Cell addressing and direct cell access.

use super::material::Cell;
use crate::state::World;

/// Calculate the linear index for an in-range coordinate.
#[inline]
pub fn index_of(world: &World, x: usize, y: usize) -> usize {
    y * world.width + x
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(world: &World, x: i32, y: i32) -> bool {
    x >= 0 && (x as usize) < world.width && y >= 0 && (y as usize) < world.height
}

/// Index of the neighbour at `(x + dx, y + dy)`, or `None` past the edge.
#[inline]
pub fn offset_index(world: &World, x: usize, y: usize, dx: isize, dy: isize) -> Option<usize> {
    let nx = x.checked_add_signed(dx)?;
    let ny = y.checked_add_signed(dy)?;
    if nx < world.width && ny < world.height {
        Some(index_of(world, nx, ny))
    } else {
        None
    }
}

pub fn get_cell(world: &World, x: i32, y: i32) -> Option<Cell> {
    if !in_bounds(world, x, y) {
        return None;
    }
    Some(world.cells[index_of(world, x as usize, y as usize)])
}

/// Out-of-bounds coordinates are silently ignored.
pub fn set_cell(world: &mut World, x: i32, y: i32, cell: Cell) {
    if !in_bounds(world, x, y) {
        return;
    }
    let idx = index_of(world, x as usize, y as usize);
    world.cells[idx] = cell;
}

pub fn clear(world: &mut World) {
    world.cells.fill(Cell::Empty);
}

pub fn count(world: &World, cell: Cell) -> usize {
    world.cells.iter().filter(|&&c| c == cell).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of() {
        let world = World::new(4, 3).unwrap();

        assert_eq!(index_of(&world, 0, 0), 0);
        assert_eq!(index_of(&world, 3, 2), 11);
        assert_eq!(index_of(&world, 1, 0), 1);
        assert_eq!(index_of(&world, 0, 1), 4);
    }

    #[test]
    fn test_in_bounds() {
        let world = World::new(4, 3).unwrap();

        assert!(in_bounds(&world, 0, 0));
        assert!(in_bounds(&world, 3, 2));

        assert!(!in_bounds(&world, -1, 0));
        assert!(!in_bounds(&world, 4, 0));
        assert!(!in_bounds(&world, 0, -1));
        assert!(!in_bounds(&world, 0, 3));
        assert!(!in_bounds(&world, i32::MIN, i32::MAX));
    }

    #[test]
    fn test_offset_index() {
        let world = World::new(4, 3).unwrap();

        assert_eq!(offset_index(&world, 1, 1, 0, 1), Some(9));
        assert_eq!(offset_index(&world, 1, 1, -1, -1), Some(0));
        assert_eq!(offset_index(&world, 0, 0, -1, 0), None);
        assert_eq!(offset_index(&world, 3, 0, 1, 0), None);
        assert_eq!(offset_index(&world, 0, 2, 0, 1), None);
    }

    #[test]
    fn test_set_get_cell() {
        let mut world = World::new(4, 4).unwrap();

        set_cell(&mut world, 2, 3, Cell::Water);
        assert_eq!(get_cell(&world, 2, 3), Some(Cell::Water));
        assert_eq!(get_cell(&world, 0, 0), Some(Cell::Empty));

        assert_eq!(get_cell(&world, -1, 0), None);
        assert_eq!(get_cell(&world, 4, 0), None);
    }

    #[test]
    fn test_out_of_bounds_writes_are_ignored() {
        let mut world = World::new(4, 4).unwrap();

        for (x, y) in [(-1, 0), (4, 0), (0, -1), (0, 4), (i32::MAX, i32::MIN), (-9, 9)] {
            set_cell(&mut world, x, y, Cell::Sand);
        }

        assert_eq!(count(&world, Cell::Sand), 0);
        assert_eq!(count(&world, Cell::Empty), 16);
    }

    #[test]
    fn test_clear_and_count() {
        let mut world = World::new(4, 4).unwrap();
        set_cell(&mut world, 0, 0, Cell::Sand);
        set_cell(&mut world, 1, 0, Cell::Sand);
        set_cell(&mut world, 2, 0, Cell::Stone);

        assert_eq!(count(&world, Cell::Sand), 2);
        assert_eq!(count(&world, Cell::Stone), 1);

        clear(&mut world);
        assert_eq!(count(&world, Cell::Empty), 16);
    }
}
