//! Cell access, census, and stepping.

use crate::automaton::Cell;
use crate::state::World;

/// Writes the material `tag` at `(x, y)`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
///
/// Out-of-bounds coordinates and unknown tags are silently ignored.
#[no_mangle]
pub unsafe extern "C" fn sa_set_pixel(ptr: *mut World, x: i32, y: i32, tag: u8) {
    if ptr.is_null() {
        return;
    }
    let Some(cell) = Cell::from_tag(tag) else {
        tracing::debug!(tag, "ignoring unknown material tag");
        return;
    };

    (*ptr).set_pixel(x, y, cell);
}

/// Reads the material tag at `(x, y)`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
///
/// # Returns
/// The cell's tag, or the `Empty` tag if out of bounds or null pointer.
#[no_mangle]
pub unsafe extern "C" fn sa_get_pixel(ptr: *const World, x: i32, y: i32) -> u8 {
    if ptr.is_null() {
        return Cell::Empty.tag();
    }
    (*ptr).get_pixel(x, y).unwrap_or_default().tag()
}

/// Advances the simulation by one tick.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
///
/// # Returns
/// The number of particles that moved.
#[no_mangle]
pub unsafe extern "C" fn sa_step(ptr: *mut World) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).step() as u64
}

/// Resets every cell to `Empty`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
#[no_mangle]
pub unsafe extern "C" fn sa_clear(ptr: *mut World) {
    if ptr.is_null() {
        return;
    }
    (*ptr).clear();
}

/// Counts the cells holding material `tag`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
///
/// # Returns
/// The count, or 0 for a null pointer or unknown tag.
#[no_mangle]
pub unsafe extern "C" fn sa_count(ptr: *const World, tag: u8) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    match Cell::from_tag(tag) {
        Some(cell) => (*ptr).count(cell) as u64,
        None => 0,
    }
}
