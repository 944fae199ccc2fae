//! Region painting and extraction FFI functions.

use crate::automaton::Cell;
use crate::state::World;

/// Paints the rectangle `[min, max)` with material `tag`.
///
/// Coordinates are clamped to the grid; this is the host's brush primitive.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
///
/// # Returns
/// Number of cells written, or 0 on null pointer or unknown tag.
#[no_mangle]
pub unsafe extern "C" fn sa_fill_region(
    ptr: *mut World,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
    tag: u8,
) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    let Some(cell) = Cell::from_tag(tag) else {
        return 0;
    };
    (*ptr).fill_region(min_x, min_y, max_x, max_y, cell)
}

/// Extracts the material tags of the rectangle `[min, max)` into `out_buf`.
///
/// # Layout
/// Row-major: y changes slowest, x fastest. The region is clamped to the grid
/// before its size is compared against `out_len`.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
/// - `out_buf` must point to at least `out_len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 on error.
#[no_mangle]
pub unsafe extern "C" fn sa_extract_region(
    ptr: *const World,
    out_buf: *mut u8,
    out_len: usize,
    min_x: i32,
    min_y: i32,
    max_x: i32,
    max_y: i32,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let buf_slice = std::slice::from_raw_parts_mut(out_buf, out_len);
    (*ptr).extract_region(buf_slice, min_x, min_y, max_x, max_y)
}
