//! Texture regeneration and zero-copy buffer exposure.

use crate::state::World;

/// Address and length of a world's RGBA buffer.
///
/// `len` is always `width * height * 4`. The address stays the same for the
/// lifetime of the world and is invalid after `sa_destroy`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferView {
    pub ptr: *const u8,
    pub len: usize,
}

impl BufferView {
    const NULL: BufferView = BufferView {
        ptr: std::ptr::null(),
        len: 0,
    };
}

/// Recomputes the whole RGBA buffer from the current cells.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
#[no_mangle]
pub unsafe extern "C" fn sa_generate_texture(ptr: *mut World) {
    if ptr.is_null() {
        return;
    }
    (*ptr).generate_texture();
}

/// Exposes the RGBA buffer for zero-copy reads.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
/// - The host must read at most `len` bytes, and only until `sa_destroy`
///
/// # Returns
/// The buffer's address and length, or a null view for a null pointer.
#[no_mangle]
pub unsafe extern "C" fn sa_buffer_view(ptr: *const World) -> BufferView {
    if ptr.is_null() {
        return BufferView::NULL;
    }
    let view = (*ptr).buffer_view();
    BufferView {
        ptr: view.as_ptr(),
        len: view.len(),
    }
}

/// Copies the RGBA buffer into a host-owned buffer.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
/// - `out_buf` must point to at least `out_len` writable bytes, or be null
///
/// # Returns
/// Bytes written, or 0 if `out_len` is smaller than the texture or on null pointers.
#[no_mangle]
pub unsafe extern "C" fn sa_copy_texture(ptr: *const World, out_buf: *mut u8, out_len: usize) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }
    let out = std::slice::from_raw_parts_mut(out_buf, out_len);
    (*ptr).buffer_view().copy_to(out) as u64
}
