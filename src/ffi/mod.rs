//! C FFI layer for the rendering host.
//!
//! This module exports C ABI functions over an opaque `*mut World` handle.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `automaton` module. These functions are thin wrappers
//! that handle null checks, pointer safety, tag decoding, and C-to-Rust conversions.

pub mod grid;
pub mod lifecycle;
pub mod material;
pub mod region;
pub mod texture;

pub use grid::{sa_clear, sa_count, sa_get_pixel, sa_set_pixel, sa_step};
pub use lifecycle::{
    sa_create, sa_create_seeded, sa_create_with_config, sa_destroy, sa_get_generation, sa_height,
    sa_width,
};
pub use material::{
    sa_material_empty, sa_material_sand, sa_material_steam, sa_material_stone, sa_material_water,
};
pub use region::{sa_extract_region, sa_fill_region};
pub use texture::{sa_buffer_view, sa_copy_texture, sa_generate_texture, BufferView};
