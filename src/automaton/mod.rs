//! Core simulation logic.
//!
//! This module contains the material table, grid access, the per-tick update
//! rule, texture generation and region operations. The FFI layer in `ffi/`
//! calls these functions.

pub mod grid;
pub mod material;
pub mod region;
pub mod stepping;
pub mod texture;
pub mod view;

pub use grid::{clear, count, get_cell, in_bounds, index_of, set_cell};
pub use material::{Behaviour, Cell};
pub use region::{extract_region, fill_region};
pub use stepping::step_world;
pub use texture::{cell_color, generate_texture};
pub use view::TextureView;
