//! Sand Automata - 2D falling-sand cellular automaton.
//!
//! A fixed-size grid of material cells is painted by the host, advanced one
//! tick per frame, and rendered into an RGBA buffer the host reads in place.
//! Rust callers use [`World`] directly; other hosts go through the C ABI in
//! [`ffi`].
//!
//! Per frame the host paints (`set_pixel`, `fill_region`), then calls `step`
//! once, then `generate_texture` once, then reads `buffer_view`.

pub mod automaton;
pub mod config;
pub mod error;
pub mod ffi;
pub mod state;

pub use automaton::{Behaviour, Cell, TextureView};
pub use config::WorldConfig;
pub use error::WorldError;
pub use state::World;
