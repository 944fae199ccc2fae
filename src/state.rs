//! The world: cell grid, colour buffer, and per-tick bookkeeping.

use std::collections::TryReserveError;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::automaton::{self, Cell, TextureView};
use crate::config::WorldConfig;
use crate::error::WorldError;

/// A fixed-size 2D grid of cells plus its RGBA texture.
///
/// Dimensions are set once at construction. `cells`, `moved` and `texture`
/// are always sized from `width` and `height`; resizing means building a new
/// world.
pub struct World {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<Cell>, // row-major
    pub(crate) moved: Vec<bool>, // cleared at the start of every tick
    pub(crate) texture: Vec<u8>, // RGBA, row stride = width * 4
    pub(crate) generation: u64,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) texture_pool: Option<rayon::ThreadPool>,
}

impl World {
    /// Create a world of `Empty` cells with the default config.
    pub fn new(width: usize, height: usize) -> Result<World, WorldError> {
        World::with_config(width, height, WorldConfig::default())
    }

    pub fn with_config(
        width: usize,
        height: usize,
        config: WorldConfig,
    ) -> Result<World, WorldError> {
        if width == 0 || height == 0 {
            tracing::debug!(width, height, "rejecting zero-sized world");
            return Err(WorldError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }

        // The texture is the largest buffer; no allocation may exceed isize::MAX bytes.
        let size = width
            .checked_mul(height)
            .filter(|size| {
                size.checked_mul(4)
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or(WorldError::TooLarge { width, height })?;

        let cells = filled(size, Cell::Empty)?;
        let moved = filled(size, false)?;
        let texture = filled(size * 4, 0u8)?;

        let texture_threads = config.effective_texture_threads();
        let texture_pool = if texture_threads == 0 {
            None
        } else {
            Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(texture_threads)
                    .thread_name(|i| format!("sand-texture-{i}"))
                    .build()?,
            )
        };

        tracing::debug!(
            width,
            height,
            seed = config.seed,
            texture_threads,
            "created world"
        );

        Ok(World {
            width,
            height,
            cells,
            moved,
            texture,
            generation: 0,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            texture_pool,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of completed ticks.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Read a cell. Out-of-range coordinates return `None`.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Cell> {
        automaton::get_cell(self, x, y)
    }

    /// Write a cell. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, cell: Cell) {
        automaton::set_cell(self, x, y, cell);
    }

    pub fn clear(&mut self) {
        automaton::clear(self);
    }

    /// Count the cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        automaton::count(self, cell)
    }

    /// Paint the rectangle `[min, max)`, clamped to the grid. Returns cells written.
    pub fn fill_region(
        &mut self,
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
        cell: Cell,
    ) -> u64 {
        automaton::fill_region(self, min_x, min_y, max_x, max_y, cell)
    }

    /// Copy the tags of the rectangle `[min, max)`, clamped to the grid, into `out`.
    pub fn extract_region(
        &self,
        out: &mut [u8],
        min_x: i32,
        min_y: i32,
        max_x: i32,
        max_y: i32,
    ) -> u64 {
        automaton::extract_region(self, out, min_x, min_y, max_x, max_y)
    }

    /// Advance one tick. Returns the number of particles that moved.
    pub fn step(&mut self) -> usize {
        automaton::step_world(self)
    }

    /// Recompute the whole RGBA buffer from the current cells.
    pub fn generate_texture(&mut self) {
        automaton::generate_texture(self);
    }

    /// Read-only view of the RGBA buffer, valid while the world is borrowed.
    pub fn buffer_view(&self) -> TextureView<'_> {
        TextureView::new(&self.texture, self.width, self.height)
    }
}

/// Allocate `len` copies of `value`, reporting allocation failure instead of aborting.
fn filled<T: Clone>(len: usize, value: T) -> Result<Vec<T>, TryReserveError> {
    let mut v = Vec::new();
    v.try_reserve_exact(len)?;
    v.resize(len, value);
    Ok(v)
}

impl Drop for World {
    fn drop(&mut self) {
        tracing::debug!(
            width = self.width,
            height = self.height,
            generation = self.generation,
            "dropping world"
        );
    }
}
