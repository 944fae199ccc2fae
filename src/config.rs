//! World construction options.

/// Seed used when the host does not pick one.
pub const DEFAULT_SEED: u64 = 0x5EED_5A4D;

/// Upper bound on texture worker threads, whatever the host asks for.
pub const MAX_TEXTURE_THREADS: usize = 64;

/// Options fixed at world construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorldConfig {
    /// Seed for the tie-break RNG. Same seed and same inputs give the same world.
    pub seed: u64,

    /// Worker threads for texture regeneration. 0 (the default) runs inline on the
    /// caller's thread. Otherwise rows are split across an owned pool, capped at the
    /// machine's available parallelism and [`MAX_TEXTURE_THREADS`];
    /// `generate_texture` still returns only once the buffer is complete.
    pub texture_threads: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            seed: DEFAULT_SEED,
            texture_threads: 0,
        }
    }
}

impl WorldConfig {
    pub fn with_seed(seed: u64) -> Self {
        WorldConfig {
            seed,
            ..Default::default()
        }
    }

    pub fn texture_threads(mut self, threads: usize) -> Self {
        self.texture_threads = threads;
        self
    }

    /// Thread count actually used: `texture_threads` clamped to the hardware.
    pub fn effective_texture_threads(&self) -> usize {
        if self.texture_threads == 0 {
            return 0;
        }
        let hardware = std::thread::available_parallelism().map_or(1, |n| n.get());
        self.texture_threads.min(hardware).min(MAX_TEXTURE_THREADS)
    }
}
