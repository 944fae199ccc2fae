//! World creation, destruction, and dimension/generation queries.

use crate::config::WorldConfig;
use crate::state::World;

fn create(width: i32, height: i32, config: WorldConfig) -> *mut World {
    let (Ok(w), Ok(h)) = (usize::try_from(width), usize::try_from(height)) else {
        tracing::warn!(width, height, "refusing to create world with negative dimensions");
        return std::ptr::null_mut();
    };

    match World::with_config(w, h, config) {
        Ok(world) => Box::into_raw(Box::new(world)),
        Err(err) => {
            tracing::warn!(width, height, "refusing to create world: {err}");
            std::ptr::null_mut()
        }
    }
}

/// Creates a world of `Empty` cells with the default seed.
///
/// # Returns
/// A pointer to a new World, or null if either dimension is not positive or the
/// buffers cannot be allocated.
///
/// # Safety
/// The returned pointer must eventually be freed with `sa_destroy()`.
#[no_mangle]
pub extern "C" fn sa_create(width: i32, height: i32) -> *mut World {
    create(width, height, WorldConfig::default())
}

/// Creates a world whose tie-breaks are drawn from `seed`.
#[no_mangle]
pub extern "C" fn sa_create_seeded(width: i32, height: i32, seed: u64) -> *mut World {
    create(width, height, WorldConfig::with_seed(seed))
}

/// Creates a world with an explicit seed and texture thread count (0 = inline).
///
/// The thread count is clamped to the machine's available parallelism and
/// `MAX_TEXTURE_THREADS`.
///
/// # Returns
/// Null on invalid dimensions, failed allocation, or if the thread pool cannot be built.
#[no_mangle]
pub extern "C" fn sa_create_with_config(
    width: i32,
    height: i32,
    seed: u64,
    texture_threads: u32,
) -> *mut World {
    let config = WorldConfig::with_seed(seed).texture_threads(texture_threads as usize);
    create(width, height, config)
}

/// Destroys a world and frees its memory, including the texture buffer.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by one of the `sa_create*` functions, or null
/// - `ptr`, and any buffer view taken from it, must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn sa_destroy(ptr: *mut World) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of completed ticks.
///
/// # Safety
/// - `ptr` must be a valid pointer to a World, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn sa_get_generation(ptr: *const World) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// # Safety
/// - `ptr` must be a valid pointer to a World, or null (returns 0)
#[no_mangle]
pub unsafe extern "C" fn sa_width(ptr: *const World) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).width() as u32
}

/// # Safety
/// - `ptr` must be a valid pointer to a World, or null (returns 0)
#[no_mangle]
pub unsafe extern "C" fn sa_height(ptr: *const World) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).height() as u32
}
