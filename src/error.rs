//! Construction errors.

/// Errors from building a [`World`](crate::state::World).
///
/// Out-of-range reads and writes are not errors: they are defined no-ops.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("invalid world dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i64, height: i64 },
    #[error("world dimensions {width}x{height} overflow the texture buffer size")]
    TooLarge { width: usize, height: usize },
    #[error("world buffers could not be allocated: {0}")]
    Alloc(#[from] std::collections::TryReserveError),
    #[error("texture thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WorldError::InvalidDimensions {
            width: 0,
            height: 4,
        };
        assert_eq!(
            err.to_string(),
            "invalid world dimensions 0x4: both must be positive"
        );

        let err = WorldError::TooLarge {
            width: usize::MAX,
            height: 2,
        };
        assert!(err.to_string().contains("overflow"));

        let reserve = Vec::<u8>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = WorldError::from(reserve);
        assert!(err.to_string().starts_with("world buffers could not be allocated"));
    }
}
