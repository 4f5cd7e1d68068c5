use std::time::SystemTime;

use thiserror::Error;

use crate::game_time::GameInstant;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("System clock reads earlier than the UNIX epoch")]
    SystemTimeBeforeEpoch,
}

/// Reads the wall clock that every peer's [`GameInstant`] is measured on
pub struct Timestamp;

impl Timestamp {
    /// Current wall-clock instant
    ///
    /// # Errors
    /// Returns `TimeError::SystemTimeBeforeEpoch` if the system clock is set
    /// before the UNIX epoch.
    pub fn try_now() -> Result<GameInstant, TimeError> {
        let since_epoch = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map_err(|_| TimeError::SystemTimeBeforeEpoch)?;
        Ok(GameInstant::from_millis(
            u64::try_from(since_epoch.as_millis()).unwrap_or(u64::MAX),
        ))
    }

    /// Current wall-clock instant
    ///
    /// # Panics
    /// Panics if the system clock is set before the UNIX epoch.
    /// For non-panicking version, use `try_now`.
    pub fn now() -> GameInstant {
        Self::try_now().expect("Timestamp::now: system clock is before the UNIX epoch")
    }
}
