//! Buffer configuration parameters.

use crate::error::ConfigError;

/// Configuration for a growable buffer.
///
/// Passed explicitly at construction; there is no process-wide default
/// state. Validated before any storage is allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Capacity of a freshly created buffer, in slots.
    ///
    /// Also the capacity floor: neither shrinking nor an explicit resize
    /// may take a live buffer below this value. Default: 4. Must be at
    /// least 1.
    pub initial_capacity: usize,
}

impl BufferConfig {
    /// Default initial capacity (and capacity floor).
    pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

    /// Create a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }

    /// Check the config for values the buffer cannot honour.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        Ok(())
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
