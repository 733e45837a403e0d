//! Non-volatile storage interface.

/// Key-addressed non-volatile storage for signed long integers.
///
/// Writes are fire-and-forget: there is no acknowledgement and no retry.
/// A store that silently drops a write degrades to stale position recovery
/// after a power cycle, which the controller tolerates.
pub trait NonVolatileStore {
    /// Read the value at an address.
    fn read_long(&mut self, address: u32) -> i64;

    /// Write a value to an address.
    fn write_long(&mut self, address: u32, value: i64);
}
