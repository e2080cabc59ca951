#![no_std]

/// Number of entries in a table when no capacity is requested.
pub const DEFAULT_CAPACITY: usize = 100;
/// Smallest table that still holds both base cases.
pub const MIN_CAPACITY: usize = 2;
/// Largest table a caller may request, 4 MiB of `i32` entries.
pub const MAX_CAPACITY: usize = 1 << 20;

/// F(0)
pub const BASE_ZERO: i32 = 0;
/// F(1)
pub const BASE_ONE: i32 = 1;
