use std::fmt::Display;

use configuration::{BASE_ONE, BASE_ZERO, DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY};

use crate::error::TableError;

mod sealed {
    pub trait Sealed {}
}

/// Lifecycle state of a [`FibonacciTable`], either [`Empty`] or [`Populated`].
pub trait TableState: sealed::Sealed {}

/// A table whose capacity is known but whose values have not been computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Empty {}

impl sealed::Sealed for Empty {}
impl TableState for Empty {}

/// A table holding every value from F(0) up to F(capacity - 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Populated {
    values: Box<[i32]>,
}

impl sealed::Sealed for Populated {}
impl TableState for Populated {}

/// Bottom-up Fibonacci table over `i32`.
///
/// Entries are summed with [`i32::wrapping_add`], so every value past F(46)
/// is the true Fibonacci number modulo 2^32 read back as a signed integer.
/// That wraparound is the defined result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciTable<State: TableState> {
    capacity: usize,
    state: State,
}

impl<State: TableState> FibonacciTable<State> {
    /// Number of entries in the table; valid indices are `0..capacity`.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn check_index(&self, index: i64) -> Result<usize, TableError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.capacity)
            .ok_or_else(|| {
                tracing::debug!(
                    "rejecting index {} for table of capacity {}",
                    index,
                    self.capacity
                );
                TableError::OutOfRange {
                    index,
                    capacity: self.capacity,
                }
            })
    }
}

impl FibonacciTable<Empty> {
    pub fn new() -> Self {
        FibonacciTable {
            capacity: DEFAULT_CAPACITY,
            state: Empty {},
        }
    }

    /// Rejects capacities outside `MIN_CAPACITY..=MAX_CAPACITY` before
    /// anything is allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(TableError::InvalidCapacity(capacity));
        }

        tracing::trace!("new table with capacity {}", capacity);
        Ok(FibonacciTable {
            capacity,
            state: Empty {},
        })
    }

    /// Returns F(n), building a fresh table for this call only.
    ///
    /// The index is validated before anything is allocated. Nothing computed
    /// here is kept on `self`, so repeated calls redo the whole pass.
    pub fn compute(&self, n: i64) -> Result<i32, TableError> {
        let index = self.check_index(n)?;
        let values = tabulate(self.capacity);
        Ok(values[index])
    }

    /// Runs the tabulation pass and keeps the result for repeated reads.
    pub fn populate(self) -> FibonacciTable<Populated> {
        FibonacciTable {
            capacity: self.capacity,
            state: Populated {
                values: tabulate(self.capacity),
            },
        }
    }
}

impl Default for FibonacciTable<Empty> {
    fn default() -> Self {
        Self::new()
    }
}

impl FibonacciTable<Populated> {
    pub fn get(&self, n: i64) -> Result<i32, TableError> {
        let index = self.check_index(n)?;
        Ok(self.state.values[index])
    }

    pub fn values(&self) -> &[i32] {
        &self.state.values
    }
}

/// Fills `capacity` entries strictly left to right; each one only depends on
/// the two before it. `capacity` must be at least [`MIN_CAPACITY`].
fn tabulate(capacity: usize) -> Box<[i32]> {
    let mut values = vec![0i32; capacity];
    values[0] = BASE_ZERO;
    values[1] = BASE_ONE;

    for i in 2..capacity {
        values[i] = values[i - 1].wrapping_add(values[i - 2]);
    }

    tracing::trace!(
        "tabulated {} entries, last is {}",
        capacity,
        values[capacity - 1]
    );
    values.into_boxed_slice()
}

impl Display for FibonacciTable<Populated> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "=== Fibonacci Table ===")?;
        writeln!(f, "Capacity: {}", self.capacity)?;

        for (row, chunk) in self.state.values.chunks(4).enumerate() {
            write!(f, " ")?;
            for (col, value) in chunk.iter().enumerate() {
                let i = row * 4 + col;
                write!(f, " F({:2}): {:>11} (0x{:08x})", i, value, value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
