use configuration::{MAX_CAPACITY, MIN_CAPACITY};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    #[error("index {index} is out of range for a table of capacity {capacity}")]
    OutOfRange { index: i64, capacity: usize },
    #[error("table capacity {0} is outside {min}..={max}", min = MIN_CAPACITY, max = MAX_CAPACITY)]
    InvalidCapacity(usize),
}
