mod error;
mod table;

pub use configuration::{DEFAULT_CAPACITY, MAX_CAPACITY, MIN_CAPACITY};
pub use error::TableError;
pub use table::{Empty, FibonacciTable, Populated, TableState};

/// Computes F(n) over a table of [`DEFAULT_CAPACITY`] entries.
///
/// Each call tabulates from scratch. Results past F(46) wrap in `i32`.
pub fn fibonacci(n: i64) -> Result<i32, TableError> {
    FibonacciTable::new().compute(n)
}

#[cfg(test)]
mod tests {
    use crate::{TableError, fibonacci};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn base_cases() {
        assert_eq!(Ok(0), fibonacci(0));
        assert_eq!(Ok(1), fibonacci(1));
        assert!(logs_contain("tabulated 100 entries"));
    }

    #[test]
    #[traced_test]
    fn rejected_index_is_logged() {
        assert_eq!(
            Err(TableError::OutOfRange {
                index: -1,
                capacity: 100
            }),
            fibonacci(-1)
        );
        assert!(logs_contain("rejecting index -1"));
        assert!(!logs_contain("tabulated"));
    }
}
