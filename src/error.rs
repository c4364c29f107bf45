use snafu::prelude::*;

#[derive(Clone, Debug, Eq, PartialEq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("node capacity must be positive: {capacity}"))]
    InvalidCapacity { capacity: usize },

    // `len` is the length at the time of the call, so the message tells the caller which bound
    // was violated.
    #[snafu(display("index out of range: {index} (len {len})"))]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Fails with [`Error::IndexOutOfRange`] unless `index < len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    ensure!(index < len, IndexOutOfRangeSnafu { index, len });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_index_bounds() {
        assert_eq!(check_index(0, 1), Ok(()));
        assert_eq!(
            check_index(1, 1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        );
        assert_eq!(
            check_index(0, 0),
            Err(Error::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidCapacity { capacity: 0 }.to_string(),
            "node capacity must be positive: 0"
        );
        assert_eq!(
            Error::IndexOutOfRange { index: 8, len: 8 }.to_string(),
            "index out of range: 8 (len 8)"
        );
    }
}
