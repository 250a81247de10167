//! Board construction errors.

/// Why a board could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A board needs at least one square per side.
    #[display("Board size must be at least 1")]
    ZeroSize,

    /// `size * size` does not fit in memory addressing.
    #[display("Board size {_0} is too large")]
    TooLarge(#[error(not(source))] usize),

    /// Stored squares do not form a `size`×`size` grid.
    #[display("Expected {size}x{size} squares but found {len}")]
    Mismatched {
        /// Declared side length.
        size: usize,
        /// Number of squares supplied.
        len: usize,
    },
}
