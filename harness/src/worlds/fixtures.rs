//! Built-in puzzle grids.

use crawler_kernel::carrier::grid::GridModel;

use crate::loader::{parse_grid, LoadError};

/// The 7x7 reference puzzle. Head at `(1, 1)`, goal at `(1, 5)`.
pub const DEFAULT_GRID: &str = "\
= = = = = = =
= x . . . . =
= . . . = . =
= . . . = . =
= = = . = . =
= @ . . . . =
= = = = = = =
";

/// A one-cell-high corridor: the only solution is three steps right.
pub const CORRIDOR_GRID: &str = "\
= = = = = =
= @ . . x =
= = = = = =
";

/// # Errors
///
/// Never fails for the built-in text; the `Result` mirrors [`parse_grid`].
pub fn default_grid() -> Result<GridModel, LoadError> {
    parse_grid(DEFAULT_GRID)
}

/// # Errors
///
/// Never fails for the built-in text; the `Result` mirrors [`parse_grid`].
pub fn corridor_grid() -> Result<GridModel, LoadError> {
    parse_grid(CORRIDOR_GRID)
}
