//! Grid text loader.
//!
//! # Format
//!
//! One text line per grid row, top row first. Glyphs may be separated by
//! whitespace, which is ignored:
//!
//! | glyph | meaning        |
//! |-------|----------------|
//! | `=`   | wall           |
//! | `x`   | goal           |
//! | `@`   | crawler head   |
//! | `o`   | trail cell     |
//! | `.`   | empty          |
//!
//! The bottom row is `y = 0` and `x` counts glyphs from the left. Blank
//! lines are skipped. Dimensions are `(widest row, row count)`.

use crawler_kernel::carrier::grid::{GridError, GridModel, GridSpec};
use crawler_kernel::carrier::position::Position;

/// Typed failure for grid loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("grid text contains no rows")]
    Empty,

    #[error("unknown glyph {glyph:?} at row {row}, column {column}")]
    UnknownGlyph {
        glyph: char,
        /// 0-based, counted from the top line.
        row: usize,
        column: usize,
    },

    #[error("second crawler head at {second} (first at {first})")]
    DuplicateHead { first: Position, second: Position },

    #[error("second goal at {second} (first at {first})")]
    DuplicateGoal { first: Position, second: Position },

    #[error("grid row count {rows} or width {width} does not fit in a coordinate")]
    TooLarge { rows: usize, width: usize },

    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Parse grid text into an unvalidated [`GridSpec`].
///
/// # Errors
///
/// Returns [`LoadError`] for glyph-level problems. Semantic checks (missing
/// goal, head in a wall, ...) are left to [`GridModel::try_from`].
pub fn parse_spec(text: &str) -> Result<GridSpec, LoadError> {
    let rows: Vec<Vec<char>> = text
        .lines()
        .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();
    if rows.is_empty() {
        return Err(LoadError::Empty);
    }

    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let too_large = || LoadError::TooLarge {
        rows: rows.len(),
        width,
    };
    let height = i32::try_from(rows.len()).map_err(|_| too_large())?;
    let dimensions = (
        u32::try_from(width).map_err(|_| too_large())?,
        u32::try_from(rows.len()).map_err(|_| too_large())?,
    );

    let mut spec = GridSpec {
        dimensions,
        ..GridSpec::default()
    };
    for (row, glyphs) in rows.iter().enumerate() {
        let y = height - 1 - i32::try_from(row).map_err(|_| too_large())?;
        for (column, &glyph) in glyphs.iter().enumerate() {
            let cell = Position::new(i32::try_from(column).map_err(|_| too_large())?, y);
            match glyph {
                '=' => {
                    spec.walls.insert(cell);
                }
                'o' => {
                    spec.trail.insert(cell);
                }
                '@' => {
                    if let Some(first) = spec.head {
                        return Err(LoadError::DuplicateHead { first, second: cell });
                    }
                    spec.head = Some(cell);
                }
                'x' => {
                    if let Some(first) = spec.goal {
                        return Err(LoadError::DuplicateGoal { first, second: cell });
                    }
                    spec.goal = Some(cell);
                }
                '.' => {}
                _ => return Err(LoadError::UnknownGlyph { glyph, row, column }),
            }
        }
    }
    Ok(spec)
}

/// Parse and validate grid text.
///
/// # Errors
///
/// Returns [`LoadError`] if the text is malformed or describes an invalid
/// grid.
pub fn parse_grid(text: &str) -> Result<GridModel, LoadError> {
    Ok(GridModel::try_from(parse_spec(text)?)?)
}
