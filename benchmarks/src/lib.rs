//! Shared helpers for crawler benchmark suites.

use crawler_harness::loader::{parse_grid, LoadError};
use crawler_harness::worlds::crawler::CrawlerWorld;
use crawler_kernel::carrier::position::Position;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grid text for a `width x height` box with a staircase of one-cell ledges
/// climbing from the lower left. Head in the lower-left corner, goal in the
/// upper-right corner.
///
/// Both dimensions include the border and must be at least 4.
#[must_use]
pub fn staircase_text(width: usize, height: usize) -> String {
    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let y = height - 1 - row;
        let cells: Vec<&str> = (0..width)
            .map(|x| {
                let border = x == 0 || y == 0 || x == width - 1 || y == height - 1;
                if border {
                    "="
                } else if x == 1 && y == 1 {
                    "@"
                } else if x == width - 2 && y == height - 2 {
                    "x"
                } else if y >= 2 && y % 2 == 0 && x == (y * 2) % (width - 2) + 1 {
                    "="
                } else {
                    "."
                }
            })
            .collect();
        rows.push(cells.join(" "));
    }
    rows.join("\n")
}

/// A crawler world over [`staircase_text`].
///
/// # Errors
///
/// Returns [`LoadError`] if the dimensions are too small to hold a head and
/// a goal.
pub fn staircase_world(width: usize, height: usize) -> Result<CrawlerWorld, LoadError> {
    Ok(CrawlerWorld::with_default_stamina(parse_grid(
        &staircase_text(width, height),
    )?))
}

/// `n` pseudo-random positions in `[0, span)^2`, reproducible for a seed.
#[must_use]
pub fn scattered_heads(n: usize, span: u32, seed: u64) -> Vec<Position> {
    let span = i32::try_from(span.max(1)).unwrap_or(i32::MAX);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Position::new(rng.gen_range(0..span), rng.gen_range(0..span)))
        .collect()
}
