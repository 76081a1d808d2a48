//! Star rating split for comment display.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

/// Stars rendered per comment.
pub const MAX_STARS: usize = 5;

/// Filled and empty star counts; always sums to [`MAX_STARS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StarSplit {
    pub filled: usize,
    pub empty: usize,
}

/// Split a server rating into filled + empty stars. Out-of-range ratings are
/// clamped so the total stays at five.
pub fn star_split(rating: i64) -> StarSplit {
    let filled = usize::try_from(rating.clamp(0, 5)).unwrap_or(0);
    StarSplit { filled, empty: MAX_STARS - filled }
}
