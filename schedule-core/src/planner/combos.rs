//! Lazy enumeration of index combinations.
//!
//! Given the number of candidate sections for each course, `Combinations`
//! walks every way of picking one index per course. Tuples are decoded
//! from a running counter in closed form, so the iterator holds no
//! recursion state, never materializes the tuple space, and restarting
//! it is just constructing it again.

use crate::domain::Course;

/// Iterator over all index tuples `[i1, ..., in]` with `0 <= ik < tk`.
///
/// Tuples come out in mixed-radix counting order with the FIRST index
/// varying fastest: the counter's least significant digit is the first
/// course. The sequence is finite (`t1 * t2 * ... * tn` tuples),
/// deterministic, and empty if any `tk` is zero.
///
/// # Examples
///
/// ```
/// use schedule_core::planner::Combinations;
///
/// let tuples: Vec<_> = Combinations::new(vec![2, 3]).collect();
/// assert_eq!(tuples, vec![
///     vec![0, 0], vec![1, 0],
///     vec![0, 1], vec![1, 1],
///     vec![0, 2], vec![1, 2],
/// ]);
///
/// assert_eq!(Combinations::new(vec![4, 0, 2]).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    totals: Vec<usize>,
    /// Product of all totals; counting in u128 keeps even absurdly large
    /// tuple spaces from overflowing the counter.
    total: u128,
    next: u128,
}

impl Combinations {
    /// Create the sequence for the given per-course section counts.
    pub fn new(totals: Vec<usize>) -> Self {
        let total = totals.iter().map(|&t| t as u128).product();
        Self {
            totals,
            total,
            next: 0,
        }
    }

    /// Create the sequence sized to each course's section count.
    pub fn for_courses(courses: &[Course]) -> Self {
        Self::new(courses.iter().map(|c| c.sections.len()).collect())
    }

    /// Total number of tuples the full sequence yields.
    pub fn total(&self) -> u128 {
        self.total
    }

    /// Number of tuples not yet yielded.
    pub fn remaining(&self) -> u128 {
        self.total - self.next
    }

    /// Decode counter value `index` into its index tuple.
    fn decode(&self, index: u128) -> Vec<usize> {
        let mut divider = 1u128;
        self.totals
            .iter()
            .map(|&total| {
                let digit = (index / divider) % total as u128;
                divider *= total as u128;
                digit as usize
            })
            .collect()
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.total {
            return None;
        }
        let tuple = self.decode(self.next);
        self.next += 1;
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
