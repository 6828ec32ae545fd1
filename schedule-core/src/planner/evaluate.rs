//! Conflict checking and scoring of candidate schedules.

use tracing::{debug, trace};

use super::combos::Combinations;
use crate::domain::{Course, Section};

/// One conflict-free choice of sections, tagged with its quality score.
///
/// `indices[k]` picks `courses[k].sections[indices[k]]`. The score is the
/// arithmetic mean of the per-section scores, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSchedule {
    pub indices: Vec<usize>,
    pub score: f64,
}

impl ScoredSchedule {
    /// Resolve this schedule's sections against the courses it was built from.
    pub fn sections<'a>(&self, courses: &'a [Course]) -> Vec<&'a Section> {
        self.indices
            .iter()
            .zip(courses)
            .filter_map(|(&i, course)| course.sections.get(i))
            .collect()
    }
}

/// Evaluate one index tuple against its courses.
///
/// Returns `None` if any pair of the resolved sections conflicts, or if
/// the tuple doesn't resolve (wrong length or an index out of range).
/// Otherwise returns the schedule with its aggregate score. Every pair is
/// tested, not just adjacent ones, and only pairs from distinct courses
/// are ever compared, so a section is never tested against itself.
pub fn evaluate(courses: &[Course], indices: &[usize]) -> Option<ScoredSchedule> {
    if indices.len() != courses.len() {
        return None;
    }

    let mut sections = Vec::with_capacity(indices.len());
    for (&index, course) in indices.iter().zip(courses) {
        sections.push(course.sections.get(index)?);
    }

    for (i, a) in sections.iter().enumerate() {
        for b in &sections[i + 1..] {
            if a.conflicts_with(b) {
                trace!(?indices, a = %a.course_code, b = %b.course_code, "conflict");
                return None;
            }
        }
    }

    // A schedule with no sections has no time-of-day cost.
    let score = if sections.is_empty() {
        1.0
    } else {
        sections.iter().map(|s| s.score()).sum::<f64>() / sections.len() as f64
    };

    Some(ScoredSchedule {
        indices: indices.to_vec(),
        score,
    })
}

/// Enumerate every conflict-free combination of one section per course.
///
/// Results come out in generator order, unranked; see
/// [`rank_schedules`](super::rank_schedules) for best-first ordering.
/// Callers that only want the first few valid schedules can instead drive
/// [`Combinations`] themselves and stop early, since [`evaluate`] is
/// per-tuple.
pub fn valid_schedules(courses: &[Course]) -> Vec<ScoredSchedule> {
    let combos = Combinations::for_courses(courses);
    let total = combos.total();

    let schedules: Vec<_> = combos
        .filter_map(|indices| evaluate(courses, &indices))
        .collect();

    debug!(
        courses = courses.len(),
        candidates = %total,
        valid = schedules.len(),
        "schedule enumeration complete"
    );

    schedules
}
