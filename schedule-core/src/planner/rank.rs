//! Ordering of valid schedules for presentation.

use super::evaluate::ScoredSchedule;

/// Sort schedules best-first.
///
/// Primary key is score, descending; ties break on the index tuple so
/// the ordering is deterministic for equal scores.
pub fn rank_schedules(mut schedules: Vec<ScoredSchedule>) -> Vec<ScoredSchedule> {
    schedules.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.indices.cmp(&b.indices))
    });
    schedules
}

/// Keep only the `limit` best schedules.
///
/// Convenience over [`rank_schedules`] for callers that paginate.
pub fn top_schedules(schedules: Vec<ScoredSchedule>, limit: usize) -> Vec<ScoredSchedule> {
    let mut ranked = rank_schedules(schedules);
    ranked.truncate(limit);
    ranked
}
