//! Schedule search: combination generation, conflict filtering, ranking.
//!
//! The search is a one-shot, in-memory enumeration: `Combinations` walks
//! the tuple space lazily, `evaluate` accepts or rejects each tuple
//! wholly on pairwise conflicts, and `rank_schedules` orders the
//! survivors best-first.

mod combos;
mod evaluate;
mod rank;

pub use combos::Combinations;
pub use evaluate::{ScoredSchedule, evaluate, valid_schedules};
pub use rank::{rank_schedules, top_schedules};
