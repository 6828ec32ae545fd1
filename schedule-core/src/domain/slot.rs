//! Meeting patterns and the conflict test between them.

use std::fmt;

use super::time::ClockTime;
use super::weekday::DaySet;

/// Error returned when constructing an invalid timed slot.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time slot: {reason}")]
pub struct InvalidSlot {
    reason: &'static str,
}

/// When a section meets: either a fixed weekly pattern or no fixed time.
///
/// The asynchronous branch carries no days and no times by construction,
/// so there is no "maybe set" start/end to reason about.
///
/// # Examples
///
/// ```
/// use schedule_core::domain::{ClockTime, DaySet, DayWindow, TimeSlot};
///
/// let w = DayWindow::default();
/// let mwf = TimeSlot::timed(
///     DaySet::parse("MWF").unwrap(),
///     ClockTime::parse_12h("9:00 AM", w).unwrap(),
///     ClockTime::parse_12h("10:00 AM", w).unwrap(),
/// ).unwrap();
/// let tr = TimeSlot::timed(
///     DaySet::parse("TR").unwrap(),
///     ClockTime::parse_12h("9:00 AM", w).unwrap(),
///     ClockTime::parse_12h("10:00 AM", w).unwrap(),
/// ).unwrap();
///
/// // Same hours, disjoint days: no conflict
/// assert!(!mwf.conflicts_with(&tr));
/// assert!(!TimeSlot::Asynchronous.conflicts_with(&mwf));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TimeSlot {
    /// No fixed meeting time.
    Asynchronous,
    /// Meets on `days` from `start` to `end`, same-day (no overnight wrap).
    Timed {
        days: DaySet,
        start: ClockTime,
        end: ClockTime,
    },
}

impl TimeSlot {
    /// Construct a timed slot, validating its invariants.
    ///
    /// The day set must be non-empty and `start` must not be after `end`.
    pub fn timed(days: DaySet, start: ClockTime, end: ClockTime) -> Result<Self, InvalidSlot> {
        if days.is_empty() {
            return Err(InvalidSlot {
                reason: "timed slot needs at least one day",
            });
        }
        if start.time() > end.time() {
            return Err(InvalidSlot {
                reason: "start must not be after end",
            });
        }
        Ok(TimeSlot::Timed { days, start, end })
    }

    /// True if this slot has no fixed meeting time.
    pub fn is_async(&self) -> bool {
        matches!(self, TimeSlot::Asynchronous)
    }

    /// The meeting days, if any.
    pub fn days(&self) -> Option<DaySet> {
        match self {
            TimeSlot::Asynchronous => None,
            TimeSlot::Timed { days, .. } => Some(*days),
        }
    }

    /// True if the two slots cannot both be attended.
    ///
    /// Two slots conflict iff both are timed, they share at least one
    /// weekday, and their intervals overlap on the window scale. The
    /// overlap test is open-interval: slots that only touch at an
    /// endpoint (one ends exactly when the other starts) do not conflict.
    /// The test is symmetric.
    pub fn conflicts_with(&self, other: &TimeSlot) -> bool {
        let (TimeSlot::Timed { days, start, end }, TimeSlot::Timed {
            days: other_days,
            start: other_start,
            end: other_end,
        }) = (self, other)
        else {
            return false;
        };

        if !days.intersects(*other_days) {
            return false;
        }

        let start = start.window_percent();
        let end = end.window_percent();
        let o_start = other_start.window_percent();
        let o_end = other_end.window_percent();

        (start < o_start && o_start < end)
            || (start < o_end && o_end < end)
            || (o_start < start && start < o_end)
            || (o_start < end && end < o_end)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeSlot::Asynchronous => f.write_str("Asynchronous"),
            TimeSlot::Timed { days, start, end } => write!(f, "{days} {start} - {end}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DayWindow;

    fn slot(days: &str, start: &str, end: &str) -> TimeSlot {
        let w = DayWindow::default();
        TimeSlot::timed(
            DaySet::parse(days).unwrap(),
            ClockTime::parse_12h(start, w).unwrap(),
            ClockTime::parse_12h(end, w).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn async_never_conflicts() {
        let timed = slot("MWF", "9:00 AM", "10:00 AM");

        assert!(!TimeSlot::Asynchronous.conflicts_with(&TimeSlot::Asynchronous));
        assert!(!TimeSlot::Asynchronous.conflicts_with(&timed));
        assert!(!timed.conflicts_with(&TimeSlot::Asynchronous));
    }

    #[test]
    fn disjoint_days_never_conflict() {
        let a = slot("MWF", "9:00 AM", "10:00 AM");
        let b = slot("TR", "9:00 AM", "10:00 AM");

        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn overlapping_interval_conflicts() {
        let a = slot("MWF", "9:00 AM", "10:00 AM");
        let b = slot("WF", "9:30 AM", "10:30 AM");

        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn nested_interval_conflicts() {
        let outer = slot("M", "9:00 AM", "12:00 PM");
        let inner = slot("M", "10:00 AM", "11:00 AM");

        assert!(outer.conflicts_with(&inner));
        assert!(inner.conflicts_with(&outer));
    }

    #[test]
    fn touching_endpoints_do_not_conflict() {
        let a = slot("MWF", "9:00 AM", "10:00 AM");
        let b = slot("MWF", "10:00 AM", "11:00 AM");

        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn separated_intervals_do_not_conflict() {
        let a = slot("MWF", "9:00 AM", "10:00 AM");
        let b = slot("MWF", "2:00 PM", "3:00 PM");

        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn one_shared_day_is_enough() {
        let a = slot("MTWRF", "9:00 AM", "10:00 AM");
        let b = slot("F", "9:30 AM", "10:30 AM");

        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn timed_requires_nonempty_days() {
        let w = DayWindow::default();
        let start = ClockTime::parse_12h("9:00 AM", w).unwrap();
        let end = ClockTime::parse_12h("10:00 AM", w).unwrap();

        assert!(TimeSlot::timed(DaySet::EMPTY, start, end).is_err());
    }

    #[test]
    fn timed_requires_start_not_after_end() {
        let w = DayWindow::default();
        let days = DaySet::parse("MWF").unwrap();
        let nine = ClockTime::parse_12h("9:00 AM", w).unwrap();
        let ten = ClockTime::parse_12h("10:00 AM", w).unwrap();

        assert!(TimeSlot::timed(days, ten, nine).is_err());
        // Degenerate zero-length slot is allowed
        assert!(TimeSlot::timed(days, nine, nine).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(TimeSlot::Asynchronous.to_string(), "Asynchronous");
        assert_eq!(
            slot("MWF", "9:00 AM", "10:00 AM").to_string(),
            "MWF 9:00 AM - 10:00 AM"
        );
    }

    #[test]
    fn serde_tags_the_variant() {
        let json = serde_json::to_string(&TimeSlot::Asynchronous).unwrap();
        assert!(json.contains("asynchronous"));

        let timed = slot("MWF", "9:00 AM", "10:00 AM");
        let json = serde_json::to_string(&timed).unwrap();
        let back: TimeSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, timed);
    }
}
