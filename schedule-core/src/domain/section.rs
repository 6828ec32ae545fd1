//! Course sections and the courses that own them.

use super::slot::TimeSlot;

/// One offering of a course a student could register for.
///
/// Sections are built once from parsed catalog input and never mutated.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Course code, e.g. "CS 2500".
    pub course_code: String,
    /// Section identifier within the course, e.g. "L1".
    pub section_id: String,
    /// Credit value, kept as the raw catalog text (may be a range).
    pub credits: String,
    /// When the section meets.
    pub slot: TimeSlot,
}

impl Section {
    /// Create a section from its parsed identity fields and slot.
    pub fn new(
        course_code: impl Into<String>,
        section_id: impl Into<String>,
        credits: impl Into<String>,
        slot: TimeSlot,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            section_id: section_id.into(),
            credits: credits.into(),
            slot,
        }
    }

    /// True if this section's meeting times collide with `other`'s.
    ///
    /// Callers compare sections drawn from distinct courses, so there is
    /// no self-comparison to exempt here; the test is purely on the slots.
    pub fn conflicts_with(&self, other: &Section) -> bool {
        self.slot.conflicts_with(&other.slot)
    }

    /// Niceness of this section's time, in `[0, 1]`, higher is better.
    ///
    /// An asynchronous section scores exactly 1: it imposes no
    /// time-of-day cost. A timed section scores by how close the midpoint
    /// of its interval sits to the middle of the day:
    /// `1 - |0.5 - (start + end) / 2|` on the raw 0-24 scale. Scoring
    /// deliberately uses the raw scale rather than the conflict window,
    /// so "centered" always means noon regardless of window bounds.
    pub fn score(&self) -> f64 {
        match &self.slot {
            TimeSlot::Asynchronous => 1.0,
            TimeSlot::Timed { start, end, .. } => {
                let midpoint = (start.raw_percent() + end.raw_percent()) / 2.0;
                1.0 - (0.5 - midpoint).abs()
            }
        }
    }
}

/// A course code with its ordered list of candidate sections.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course code shared by every section, e.g. "CS 2500".
    pub code: String,
    /// Candidate sections in catalog order.
    pub sections: Vec<Section>,
}

impl Course {
    /// Create a course from its code and candidate sections.
    pub fn new(code: impl Into<String>, sections: Vec<Section>) -> Self {
        Self {
            code: code.into(),
            sections,
        }
    }
}
