//! Parser for raw catalog text.
//!
//! Each non-blank line describes one section: identity fields followed by
//! either a weekly meeting pattern or the literal `ASYNC`:
//!
//! ```text
//! CS 2500 L1 4 MWF 9:00 AM - 10:00 AM
//! CS 2500 L2 4 TR 11:00 AM - 12:15 PM
//! ENG 1101 A 3 ASYNC
//! ```
//!
//! Lines starting with `#` are comments. Sections sharing a course code
//! are grouped into one [`Course`], first-seen order preserved.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    ClockTime, Course, DaySet, DayWindow, InvalidDay, InvalidSlot, InvalidTime, Section, TimeSlot,
};

/// subject, number, section id, credits, then the slot text
static SECTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]+)\s+(\d+[A-Z]*)\s+(\S+)\s+(\S+)\s+(.+?)\s*$").unwrap());

/// day letters, start time, end time
static TIMED_SLOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S+)\s+(.+?)\s*-\s*(.+)$").unwrap());

/// Error raised while parsing catalog text.
///
/// Construction failures are terminal for the offending record: the
/// caller must fix or drop the input before any schedule search runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The line doesn't match the section entry shape at all.
    #[error("line {line}: malformed section entry")]
    MalformedLine { line: usize },

    /// A time string couldn't be read as a 12-hour clock value.
    #[error(transparent)]
    Time(#[from] InvalidTime),

    /// The day-letter run contained an unrecognized character.
    #[error(transparent)]
    Day(#[from] InvalidDay),

    /// The parsed pieces don't form a valid slot (e.g. end before start).
    #[error(transparent)]
    Slot(#[from] InvalidSlot),
}

/// Parse catalog text into courses, threading one display window through
/// every constructed time.
///
/// # Examples
///
/// ```
/// use schedule_core::catalog::parse_catalog;
/// use schedule_core::domain::DayWindow;
///
/// let courses = parse_catalog(
///     "CS 2500 L1 4 MWF 9:00 AM - 10:00 AM\n\
///      CS 2500 L2 4 TR 11:00 AM - 12:15 PM\n\
///      ENG 1101 A 3 ASYNC\n",
///     DayWindow::default(),
/// ).unwrap();
///
/// assert_eq!(courses.len(), 2);
/// assert_eq!(courses[0].code, "CS 2500");
/// assert_eq!(courses[0].sections.len(), 2);
/// ```
pub fn parse_catalog(input: &str, window: DayWindow) -> Result<Vec<Course>, ParseError> {
    let mut courses: Vec<Course> = Vec::new();

    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let section = parse_section_line(line, line_no + 1, window)?;

        match courses.iter_mut().find(|c| c.code == section.course_code) {
            Some(course) => course.sections.push(section),
            None => courses.push(Course::new(section.course_code.clone(), vec![section])),
        }
    }

    Ok(courses)
}

/// Parse one section entry line.
fn parse_section_line(line: &str, line_no: usize, window: DayWindow) -> Result<Section, ParseError> {
    let captures = SECTION_LINE
        .captures(line)
        .ok_or(ParseError::MalformedLine { line: line_no })?;

    let code = format!("{} {}", &captures[1], &captures[2]);
    let section_id = captures[3].to_string();
    let credits = captures[4].to_string();
    let slot = parse_slot(&captures[5], line_no, window)?;

    Ok(Section::new(code, section_id, credits, slot))
}

/// Parse the slot portion of a line: `ASYNC` or `DAYS start - end`.
fn parse_slot(text: &str, line_no: usize, window: DayWindow) -> Result<TimeSlot, ParseError> {
    if text == "ASYNC" {
        return Ok(TimeSlot::Asynchronous);
    }

    let captures = TIMED_SLOT
        .captures(text)
        .ok_or(ParseError::MalformedLine { line: line_no })?;

    let days = DaySet::parse(&captures[1])?;
    let start = ClockTime::parse_12h(&captures[2], window)?;
    let end = ClockTime::parse_12h(&captures[3], window)?;

    Ok(TimeSlot::timed(days, start, end)?)
}
