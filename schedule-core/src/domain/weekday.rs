//! Weekdays and sets of weekdays.
//!
//! Catalog text abbreviates meeting days as a run of single letters,
//! one per weekday ("MWF", "TR"). `DaySet` parses that form and answers
//! the only question the conflict model asks of it: do two sets share
//! a day?

use std::fmt;

/// Error returned when parsing an unrecognized day letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized day letter: {0:?}")]
pub struct InvalidDay(pub char);

/// A day of the week.
///
/// The single-letter catalog abbreviations are `M T W R F S U` for
/// Monday through Sunday (Thursday is `R`, Sunday is `U`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays in Monday-first order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Parse a single-letter catalog abbreviation.
    pub fn from_letter(letter: char) -> Result<Self, InvalidDay> {
        match letter {
            'M' => Ok(Weekday::Monday),
            'T' => Ok(Weekday::Tuesday),
            'W' => Ok(Weekday::Wednesday),
            'R' => Ok(Weekday::Thursday),
            'F' => Ok(Weekday::Friday),
            'S' => Ok(Weekday::Saturday),
            'U' => Ok(Weekday::Sunday),
            other => Err(InvalidDay(other)),
        }
    }

    /// The single-letter catalog abbreviation.
    pub fn letter(self) -> char {
        match self {
            Weekday::Monday => 'M',
            Weekday::Tuesday => 'T',
            Weekday::Wednesday => 'W',
            Weekday::Thursday => 'R',
            Weekday::Friday => 'F',
            Weekday::Saturday => 'S',
            Weekday::Sunday => 'U',
        }
    }

    /// The full English name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Weekday::Monday => 1 << 0,
            Weekday::Tuesday => 1 << 1,
            Weekday::Wednesday => 1 << 2,
            Weekday::Thursday => 1 << 3,
            Weekday::Friday => 1 << 4,
            Weekday::Saturday => 1 << 5,
            Weekday::Sunday => 1 << 6,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of weekdays, stored as a 7-bit mask.
///
/// # Examples
///
/// ```
/// use schedule_core::domain::{DaySet, Weekday};
///
/// let mwf = DaySet::parse("MWF").unwrap();
/// let tr = DaySet::parse("TR").unwrap();
///
/// assert!(mwf.contains(Weekday::Wednesday));
/// assert!(!mwf.intersects(tr));
/// assert_eq!(mwf.to_string(), "MWF");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaySet(u8);

impl DaySet {
    /// The empty set.
    pub const EMPTY: DaySet = DaySet(0);

    /// Parse a run of day letters like "MWF".
    ///
    /// Duplicate letters are tolerated; an unrecognized letter is an error.
    pub fn parse(s: &str) -> Result<Self, InvalidDay> {
        let mut set = DaySet::EMPTY;
        for letter in s.chars() {
            set.insert(Weekday::from_letter(letter)?);
        }
        Ok(set)
    }

    /// Add a day to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= day.bit();
    }

    /// True if the set contains `day`.
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & day.bit() != 0
    }

    /// True if the two sets share at least one day.
    pub fn intersects(&self, other: DaySet) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of days in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// True if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the days in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = DaySet::EMPTY;
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in self.iter() {
            write!(f, "{}", day.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaySet({})", self)
    }
}

impl serde::Serialize for DaySet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for DaySet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        DaySet::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_letters() {
        let set = DaySet::parse("MWF").unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains(Weekday::Monday));
        assert!(set.contains(Weekday::Wednesday));
        assert!(set.contains(Weekday::Friday));
        assert!(!set.contains(Weekday::Tuesday));
    }

    #[test]
    fn thursday_is_r_sunday_is_u() {
        let set = DaySet::parse("RU").unwrap();
        assert!(set.contains(Weekday::Thursday));
        assert!(set.contains(Weekday::Sunday));
    }

    #[test]
    fn parse_rejects_unknown_letter() {
        assert_eq!(DaySet::parse("MXF"), Err(InvalidDay('X')));
        assert_eq!(DaySet::parse("mwf"), Err(InvalidDay('m')));
        assert_eq!(DaySet::parse("M F"), Err(InvalidDay(' ')));
    }

    #[test]
    fn parse_empty_is_empty_set() {
        let set = DaySet::parse("").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn duplicates_collapse() {
        let set = DaySet::parse("MMM").unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn intersects() {
        let mwf = DaySet::parse("MWF").unwrap();
        let tr = DaySet::parse("TR").unwrap();
        let wr = DaySet::parse("WR").unwrap();

        assert!(!mwf.intersects(tr));
        assert!(!tr.intersects(mwf));
        assert!(mwf.intersects(wr));
        assert!(tr.intersects(wr));
        assert!(!mwf.intersects(DaySet::EMPTY));
    }

    #[test]
    fn display_in_week_order() {
        // Input order doesn't matter; display is Monday-first
        let set = DaySet::parse("FWM").unwrap();
        assert_eq!(set.to_string(), "MWF");
    }

    #[test]
    fn iterates_in_week_order() {
        let set = DaySet::parse("RUM").unwrap();
        let days: Vec<_> = set.iter().collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Thursday, Weekday::Sunday]);
    }

    #[test]
    fn letter_roundtrip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::from_letter(day.letter()), Ok(day));
        }
    }

    #[test]
    fn serde_roundtrip_as_letters() {
        let set = DaySet::parse("MWF").unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "\"MWF\"");
        let back: DaySet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
