//! Domain types for the schedule builder.
//!
//! This module contains the core domain model: times, day sets, meeting
//! slots, and sections. All types enforce their invariants at
//! construction time and are immutable afterwards, so the planner can
//! treat them as plain values.

mod section;
mod slot;
mod time;
mod weekday;

pub use section::{Course, Section};
pub use slot::{InvalidSlot, TimeSlot};
pub use time::{ClockTime, DayWindow, InvalidTime, InvalidWindow};
pub use weekday::{DaySet, InvalidDay, Weekday};
