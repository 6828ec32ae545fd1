//! Course schedule builder core.
//!
//! Given several courses, each with multiple candidate sections, this
//! crate enumerates every combination of one section per course that has
//! zero pairwise time conflicts, and scores the survivors so the nicest
//! schedules (classes centered in the day) can be shown first.

pub mod catalog;
pub mod domain;
pub mod planner;
