//! Fortune timelines: decade periods (대운) and annual years (세운).

pub mod decade;
pub mod year;

pub use decade::{
    DecadeConfig, DecadeFortunePeriod, DecadeTimeline, Gender, OnsetRounding, WalkDirection,
    decade_fortunes, onset_age, onset_days, walk_direction,
};
pub use year::{YearFortunePeriod, YearStatus, year_fortune, year_fortunes};
