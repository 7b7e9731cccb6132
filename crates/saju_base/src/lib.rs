//! Table-driven Four-Pillars (사주) calculations.
//!
//! This crate provides:
//! - Stem, branch, element and ten-relation tables
//! - The 60-term ganji cycle and pillar construction
//! - Two-hour time-slot resolution and hour-pillar derivation
//! - Element tally and remedial-element (용신) selection
//! - Decade (대운) and annual (세운) fortune timelines
//!
//! Year, month and day pillars are never computed here: they arrive as
//! resolved calendar facts. Everything in this crate is a pure function over
//! immutable values.

pub mod branch;
pub mod chart;
pub mod element;
pub mod error;
pub mod fortune;
pub mod ganji;
pub mod pillar;
pub mod solar_term;
pub mod stem;
pub mod tally;
pub mod ten_relation;
pub mod time_slot;

pub use branch::{ALL_BRANCHES, Branch};
pub use chart::{BirthInfo, CalendarFacts, ChartConfig, ChartMeta, DateKind, SajuChart, compute_chart};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use error::SajuError;
pub use fortune::{
    DecadeConfig, DecadeFortunePeriod, DecadeTimeline, Gender, OnsetRounding, WalkDirection,
    YearFortunePeriod, YearStatus, decade_fortunes, onset_age, onset_days, walk_direction,
    year_fortune, year_fortunes,
};
pub use ganji::{GANJI_CYCLE_LEN, GANJI_EPOCH_YEAR, Ganji, all_ganji};
pub use pillar::{Pillar, PillarPosition};
pub use solar_term::{ALL_SOLAR_TERMS, SolarTerm, SolarTermDate};
pub use stem::{ALL_STEMS, Stem};
pub use tally::{ElementCount, remedial_element};
pub use ten_relation::{TenRelation, branch_ten_relation, ten_relation};
pub use time_slot::{DayBoundary, TimeSlot, hour_ganji, hour_stem, is_late_night, time_slot};
