//! Two-hour time slots (시) and hour-pillar derivation.
//!
//! Slot 0 (자시) spans [23:30, 01:30); every later slot is a closed-open
//! two-hour window starting at :30 past an odd hour, ending with slot 11
//! (해시) at [21:30, 23:30). The hour stem is not a calendar fact: it follows
//! from the day stem through the 5-way start table (시두법) and advances one
//! stem per slot.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::ganji::Ganji;
use crate::stem::Stem;

/// Slot start, in minutes since midnight, indexed by slot (0 = 23:30).
pub const SLOT_STARTS: [u16; 12] = [
    23 * 60 + 30,
    60 + 30,
    3 * 60 + 30,
    5 * 60 + 30,
    7 * 60 + 30,
    9 * 60 + 30,
    11 * 60 + 30,
    13 * 60 + 30,
    15 * 60 + 30,
    17 * 60 + 30,
    19 * 60 + 30,
    21 * 60 + 30,
];

/// Slot-0 hour stem for each day-stem pair {갑,기} {을,경} {병,신} {정,임} {무,계},
/// indexed by day stem index mod 5.
pub const HOUR_STEM_START: [Stem; 5] = [Stem::Gap, Stem::Byeong, Stem::Mu, Stem::Gyeong, Stem::Im];

/// Which calendar day a birth in [23:30, 24:00) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayBoundary {
    /// Keep the calendar date's day pillar; the late window is that day's slot 0.
    #[default]
    SameDay,
    /// Advance the day pillar one step for the late window.
    NextDay,
}

/// One of the 12 two-hour slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Create from a slot index (0..=11).
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 12).then_some(Self(index))
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    /// Branch of the slot (slot 0 → 자).
    pub fn branch(self) -> Branch {
        Branch::offset(Branch::Ja, self.0 as i32)
    }

    /// Start of the slot in minutes since midnight.
    pub const fn start_minutes(self) -> u16 {
        SLOT_STARTS[self.0 as usize]
    }
}

fn validate_clock(hour: u32, minute: u32) -> Result<(), SajuError> {
    if hour > 23 {
        return Err(SajuError::InvalidInput("hour must be in 0..=23"));
    }
    if minute > 59 {
        return Err(SajuError::InvalidInput("minute must be in 0..=59"));
    }
    Ok(())
}

/// Resolve a clock time to its slot.
pub fn time_slot(hour: u32, minute: u32) -> Result<TimeSlot, SajuError> {
    validate_clock(hour, minute)?;
    let m = (hour * 60 + minute) as u16;
    let first_boundary = SLOT_STARTS[1];
    let index = if m >= SLOT_STARTS[0] || m < first_boundary {
        0
    } else {
        ((m - first_boundary) / 120 + 1) as u8
    };
    Ok(TimeSlot(index))
}

/// Whether a clock time falls in the late part of slot 0, before midnight.
pub fn is_late_night(hour: u32, minute: u32) -> bool {
    hour * 60 + minute >= SLOT_STARTS[0] as u32
}

/// Hour stem for a day stem and slot.
pub fn hour_stem(day_stem: Stem, slot: TimeSlot) -> Stem {
    let start = HOUR_STEM_START[(day_stem.index() % 5) as usize];
    start.offset(slot.index() as i32)
}

/// Hour pillar ganji for a day stem and slot.
pub fn hour_ganji(day_stem: Stem, slot: TimeSlot) -> Ganji {
    // Start stems are yang, so start+자 sits at cycle index 6 * stem.
    let start = HOUR_STEM_START[(day_stem.index() % 5) as usize];
    Ganji::from_index(start.index() * 6).step(slot.index() as i32)
}
