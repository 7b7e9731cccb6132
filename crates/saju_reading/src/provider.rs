//! The calendar fact provider seam.

use saju_base::{CalendarFacts, DateKind, SolarTermDate};

/// Source of resolved calendar records and solar-term onsets.
///
/// Implementations are authoritative: `None` means the record does not
/// exist, and callers turn that into a hard failure.
pub trait CalendarFactProvider {
    /// Resolve a solar or lunar date to its calendar record.
    fn resolve(
        &self,
        kind: DateKind,
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    ) -> Option<CalendarFacts>;

    /// Solar-term onsets for `year` and the year before it, in date order.
    fn term_dates(&self, year: i32) -> Option<Vec<SolarTermDate>>;
}

impl<P: CalendarFactProvider + ?Sized> CalendarFactProvider for &P {
    fn resolve(
        &self,
        kind: DateKind,
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    ) -> Option<CalendarFacts> {
        (**self).resolve(kind, year, month, day, leap_month)
    }

    fn term_dates(&self, year: i32) -> Option<Vec<SolarTermDate>> {
        (**self).term_dates(year)
    }
}
