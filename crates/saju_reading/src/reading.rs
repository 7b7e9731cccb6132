//! Reading orchestration: fetch calendar facts, build the chart and project
//! both fortune timelines.

use saju_base::{
    ChartConfig, DateKind, DecadeTimeline, Gender, SajuChart, SajuError, WalkDirection,
    YearFortunePeriod, compute_chart, decade_fortunes, time_slot, walk_direction, year_fortunes,
};
use serde::{Deserialize, Serialize};

use crate::provider::CalendarFactProvider;

/// Years covered by the annual timeline when the request names no range.
pub const DEFAULT_YEAR_SPAN: i32 = 100;

/// A birth to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingRequest {
    #[serde(default)]
    pub date_kind: DateKind,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default)]
    pub leap_month: bool,
    #[serde(default)]
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    #[serde(default)]
    pub time_unknown: bool,
    pub gender: Gender,
    /// First year of the annual timeline (default: the solar birth year).
    #[serde(default)]
    pub from_year: Option<i32>,
    /// Last year of the annual timeline (default: 99 years after `from_year`).
    #[serde(default)]
    pub to_year: Option<i32>,
}

impl ReadingRequest {
    /// A solar-date request with a known birth time.
    pub fn solar(year: i32, month: u32, day: u32, hour: u32, minute: u32, gender: Gender) -> Self {
        Self {
            date_kind: DateKind::Solar,
            year,
            month,
            day,
            leap_month: false,
            hour,
            minute,
            time_unknown: false,
            gender,
            from_year: None,
            to_year: None,
        }
    }

    fn validate(&self) -> Result<(), SajuError> {
        if !(1..=12).contains(&self.month) {
            return Err(SajuError::InvalidInput("month must be in 1..=12"));
        }
        if !(1..=31).contains(&self.day) {
            return Err(SajuError::InvalidInput("day must be in 1..=31"));
        }
        if !self.time_unknown {
            time_slot(self.hour, self.minute)?;
        }
        Ok(())
    }
}

/// A complete reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub chart: SajuChart,
    pub decade: DecadeTimeline,
    pub years: Vec<YearFortunePeriod>,
}

fn unreadable(position: &str, code: &str) -> SajuError {
    SajuError::MissingCalendarFact(format!("unreadable {position} ganji {code:?}"))
}

/// Compute a reading end to end.
///
/// Fails when any calendar record or term year is missing. No partial
/// reading is returned.
pub fn compute_reading<P: CalendarFactProvider + ?Sized>(
    provider: &P,
    request: &ReadingRequest,
    config: &ChartConfig,
) -> Result<Reading, SajuError> {
    request.validate()?;

    let facts = provider
        .resolve(
            request.date_kind,
            request.year,
            request.month,
            request.day,
            request.leap_month,
        )
        .ok_or_else(|| {
            SajuError::MissingCalendarFact(format!(
                "no {:?} calendar record for {}-{:02}-{:02}{}",
                request.date_kind,
                request.year,
                request.month,
                request.day,
                if request.leap_month { " (leap)" } else { "" },
            ))
        })?;

    let chart = compute_chart(
        &facts,
        request.hour,
        request.minute,
        request.time_unknown,
        config,
    )?;

    let year_stem = chart
        .year
        .stem
        .ok_or_else(|| unreadable("year", &facts.year_ganji))?;
    let month_ganji = chart
        .month
        .ganji()
        .ok_or_else(|| unreadable("month", &facts.month_ganji))?;
    let day_stem = chart
        .day_stem()
        .ok_or_else(|| unreadable("day", &facts.day_ganji))?;

    let missing_terms =
        |year: i32| SajuError::MissingCalendarFact(format!("no solar terms for {year}"));
    let mut terms = provider
        .term_dates(facts.solar_year)
        .ok_or_else(|| missing_terms(facts.solar_year))?;
    let direction = walk_direction(request.gender, year_stem.polarity());
    if direction == WalkDirection::Forward && facts.solar_month == 12 {
        let next_year = facts.solar_year + 1;
        terms.extend(
            provider
                .term_dates(next_year)
                .ok_or_else(|| missing_terms(next_year))?,
        );
    }
    tracing::debug!(terms = terms.len(), ?direction, "solar terms fetched");

    let decade = decade_fortunes(
        year_stem,
        month_ganji,
        request.gender,
        facts.solar_year,
        facts.solar_month,
        facts.solar_day,
        &terms,
        &config.decade,
    )?;

    let from = request.from_year.unwrap_or(facts.solar_year);
    let to = match request.to_year {
        Some(to) => to,
        None => from
            .checked_add(DEFAULT_YEAR_SPAN - 1)
            .ok_or(SajuError::InvalidInput("default year range overflows"))?,
    };
    let years = year_fortunes(from, to, day_stem, chart.remedial)?;

    tracing::debug!(
        day = %chart.day.code(),
        remedial = %chart.remedial,
        onset_age = decade.onset_age,
        years = years.len(),
        "reading computed"
    );

    Ok(Reading {
        chart,
        decade,
        years,
    })
}
