//! Decade fortune (대운) timeline.
//!
//! Periods walk the sexagenary cycle from the month pillar, one step per
//! period, forward or backward depending on gender and the year stem's
//! polarity. The first period starts at the onset age: the day distance from
//! birth to the governing month-opening solar term, at 3 days per year. Each
//! period then spans exactly 10 years.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::error::SajuError;
use crate::ganji::Ganji;
use crate::solar_term::{SolarTerm, SolarTermDate};
use crate::stem::Stem;

/// Days of distance that count as one year of onset age.
pub const DAYS_PER_FORTUNE_YEAR: i64 = 3;

/// Length of every decade period in years.
pub const YEARS_PER_DECADE: u16 = 10;

/// Default number of periods in a timeline.
pub const DEFAULT_DECADE_PERIODS: u8 = 10;

/// Smallest and largest timeline accepted by [`decade_fortunes`].
pub const MIN_DECADE_PERIODS: u8 = 8;
pub const MAX_DECADE_PERIODS: u8 = 12;

/// Longest gap between consecutive month-opening terms at day resolution.
/// A governing term farther from birth than this belongs to another year.
pub const MAX_TERM_DISTANCE_DAYS: i64 = 32;

/// Onset age bounds after rounding.
pub const MIN_ONSET_AGE: u16 = 1;
pub const MAX_ONSET_AGE: u16 = 10;

/// Declared gender of the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse `male`/`female` or `남`/`여`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "남" | "남자" => Some(Self::Male),
            "female" | "f" | "여" | "여자" => Some(Self::Female),
            _ => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Male => 0,
            Self::Female => 1,
        }
    }
}

/// Direction of the walk through the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkDirection {
    /// 순행: index + 1 per period.
    Forward,
    /// 역행: index - 1 per period.
    Backward,
}

impl WalkDirection {
    /// Cycle step per period (+1 or -1).
    pub const fn step(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Rows: gender (male, female). Columns: year-stem polarity (yang, yin).
const DIRECTION_TABLE: [[WalkDirection; 2]; 2] = [
    [WalkDirection::Forward, WalkDirection::Backward],
    [WalkDirection::Backward, WalkDirection::Forward],
];

/// Walk direction for a gender and year-stem polarity.
pub const fn walk_direction(gender: Gender, year_polarity: Polarity) -> WalkDirection {
    DIRECTION_TABLE[gender.index()][year_polarity.index() as usize]
}

/// How a day distance rounds to whole years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnsetRounding {
    /// Remainder 1 drops, remainder 2 rounds up.
    #[default]
    Nearest,
    Floor,
    Ceil,
}

/// Decade timeline settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecadeConfig {
    /// Number of periods to generate.
    pub period_count: u8,
    /// Day-to-year rounding for the onset age.
    pub rounding: OnsetRounding,
}

impl Default for DecadeConfig {
    fn default() -> Self {
        Self {
            period_count: DEFAULT_DECADE_PERIODS,
            rounding: OnsetRounding::Nearest,
        }
    }
}

/// One decade period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecadeFortunePeriod {
    /// 1-indexed position in the timeline.
    pub order: u8,
    pub ganji: Ganji,
    pub stem: Stem,
    pub branch: Branch,
    /// Element of the period's stem.
    pub element: Element,
    /// First age covered, inclusive.
    pub start_age: u16,
    /// Last age covered, inclusive.
    pub end_age: u16,
}

impl DecadeFortunePeriod {
    pub fn contains_age(&self, age: u16) -> bool {
        self.start_age <= age && age <= self.end_age
    }
}

/// A complete decade timeline for one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecadeTimeline {
    pub direction: WalkDirection,
    /// Day distance to the governing term.
    pub onset_days: i64,
    /// Age at which the first period starts.
    pub onset_age: u16,
    pub periods: Vec<DecadeFortunePeriod>,
}

impl DecadeTimeline {
    /// The period covering `age`, if any.
    pub fn period_at_age(&self, age: u16) -> Option<&DecadeFortunePeriod> {
        self.periods.iter().find(|p| p.contains_age(age))
    }
}

/// Round a day distance to an onset age.
pub fn onset_age(days: i64, rounding: OnsetRounding) -> u16 {
    let days = days.max(0);
    let years = match rounding {
        OnsetRounding::Nearest => (days + 1) / DAYS_PER_FORTUNE_YEAR,
        OnsetRounding::Floor => days / DAYS_PER_FORTUNE_YEAR,
        OnsetRounding::Ceil => (days + DAYS_PER_FORTUNE_YEAR - 1) / DAYS_PER_FORTUNE_YEAR,
    };
    years.clamp(MIN_ONSET_AGE as i64, MAX_ONSET_AGE as i64) as u16
}

/// Day distance between birth and the term governing the onset.
///
/// Backward walks count from the latest onset of the month's own opening
/// term on or before birth. Forward walks count to the earliest onset of the
/// following month's opening term on or after birth. Only onsets within
/// [`MAX_TERM_DISTANCE_DAYS`] of birth qualify.
pub fn onset_days(
    month_branch: Branch,
    birth: NaiveDate,
    direction: WalkDirection,
    term_dates: &[SolarTermDate],
) -> Result<i64, SajuError> {
    let onsets_of = |term: SolarTerm| {
        term_dates
            .iter()
            .filter(move |t| t.term == term)
            .map(|t| t.date)
            .filter(move |&d| (d - birth).num_days().abs() <= MAX_TERM_DISTANCE_DAYS)
    };
    match direction {
        WalkDirection::Backward => {
            let term = SolarTerm::opening_term_for(month_branch);
            let governing = onsets_of(term)
                .filter(|&d| d <= birth)
                .max()
                .ok_or_else(|| {
                    SajuError::MissingCalendarFact(format!(
                        "no {term} onset within {MAX_TERM_DISTANCE_DAYS} days before {birth}"
                    ))
                })?;
            Ok((birth - governing).num_days())
        }
        WalkDirection::Forward => {
            let term = SolarTerm::opening_term_for(month_branch.offset(1));
            let next = onsets_of(term)
                .filter(|&d| d >= birth)
                .min()
                .ok_or_else(|| {
                    SajuError::MissingCalendarFact(format!(
                        "no {term} onset within {MAX_TERM_DISTANCE_DAYS} days after {birth}"
                    ))
                })?;
            Ok((next - birth).num_days())
        }
    }
}

/// Validate a solar calendar date.
pub fn solar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, SajuError> {
    if !(1..=12).contains(&month) {
        return Err(SajuError::InvalidInput("month must be in 1..=12"));
    }
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(SajuError::InvalidInput("day is not valid for the month"))
}

/// Generate the decade timeline.
///
/// `term_dates` must contain the month-opening terms around the birth date,
/// normally the birth year and the year before it, plus the following year
/// for forward walks from December. A missing term is fatal.
#[allow(clippy::too_many_arguments)]
pub fn decade_fortunes(
    year_stem: Stem,
    month_ganji: Ganji,
    gender: Gender,
    solar_year: i32,
    solar_month: u32,
    solar_day: u32,
    term_dates: &[SolarTermDate],
    config: &DecadeConfig,
) -> Result<DecadeTimeline, SajuError> {
    let birth = solar_date(solar_year, solar_month, solar_day)?;
    if !(MIN_DECADE_PERIODS..=MAX_DECADE_PERIODS).contains(&config.period_count) {
        return Err(SajuError::InvalidInput("decade period count must be in 8..=12"));
    }

    let direction = walk_direction(gender, year_stem.polarity());
    let days = onset_days(month_ganji.branch(), birth, direction, term_dates)?;
    let onset = onset_age(days, config.rounding);
    tracing::debug!(?direction, days, onset, "decade onset resolved");

    let periods = (1..=config.period_count)
        .map(|order| {
            let ganji = month_ganji.step(direction.step() * order as i32);
            let start_age = onset + YEARS_PER_DECADE * (order as u16 - 1);
            DecadeFortunePeriod {
                order,
                ganji,
                stem: ganji.stem(),
                branch: ganji.branch(),
                element: ganji.element(),
                start_age,
                end_age: start_age + YEARS_PER_DECADE - 1,
            }
        })
        .collect();

    Ok(DecadeTimeline {
        direction,
        onset_days: days,
        onset_age: onset,
        periods,
    })
}
