//! Chart aggregate: four pillars, element tally and remedial element from
//! pre-resolved calendar facts and a clock time.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::SajuError;
use crate::fortune::decade::{DecadeConfig, solar_date};
use crate::ganji::Ganji;
use crate::pillar::{Pillar, PillarPosition};
use crate::solar_term::SolarTerm;
use crate::stem::Stem;
use crate::tally::{ElementCount, remedial_element};
use crate::time_slot::{DayBoundary, TimeSlot, hour_ganji, is_late_night, time_slot};

/// Which calendar a requested birth date is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateKind {
    #[default]
    Solar,
    Lunar,
}

/// One resolved calendar record, as supplied by a calendar fact provider.
///
/// Ganji fields are kept as the provider's raw codes; malformed codes
/// degrade the affected pillar instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFacts {
    pub solar_year: i32,
    pub solar_month: u32,
    pub solar_day: u32,
    pub lunar_year: i32,
    pub lunar_month: u32,
    pub lunar_day: u32,
    #[serde(default)]
    pub leap_month: bool,
    pub year_ganji: String,
    pub month_ganji: String,
    pub day_ganji: String,
    /// Solar term whose onset falls on this date, if any.
    #[serde(default)]
    pub solar_term: Option<SolarTerm>,
}

impl CalendarFacts {
    /// The solar date, validated.
    pub fn solar_date(&self) -> Result<NaiveDate, SajuError> {
        solar_date(self.solar_year, self.solar_month, self.solar_day)
    }
}

/// Chart computation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub day_boundary: DayBoundary,
    pub decade: DecadeConfig,
}

/// Birth metadata carried on the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthInfo {
    pub solar: NaiveDate,
    pub lunar_year: i32,
    pub lunar_month: u32,
    pub lunar_day: u32,
    pub leap_month: bool,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub time_unknown: bool,
    pub time_slot: Option<TimeSlot>,
}

/// Descriptive metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartMeta {
    /// Zodiac animal of the year pillar's branch (solar-term year).
    pub animal: &'static str,
    /// Zodiac animal of the lunar year.
    pub lunar_animal: &'static str,
    pub weekday: Weekday,
    pub solar_term: Option<SolarTerm>,
}

/// A computed Four-Pillars chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SajuChart {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
    pub elements: ElementCount,
    pub remedial: Element,
    pub birth: BirthInfo,
    pub meta: ChartMeta,
}

impl SajuChart {
    /// Pillars with their positions, year first.
    pub fn pillars(&self) -> [(PillarPosition, &Pillar); 4] {
        [
            (PillarPosition::Year, &self.year),
            (PillarPosition::Month, &self.month),
            (PillarPosition::Day, &self.day),
            (PillarPosition::Hour, &self.hour),
        ]
    }

    pub fn day_stem(&self) -> Option<Stem> {
        self.day.stem
    }
}

fn validate_facts(facts: &CalendarFacts) -> Result<NaiveDate, SajuError> {
    let solar = facts.solar_date()?;
    if !(1..=12).contains(&facts.lunar_month) {
        return Err(SajuError::InvalidInput("lunar month must be in 1..=12"));
    }
    if !(1..=30).contains(&facts.lunar_day) {
        return Err(SajuError::InvalidInput("lunar day must be in 1..=30"));
    }
    Ok(solar)
}

/// Year, month and day codes must parse; only the hour pillar may be unknown.
fn readable_ganji(position: &str, code: &str) -> Result<Ganji, SajuError> {
    Ganji::parse(code).ok_or_else(|| {
        SajuError::MissingCalendarFact(format!("unreadable {position} ganji {code:?}"))
    })
}

/// Compute a chart from calendar facts and a clock time.
///
/// With `time_unknown` the clock is ignored, the hour pillar is unknown and
/// the tally covers three pillars. An unreadable year, month or day code
/// fails the chart.
pub fn compute_chart(
    facts: &CalendarFacts,
    hour: u32,
    minute: u32,
    time_unknown: bool,
    config: &ChartConfig,
) -> Result<SajuChart, SajuError> {
    let solar = validate_facts(facts)?;
    let slot = if time_unknown {
        None
    } else {
        Some(time_slot(hour, minute)?)
    };

    let year_ganji = readable_ganji("year", &facts.year_ganji)?;
    let month_ganji = readable_ganji("month", &facts.month_ganji)?;
    let mut day_ganji = readable_ganji("day", &facts.day_ganji)?;
    if slot.is_some()
        && config.day_boundary == DayBoundary::NextDay
        && is_late_night(hour, minute)
    {
        day_ganji = day_ganji.step(1);
        tracing::debug!(day = %day_ganji, "late-night birth moved to next day pillar");
    }
    let day_stem = day_ganji.stem();

    let year = Pillar::from_ganji(year_ganji, Some(day_stem));
    let month = Pillar::from_ganji(month_ganji, Some(day_stem));
    let day = Pillar::from_ganji(day_ganji, Some(day_stem));
    let hour_pillar = match slot {
        Some(slot) => Pillar::from_ganji(hour_ganji(day_stem, slot), Some(day_stem)),
        None => Pillar::unknown(),
    };

    let elements = ElementCount::tally(&[year, month, day, hour_pillar]);
    let remedial = remedial_element(&elements);

    Ok(SajuChart {
        year,
        month,
        day,
        hour: hour_pillar,
        elements,
        remedial,
        birth: BirthInfo {
            solar,
            lunar_year: facts.lunar_year,
            lunar_month: facts.lunar_month,
            lunar_day: facts.lunar_day,
            leap_month: facts.leap_month,
            hour: (!time_unknown).then_some(hour),
            minute: (!time_unknown).then_some(minute),
            time_unknown,
            time_slot: slot,
        },
        meta: ChartMeta {
            animal: year_ganji.branch().animal(),
            lunar_animal: Ganji::from_year(facts.lunar_year).branch().animal(),
            weekday: solar.weekday(),
            solar_term: facts.solar_term,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Branch;

    fn facts() -> CalendarFacts {
        CalendarFacts {
            solar_year: 1990,
            solar_month: 5,
            solar_day: 15,
            lunar_year: 1990,
            lunar_month: 4,
            lunar_day: 21,
            leap_month: false,
            year_ganji: "경오".into(),
            month_ganji: "신사".into(),
            day_ganji: "경진".into(),
            solar_term: None,
        }
    }

    #[test]
    fn four_pillar_chart() {
        let chart = compute_chart(&facts(), 14, 0, false, &ChartConfig::default()).unwrap();
        assert_eq!(chart.year.code(), "경오");
        assert_eq!(chart.month.code(), "신사");
        assert_eq!(chart.day.code(), "경진");
        assert_eq!(chart.hour.code(), "계미");
        assert_eq!(chart.elements.total(), 8);
        assert_eq!(chart.remedial, Element::Wood);
        assert_eq!(chart.birth.time_slot.map(TimeSlot::index), Some(7));
        assert_eq!(chart.meta.animal, "말");
        assert_eq!(chart.meta.weekday, Weekday::Tue);
        assert_eq!(chart.day_stem(), Some(Stem::Gyeong));
    }

    #[test]
    fn unknown_time_gives_three_pillars() {
        let chart = compute_chart(&facts(), 99, 99, true, &ChartConfig::default()).unwrap();
        assert!(!chart.hour.is_known());
        assert_eq!(chart.elements.total(), 6);
        assert_eq!(chart.birth.hour, None);
        assert_eq!(chart.birth.time_slot, None);
    }

    #[test]
    fn invalid_clock_is_rejected() {
        let err = compute_chart(&facts(), 24, 0, false, &ChartConfig::default()).unwrap_err();
        assert!(matches!(err, SajuError::InvalidInput(_)));
    }

    #[test]
    fn invalid_dates_are_rejected() {
        let mut f = facts();
        f.solar_month = 13;
        assert!(compute_chart(&f, 0, 0, true, &ChartConfig::default()).is_err());
        let mut f = facts();
        f.solar_day = 31;
        f.solar_month = 4;
        assert!(compute_chart(&f, 0, 0, true, &ChartConfig::default()).is_err());
        let mut f = facts();
        f.lunar_day = 31;
        assert!(compute_chart(&f, 0, 0, true, &ChartConfig::default()).is_err());
    }

    #[test]
    fn late_night_same_day_keeps_day_pillar() {
        let chart = compute_chart(&facts(), 23, 45, false, &ChartConfig::default()).unwrap();
        assert_eq!(chart.day.code(), "경진");
        assert_eq!(chart.hour.code(), "병자");
    }

    #[test]
    fn late_night_next_day_advances_day_pillar() {
        let config = ChartConfig {
            day_boundary: DayBoundary::NextDay,
            ..ChartConfig::default()
        };
        let chart = compute_chart(&facts(), 23, 45, false, &config).unwrap();
        assert_eq!(chart.day.code(), "신사");
        assert_eq!(chart.hour.code(), "무자");
        // after midnight the provider's date is already the next day
        let chart = compute_chart(&facts(), 0, 30, false, &config).unwrap();
        assert_eq!(chart.day.code(), "경진");
    }

    #[test]
    fn unreadable_calendar_codes_fail_the_chart() {
        let config = ChartConfig::default();
        for field in ["year", "month", "day"] {
            let mut f = facts();
            let code = match field {
                "year" => &mut f.year_ganji,
                "month" => &mut f.month_ganji,
                _ => &mut f.day_ganji,
            };
            *code = "??".into();
            let err = compute_chart(&f, 14, 0, false, &config).unwrap_err();
            assert!(matches!(err, SajuError::MissingCalendarFact(_)), "{field}: {err}");
            let err = compute_chart(&f, 0, 0, true, &config).unwrap_err();
            assert!(matches!(err, SajuError::MissingCalendarFact(_)), "{field}: {err}");
        }
        let mut f = facts();
        f.day_ganji = "갑축".into();
        assert!(compute_chart(&f, 14, 0, false, &config).is_err());
    }

    #[test]
    fn tally_is_six_or_eight() {
        let config = ChartConfig::default();
        let known = compute_chart(&facts(), 14, 0, false, &config).unwrap();
        assert_eq!(known.elements.total(), 8);
        let unknown = compute_chart(&facts(), 0, 0, true, &config).unwrap();
        assert_eq!(unknown.elements.total(), 6);
    }

    #[test]
    fn relations_use_day_stem() {
        let chart = compute_chart(&facts(), 14, 0, false, &ChartConfig::default()).unwrap();
        for (_, p) in chart.pillars() {
            assert!(p.stem_relation.is_some());
        }
        assert_eq!(chart.year.branch, Some(Branch::O));
    }

    #[test]
    fn lunar_animal_follows_lunar_year() {
        let mut f = facts();
        f.solar_year = 1991;
        f.solar_month = 1;
        f.solar_day = 2;
        f.lunar_year = 1990;
        f.lunar_month = 11;
        f.lunar_day = 17;
        f.month_ganji = "무자".into();
        f.day_ganji = "임신".into();
        let chart = compute_chart(&f, 9, 0, false, &ChartConfig::default()).unwrap();
        assert_eq!(chart.meta.lunar_animal, "말");
        assert_eq!(chart.meta.weekday, Weekday::Wed);
    }

    #[test]
    fn config_defaults_from_empty_document() {
        let config: ChartConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ChartConfig::default());
    }
}
