//! In-memory calendar provider loaded from a TOML table.
//!
//! ```toml
//! [[day]]
//! solar = "1990-05-15"
//! lunar_year = 1990
//! lunar_month = 4
//! lunar_day = 21
//! year = "경오"
//! month = "신사"
//! day = "경진"
//!
//! [[term]]
//! term = "입하"
//! date = "1990-05-06"
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use saju_base::{CalendarFacts, DateKind, SolarTermDate};
use serde::Deserialize;

use crate::error::LoadError;
use crate::provider::CalendarFactProvider;

#[derive(Debug, Deserialize)]
struct DayRow {
    solar: NaiveDate,
    lunar_year: i32,
    lunar_month: u32,
    lunar_day: u32,
    #[serde(default)]
    leap_month: bool,
    year: String,
    month: String,
    day: String,
}

#[derive(Debug, Default, Deserialize)]
struct TableFile {
    #[serde(default)]
    day: Vec<DayRow>,
    #[serde(default)]
    term: Vec<SolarTermDate>,
}

type LunarKey = (i32, u32, u32, bool);

/// Calendar records and term onsets held in memory.
#[derive(Debug, Clone, Default)]
pub struct TableCalendar {
    days: HashMap<NaiveDate, CalendarFacts>,
    lunar_index: HashMap<LunarKey, NaiveDate>,
    terms: BTreeMap<i32, Vec<SolarTermDate>>,
}

impl TableCalendar {
    /// Parse a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let file: TableFile = toml::from_str(content)?;
        let mut table = Self::default();
        for term in file.term {
            table.insert_term(term);
        }
        for row in file.day {
            table.insert_day(row)?;
        }
        tracing::debug!(
            days = table.days.len(),
            term_years = table.terms.len(),
            "calendar table loaded"
        );
        Ok(table)
    }

    /// Load a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    fn insert_term(&mut self, term: SolarTermDate) {
        let year_terms = self.terms.entry(term.date.year()).or_default();
        year_terms.push(term);
        year_terms.sort_by_key(|t| t.date);
    }

    fn insert_day(&mut self, row: DayRow) -> Result<(), LoadError> {
        if !(1..=12).contains(&row.lunar_month) || !(1..=30).contains(&row.lunar_day) {
            return Err(LoadError::InvalidRow(format!(
                "lunar date {}-{}-{} out of range for {}",
                row.lunar_year, row.lunar_month, row.lunar_day, row.solar
            )));
        }
        if self.days.contains_key(&row.solar) {
            return Err(LoadError::InvalidRow(format!(
                "duplicate solar date {}",
                row.solar
            )));
        }
        let solar_term = self
            .terms
            .get(&row.solar.year())
            .and_then(|ts| ts.iter().find(|t| t.date == row.solar))
            .map(|t| t.term);
        let facts = CalendarFacts {
            solar_year: row.solar.year(),
            solar_month: row.solar.month(),
            solar_day: row.solar.day(),
            lunar_year: row.lunar_year,
            lunar_month: row.lunar_month,
            lunar_day: row.lunar_day,
            leap_month: row.leap_month,
            year_ganji: row.year,
            month_ganji: row.month,
            day_ganji: row.day,
            solar_term,
        };
        self.lunar_index.insert(
            (row.lunar_year, row.lunar_month, row.lunar_day, row.leap_month),
            row.solar,
        );
        self.days.insert(row.solar, facts);
        Ok(())
    }

    /// Number of day rows.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl CalendarFactProvider for TableCalendar {
    fn resolve(
        &self,
        kind: DateKind,
        year: i32,
        month: u32,
        day: u32,
        leap_month: bool,
    ) -> Option<CalendarFacts> {
        let solar = match kind {
            DateKind::Solar => NaiveDate::from_ymd_opt(year, month, day)?,
            DateKind::Lunar => *self.lunar_index.get(&(year, month, day, leap_month))?,
        };
        self.days.get(&solar).cloned()
    }

    fn term_dates(&self, year: i32) -> Option<Vec<SolarTermDate>> {
        let current = self.terms.get(&year)?;
        let mut out = self.terms.get(&(year - 1)).cloned().unwrap_or_default();
        out.extend(current.iter().copied());
        Some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::SolarTerm;

    const TABLE: &str = r#"
[[day]]
solar = "1990-05-06"
lunar_year = 1990
lunar_month = 4
lunar_day = 12
year = "경오"
month = "신사"
day = "신미"

[[day]]
solar = "1990-07-01"
lunar_year = 1990
lunar_month = 5
lunar_day = 10
leap_month = true
year = "경오"
month = "임오"
day = "정묘"

[[term]]
term = "망종"
date = "1990-06-06"

[[term]]
term = "입하"
date = "1990-05-06"

[[term]]
term = "대설"
date = "1989-12-07"
"#;

    #[test]
    fn resolves_solar_and_lunar() {
        let t = TableCalendar::from_toml_str(TABLE).unwrap();
        assert_eq!(t.len(), 2);
        let f = t.resolve(DateKind::Solar, 1990, 7, 1, false).unwrap();
        assert_eq!(f.day_ganji, "정묘");
        assert!(f.leap_month);
        let g = t.resolve(DateKind::Lunar, 1990, 5, 10, true).unwrap();
        assert_eq!(f, g);
        assert!(t.resolve(DateKind::Lunar, 1990, 5, 10, false).is_none());
        assert!(t.resolve(DateKind::Solar, 1990, 2, 30, false).is_none());
    }

    #[test]
    fn term_day_is_labelled() {
        let t = TableCalendar::from_toml_str(TABLE).unwrap();
        let f = t.resolve(DateKind::Solar, 1990, 5, 6, false).unwrap();
        assert_eq!(f.solar_term, Some(SolarTerm::Ipha));
        let f = t.resolve(DateKind::Solar, 1990, 7, 1, false).unwrap();
        assert_eq!(f.solar_term, None);
    }

    #[test]
    fn term_dates_include_prior_year_in_order() {
        let t = TableCalendar::from_toml_str(TABLE).unwrap();
        let terms = t.term_dates(1990).unwrap();
        let names: Vec<SolarTerm> = terms.iter().map(|t| t.term).collect();
        assert_eq!(
            names,
            [SolarTerm::Daeseol, SolarTerm::Ipha, SolarTerm::Mangjong]
        );
        assert!(t.term_dates(1991).is_none());
    }

    #[test]
    fn rejects_duplicate_rows() {
        let row = r#"
[[day]]
solar = "1990-05-15"
lunar_year = 1990
lunar_month = 4
lunar_day = 21
year = "경오"
month = "신사"
day = "경진"
"#;
        let err = TableCalendar::from_toml_str(&row.repeat(2)).unwrap_err();
        assert!(matches!(err, LoadError::InvalidRow(_)), "{err}");
    }

    #[test]
    fn rejects_bad_lunar_day() {
        let bad = TABLE.replace("lunar_day = 12", "lunar_day = 31");
        assert!(matches!(
            TableCalendar::from_toml_str(&bad),
            Err(LoadError::InvalidRow(_))
        ));
    }

    #[test]
    fn parse_errors_surface() {
        assert!(matches!(
            TableCalendar::from_toml_str("[[day]]\nsolar = 5"),
            Err(LoadError::Parse(_))
        ));
        assert!(matches!(
            TableCalendar::from_toml_str("[[term]]\nterm = \"봄\"\ndate = \"1990-01-01\""),
            Err(LoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = TableCalendar::load(Path::new("/nonexistent/calendar.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
