//! End-to-end readings against the sample calendar table.

use std::path::PathBuf;

use saju_base::{
    ChartConfig, DateKind, DayBoundary, Element, Gender, SajuError, SolarTerm, WalkDirection,
};
use saju_reading::{
    CalendarFactProvider, ReadingRequest, TableCalendar, compute_reading, load_chart_config,
};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data/sample_calendar.toml")
}

fn calendar() -> TableCalendar {
    TableCalendar::load(&sample_path()).unwrap()
}

#[test]
fn sample_table_loads() {
    let cal = calendar();
    assert_eq!(cal.len(), 6);
    assert!(cal.term_dates(1990).is_some());
    assert!(cal.term_dates(1991).is_some());
    assert!(cal.term_dates(1984).is_none());
}

#[test]
fn may_1990_male_reading() {
    let req = ReadingRequest::solar(1990, 5, 15, 14, 0, Gender::Male);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();

    assert_eq!(r.chart.year.code(), "경오");
    assert_eq!(r.chart.month.code(), "신사");
    assert_eq!(r.chart.day.code(), "경진");
    assert_eq!(r.chart.hour.code(), "계미");
    assert_eq!(r.chart.remedial, Element::Wood);

    assert_eq!(r.decade.direction, WalkDirection::Forward);
    assert_eq!(r.decade.onset_age, 7);
    assert_eq!(r.decade.periods[0].ganji.code(), "임오");

    assert_eq!(r.years.len(), 100);
    assert_eq!(r.years[0].year, 1990);
    assert_eq!(r.years[0].ganji.code(), "경오");
    assert_eq!(r.years[99].year, 2089);
}

#[test]
fn may_1990_female_walks_backward() {
    let req = ReadingRequest::solar(1990, 5, 15, 14, 0, Gender::Female);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(r.decade.direction, WalkDirection::Backward);
    assert_eq!(r.decade.onset_days, 9);
    assert_eq!(r.decade.onset_age, 3);
    assert_eq!(r.decade.periods[0].ganji.code(), "경진");
}

#[test]
fn december_forward_fetches_following_year() {
    let req = ReadingRequest::solar(1990, 12, 20, 9, 0, Gender::Male);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(r.decade.onset_days, 17);
    assert_eq!(r.decade.onset_age, 6);
    assert_eq!(r.decade.periods[0].ganji.code(), "기축");
}

#[test]
fn january_backward_uses_prior_year_terms() {
    let req = ReadingRequest::solar(1991, 1, 2, 9, 0, Gender::Female);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(r.chart.year.code(), "경오");
    assert_eq!(r.chart.meta.lunar_animal, "말");
    assert_eq!(r.decade.onset_days, 26);
    assert_eq!(r.decade.onset_age, 9);
}

#[test]
fn lunar_leap_month_request() {
    let mut req = ReadingRequest::solar(1990, 5, 10, 12, 0, Gender::Male);
    req.date_kind = DateKind::Lunar;
    req.leap_month = true;
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(r.chart.day.code(), "정묘");
    assert_eq!(r.chart.birth.solar.to_string(), "1990-07-01");
    assert!(r.chart.birth.leap_month);
    // 7/1 → 소서 on 7/7
    assert_eq!(r.decade.onset_days, 6);
    assert_eq!(r.decade.onset_age, 2);

    req.leap_month = false;
    let err = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, SajuError::MissingCalendarFact(_)));
}

#[test]
fn term_day_birth() {
    let req = ReadingRequest::solar(1990, 2, 4, 10, 0, Gender::Male);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(r.chart.meta.solar_term, Some(SolarTerm::Ipchun));
    assert_eq!(r.decade.onset_days, 30);
    assert_eq!(r.decade.onset_age, 10);

    let req = ReadingRequest::solar(1990, 2, 4, 10, 0, Gender::Female);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(r.decade.onset_days, 0);
    assert_eq!(r.decade.onset_age, 1);
}

#[test]
fn missing_terms_fail_the_whole_reading() {
    let req = ReadingRequest::solar(1984, 2, 2, 10, 0, Gender::Male);
    let err = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, SajuError::MissingCalendarFact(_)), "{err}");
}

#[test]
fn missing_day_fails() {
    let req = ReadingRequest::solar(2000, 1, 1, 10, 0, Gender::Male);
    let err = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, SajuError::MissingCalendarFact(_)));
}

#[test]
fn invalid_input_is_caught_before_lookup() {
    let cal = calendar();
    let cfg = ChartConfig::default();
    for req in [
        ReadingRequest::solar(1990, 13, 1, 10, 0, Gender::Male),
        ReadingRequest::solar(1990, 5, 15, 24, 0, Gender::Male),
        ReadingRequest::solar(1990, 5, 15, 10, 60, Gender::Male),
    ] {
        let err = compute_reading(&cal, &req, &cfg).unwrap_err();
        assert!(matches!(err, SajuError::InvalidInput(_)), "{err}");
    }
}

#[test]
fn unknown_time_still_reads() {
    let mut req = ReadingRequest::solar(1990, 5, 15, 0, 0, Gender::Male);
    req.time_unknown = true;
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert!(!r.chart.hour.is_known());
    assert_eq!(r.chart.elements.total(), 6);
    assert_eq!(r.decade.onset_age, 7);
}

#[test]
fn explicit_year_range() {
    let mut req = ReadingRequest::solar(1990, 5, 15, 14, 0, Gender::Male);
    req.from_year = Some(2020);
    req.to_year = Some(2024);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(r.years.len(), 5);
    assert_eq!(r.years[4].ganji.code(), "갑진");
    assert!(r.years[4].remedial);

    req.from_year = Some(2030);
    let err = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, SajuError::InvalidInput(_)));
}

#[test]
fn next_day_boundary_changes_day_stem() {
    let config = ChartConfig {
        day_boundary: DayBoundary::NextDay,
        ..ChartConfig::default()
    };
    let req = ReadingRequest::solar(1990, 5, 15, 23, 40, Gender::Male);
    let r = compute_reading(&calendar(), &req, &config).unwrap();
    assert_eq!(r.chart.day.code(), "신사");
    assert_eq!(r.chart.hour.code(), "무자");
    let same = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(same.chart.day.code(), "경진");
}

#[test]
fn config_file_round_trip() {
    let dir = std::env::temp_dir().join(format!("saju_reading_cfg_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("chart.toml");
    std::fs::write(&path, "[decade]\nperiod_count = 8\n").unwrap();
    let cfg = load_chart_config(&path).unwrap();
    assert_eq!(cfg.decade.period_count, 8);

    let req = ReadingRequest::solar(1990, 5, 15, 14, 0, Gender::Male);
    let r = compute_reading(&calendar(), &req, &cfg).unwrap();
    assert_eq!(r.decade.periods.len(), 8);
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn reading_serializes_to_json() {
    let req = ReadingRequest::solar(1990, 5, 15, 14, 0, Gender::Male);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json["chart"]["day"]["stem"], "경");
    assert_eq!(json["chart"]["remedial"], "목");
    assert_eq!(json["decade"]["periods"][0]["ganji"], "임오");
    assert_eq!(json["decade"]["direction"], "forward");
    assert_eq!(json["years"][0]["ganji"], "경오");
}

#[test]
fn request_deserializes_with_defaults() {
    let req: ReadingRequest =
        serde_json::from_str(r#"{"year":1990,"month":5,"day":15,"gender":"female"}"#).unwrap();
    assert_eq!(req.date_kind, DateKind::Solar);
    assert!(!req.time_unknown);
    assert_eq!(req.gender, Gender::Female);
}

#[test]
fn default_year_range_overflow_is_invalid_input() {
    let mut req = ReadingRequest::solar(1990, 5, 15, 14, 0, Gender::Male);
    req.from_year = Some(i32::MAX);
    let err = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, SajuError::InvalidInput(_)), "{err}");

    req.to_year = Some(i32::MAX);
    let r = compute_reading(&calendar(), &req, &ChartConfig::default()).unwrap();
    assert_eq!(r.years.len(), 1);
}

#[test]
fn unreadable_day_code_fails_the_reading() {
    let table = TableCalendar::from_toml_str(
        r#"
[[day]]
solar = "1990-05-15"
lunar_year = 1990
lunar_month = 4
lunar_day = 21
year = "경오"
month = "신사"
day = "경?"

[[term]]
term = "입하"
date = "1990-05-06"
"#,
    )
    .unwrap();
    let req = ReadingRequest::solar(1990, 5, 15, 14, 0, Gender::Male);
    let err = compute_reading(&table, &req, &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, SajuError::MissingCalendarFact(_)), "{err}");
}
