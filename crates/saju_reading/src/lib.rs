//! Calendar fact providers and end-to-end readings on top of `saju_base`.
//!
//! `saju_base` never looks anything up. This crate supplies the lookup seam
//! ([`CalendarFactProvider`]), a TOML-backed table implementation, chart
//! configuration files and the orchestration that turns a birth request into
//! a chart with both fortune timelines.

pub mod config;
pub mod error;
pub mod provider;
pub mod reading;
pub mod table;

pub use config::{chart_config_from_toml, load_chart_config};
pub use error::{LoadError, ReadingError};
pub use provider::CalendarFactProvider;
pub use reading::{DEFAULT_YEAR_SPAN, Reading, ReadingRequest, compute_reading};
pub use table::TableCalendar;
