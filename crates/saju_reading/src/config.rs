//! Chart configuration files.
//!
//! ```toml
//! day_boundary = "next_day"
//!
//! [decade]
//! period_count = 8
//! rounding = "floor"
//! ```
//!
//! Every key is optional and falls back to [`ChartConfig::default`].

use std::fs;
use std::path::Path;

use saju_base::ChartConfig;

use crate::error::LoadError;

/// Parse a chart configuration from TOML text.
pub fn chart_config_from_toml(content: &str) -> Result<ChartConfig, LoadError> {
    Ok(toml::from_str(content)?)
}

/// Load a chart configuration from a TOML file.
pub fn load_chart_config(path: &Path) -> Result<ChartConfig, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    chart_config_from_toml(&content)
}
