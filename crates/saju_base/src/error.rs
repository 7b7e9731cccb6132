//! Error types for chart computation.

use thiserror::Error;

/// Errors from Four-Pillars chart and fortune computation.
///
/// Both kinds are fatal to a single chart request. There is no partial chart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SajuError {
    /// The calendar collaborator had no record for a date or term year.
    #[error("missing calendar fact: {0}")]
    MissingCalendarFact(String),
    /// A numeric input was outside its valid range.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}
