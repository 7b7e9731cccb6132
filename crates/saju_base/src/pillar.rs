//! Pillar construction from ganji codes.
//!
//! A pillar carries its stem and branch with their elements and polarities,
//! and, once the day stem is known, the ten relation of each. A pillar built
//! from an empty or malformed code is *unknown*: every field is empty and the
//! relations are omitted. Malformed codes never raise errors here.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::ganji::Ganji;
use crate::stem::Stem;
use crate::ten_relation::{TenRelation, branch_ten_relation, ten_relation};

/// Position of a pillar in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarPosition {
    Year,
    Month,
    Day,
    Hour,
}

impl PillarPosition {
    /// Korean name (연주, 월주, 일주, 시주).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "연주",
            Self::Month => "월주",
            Self::Day => "일주",
            Self::Hour => "시주",
        }
    }
}

/// One of the four chart pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Pillar {
    pub stem: Option<Stem>,
    pub branch: Option<Branch>,
    pub stem_element: Option<Element>,
    pub branch_element: Option<Element>,
    pub stem_polarity: Option<Polarity>,
    pub branch_polarity: Option<Polarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stem_relation: Option<TenRelation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_relation: Option<TenRelation>,
}

impl Pillar {
    /// The unknown pillar (used for the hour when birth time is unknown).
    pub const fn unknown() -> Self {
        Self {
            stem: None,
            branch: None,
            stem_element: None,
            branch_element: None,
            stem_polarity: None,
            branch_polarity: None,
            stem_relation: None,
            branch_relation: None,
        }
    }

    /// Build from a valid ganji, with relations when `day_stem` is given.
    pub fn from_ganji(ganji: Ganji, day_stem: Option<Stem>) -> Self {
        let stem = ganji.stem();
        let branch = ganji.branch();
        Self {
            stem: Some(stem),
            branch: Some(branch),
            stem_element: Some(stem.element()),
            branch_element: Some(branch.element()),
            stem_polarity: Some(stem.polarity()),
            branch_polarity: Some(branch.polarity()),
            stem_relation: day_stem.map(|d| ten_relation(d, stem)),
            branch_relation: day_stem.map(|d| branch_ten_relation(d, branch)),
        }
    }

    /// Build from a 2-character code. Empty or malformed codes give an
    /// unknown pillar.
    pub fn from_code(code: &str, day_stem: Option<Stem>) -> Self {
        if code.is_empty() {
            return Self::unknown();
        }
        match Ganji::parse(code) {
            Some(ganji) => Self::from_ganji(ganji, day_stem),
            None => {
                tracing::warn!(code, "unrecognized ganji code, pillar left unknown");
                Self::unknown()
            }
        }
    }

    /// Recompute ten relations against a day stem.
    pub fn with_day_stem(self, day_stem: Stem) -> Self {
        match self.ganji() {
            Some(g) => Self::from_ganji(g, Some(day_stem)),
            None => self,
        }
    }

    pub fn is_known(&self) -> bool {
        self.stem.is_some() && self.branch.is_some()
    }

    /// The pillar's ganji, if known.
    pub fn ganji(&self) -> Option<Ganji> {
        Ganji::new(self.stem?, self.branch?)
    }

    /// The 2-character code, empty for an unknown pillar.
    pub fn code(&self) -> String {
        self.ganji().map(Ganji::code).unwrap_or_default()
    }

    /// Stem and branch elements, skipping unknown fields.
    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.stem_element.into_iter().chain(self.branch_element)
    }
}
