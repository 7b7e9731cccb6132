//! Annual fortune (세운) sequence.
//!
//! Each Gregorian year maps to the sexagenary ganji of that year and carries
//! three flags read against the chart: stem harmony (천간합) between the year
//! stem and the day stem, clash (충) between the year branch and the day
//! stem's prosperity branch (건록), and whether the year's element is the
//! chart's remedial element.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::Element;
use crate::error::SajuError;
use crate::ganji::Ganji;
use crate::stem::Stem;

/// Largest span accepted by [`year_fortunes`], in years.
pub const MAX_YEAR_SPAN: i32 = 1000;

/// Prosperity branch (건록) of each stem, indexed by stem.
pub const ROK_BRANCH: [Branch; 10] = [
    Branch::In,
    Branch::Myo,
    Branch::Sa,
    Branch::O,
    Branch::Sa,
    Branch::O,
    Branch::Sin,
    Branch::Yu,
    Branch::Hae,
    Branch::Ja,
];

/// Harmony partner of a stem: 갑기, 을경, 병신, 정임, 무계.
pub fn harmony_partner(stem: Stem) -> Stem {
    stem.offset(5)
}

/// Whether two stems form a harmony pair.
pub fn stems_harmonize(a: Stem, b: Stem) -> bool {
    harmony_partner(a) == b
}

/// Prosperity branch of a stem.
pub const fn rok_branch(stem: Stem) -> Branch {
    ROK_BRANCH[stem.index() as usize]
}

/// Overall status of a year, by precedence remedial > harmony > clash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum YearStatus {
    Remedial,
    Harmony,
    Clash,
    Neutral,
}

impl YearStatus {
    /// Korean label.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Remedial => "용신",
            Self::Harmony => "합",
            Self::Clash => "충",
            Self::Neutral => "평",
        }
    }
}

impl std::fmt::Display for YearStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One year of the annual sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearFortunePeriod {
    pub year: i32,
    pub ganji: Ganji,
    /// Element of the year stem.
    pub element: Element,
    pub harmony: bool,
    pub clash: bool,
    pub remedial: bool,
}

impl YearFortunePeriod {
    pub fn status(&self) -> YearStatus {
        if self.remedial {
            YearStatus::Remedial
        } else if self.harmony {
            YearStatus::Harmony
        } else if self.clash {
            YearStatus::Clash
        } else {
            YearStatus::Neutral
        }
    }
}

/// Annual fortune for a single year.
pub fn year_fortune(year: i32, day_stem: Stem, remedial: Element) -> YearFortunePeriod {
    let ganji = Ganji::from_year(year);
    YearFortunePeriod {
        year,
        ganji,
        element: ganji.element(),
        harmony: stems_harmonize(ganji.stem(), day_stem),
        clash: ganji.branch().clashes_with(rok_branch(day_stem)),
        remedial: ganji.element() == remedial,
    }
}

/// Annual fortunes for every year in `from..=to`.
pub fn year_fortunes(
    from: i32,
    to: i32,
    day_stem: Stem,
    remedial: Element,
) -> Result<Vec<YearFortunePeriod>, SajuError> {
    if from > to {
        return Err(SajuError::InvalidInput("year range start is after its end"));
    }
    if i64::from(to) - i64::from(from) >= i64::from(MAX_YEAR_SPAN) {
        return Err(SajuError::InvalidInput("year range spans more than 1000 years"));
    }
    Ok((from..=to)
        .map(|year| year_fortune(year, day_stem, remedial))
        .collect())
}
