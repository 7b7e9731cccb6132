//! Ten relations (십신) between the day stem and any other stem.
//!
//! The relation is fixed by how the target's element stands to the day
//! stem's element (same, generated, controlled, controlling, generating) and
//! whether the two polarities match. The lookup is a literal 10×10 table,
//! rows keyed by day stem and columns by target stem, so it can be audited
//! against printed reference tables. Branches are looked up through their
//! dominant hidden stem.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::stem::Stem;

/// The ten relations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenRelation {
    #[serde(rename = "비견")]
    Bigyeon,
    #[serde(rename = "겁재")]
    Geopjae,
    #[serde(rename = "식신")]
    Siksin,
    #[serde(rename = "상관")]
    Sanggwan,
    #[serde(rename = "편재")]
    Pyeonjae,
    #[serde(rename = "정재")]
    Jeongjae,
    #[serde(rename = "편관")]
    Pyeongwan,
    #[serde(rename = "정관")]
    Jeonggwan,
    #[serde(rename = "편인")]
    Pyeonin,
    #[serde(rename = "정인")]
    Jeongin,
}

impl TenRelation {
    /// Korean name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigyeon => "비견",
            Self::Geopjae => "겁재",
            Self::Siksin => "식신",
            Self::Sanggwan => "상관",
            Self::Pyeonjae => "편재",
            Self::Jeongjae => "정재",
            Self::Pyeongwan => "편관",
            Self::Jeonggwan => "정관",
            Self::Pyeonin => "편인",
            Self::Jeongin => "정인",
        }
    }
}

impl std::fmt::Display for TenRelation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

use TenRelation::*;

/// Rows: day stem 갑..계. Columns: target stem 갑..계.
const TEN_RELATION_TABLE: [[TenRelation; 10]; 10] = [
    [Bigyeon, Geopjae, Siksin, Sanggwan, Pyeonjae, Jeongjae, Pyeongwan, Jeonggwan, Pyeonin, Jeongin],
    [Geopjae, Bigyeon, Sanggwan, Siksin, Jeongjae, Pyeonjae, Jeonggwan, Pyeongwan, Jeongin, Pyeonin],
    [Pyeonin, Jeongin, Bigyeon, Geopjae, Siksin, Sanggwan, Pyeonjae, Jeongjae, Pyeongwan, Jeonggwan],
    [Jeongin, Pyeonin, Geopjae, Bigyeon, Sanggwan, Siksin, Jeongjae, Pyeonjae, Jeonggwan, Pyeongwan],
    [Pyeongwan, Jeonggwan, Pyeonin, Jeongin, Bigyeon, Geopjae, Siksin, Sanggwan, Pyeonjae, Jeongjae],
    [Jeonggwan, Pyeongwan, Jeongin, Pyeonin, Geopjae, Bigyeon, Sanggwan, Siksin, Jeongjae, Pyeonjae],
    [Pyeonjae, Jeongjae, Pyeongwan, Jeonggwan, Pyeonin, Jeongin, Bigyeon, Geopjae, Siksin, Sanggwan],
    [Jeongjae, Pyeonjae, Jeonggwan, Pyeongwan, Jeongin, Pyeonin, Geopjae, Bigyeon, Sanggwan, Siksin],
    [Siksin, Sanggwan, Pyeonjae, Jeongjae, Pyeongwan, Jeonggwan, Pyeonin, Jeongin, Bigyeon, Geopjae],
    [Sanggwan, Siksin, Jeongjae, Pyeonjae, Jeonggwan, Pyeongwan, Jeongin, Pyeonin, Geopjae, Bigyeon],
];

/// Ten relation of `target` as seen from `day_stem`.
pub const fn ten_relation(day_stem: Stem, target: Stem) -> TenRelation {
    TEN_RELATION_TABLE[day_stem.index() as usize][target.index() as usize]
}

/// Ten relation of a branch, via its dominant hidden stem.
pub const fn branch_ten_relation(day_stem: Stem, branch: Branch) -> TenRelation {
    ten_relation(day_stem, branch.hidden_stem())
}
