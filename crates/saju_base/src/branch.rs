//! Earthly branches (지지).
//!
//! Twelve branches cycle continuously starting from 자. Each carries an
//! element, a polarity by cycle parity, an animal sign and a dominant hidden
//! stem (정기) that stands in for the branch in ten-relation lookups.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// The 12 earthly branches starting from 자.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "자")]
    Ja,
    #[serde(rename = "축")]
    Chuk,
    #[serde(rename = "인")]
    In,
    #[serde(rename = "묘")]
    Myo,
    #[serde(rename = "진")]
    Jin,
    #[serde(rename = "사")]
    Sa,
    #[serde(rename = "오")]
    O,
    #[serde(rename = "미")]
    Mi,
    #[serde(rename = "신")]
    Sin,
    #[serde(rename = "유")]
    Yu,
    #[serde(rename = "술")]
    Sul,
    #[serde(rename = "해")]
    Hae,
}

/// All 12 branches in order (index 0 = 자).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Ja,
    Branch::Chuk,
    Branch::In,
    Branch::Myo,
    Branch::Jin,
    Branch::Sa,
    Branch::O,
    Branch::Mi,
    Branch::Sin,
    Branch::Yu,
    Branch::Sul,
    Branch::Hae,
];

const BRANCH_CHARS: [char; 12] = [
    '자', '축', '인', '묘', '진', '사', '오', '미', '신', '유', '술', '해',
];

/// Dominant hidden stem (정기) per branch, indexed by branch index.
const HIDDEN_STEMS: [Stem; 12] = [
    Stem::Gye,    // 자
    Stem::Gi,     // 축
    Stem::Gap,    // 인
    Stem::Eul,    // 묘
    Stem::Mu,     // 진
    Stem::Byeong, // 사
    Stem::Jeong,  // 오
    Stem::Gi,     // 미
    Stem::Gyeong, // 신
    Stem::Sin,    // 유
    Stem::Mu,     // 술
    Stem::Im,     // 해
];

impl Branch {
    /// Korean name of the branch.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ja => "자",
            Self::Chuk => "축",
            Self::In => "인",
            Self::Myo => "묘",
            Self::Jin => "진",
            Self::Sa => "사",
            Self::O => "오",
            Self::Mi => "미",
            Self::Sin => "신",
            Self::Yu => "유",
            Self::Sul => "술",
            Self::Hae => "해",
        }
    }

    /// Hanja of the branch.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Ja => "子",
            Self::Chuk => "丑",
            Self::In => "寅",
            Self::Myo => "卯",
            Self::Jin => "辰",
            Self::Sa => "巳",
            Self::O => "午",
            Self::Mi => "未",
            Self::Sin => "申",
            Self::Yu => "酉",
            Self::Sul => "戌",
            Self::Hae => "亥",
        }
    }

    /// Animal sign (띠) of the branch.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Ja => "쥐",
            Self::Chuk => "소",
            Self::In => "호랑이",
            Self::Myo => "토끼",
            Self::Jin => "용",
            Self::Sa => "뱀",
            Self::O => "말",
            Self::Mi => "양",
            Self::Sin => "원숭이",
            Self::Yu => "닭",
            Self::Sul => "개",
            Self::Hae => "돼지",
        }
    }

    /// 0-based index (자=0 .. 해=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ja => 0,
            Self::Chuk => 1,
            Self::In => 2,
            Self::Myo => 3,
            Self::Jin => 4,
            Self::Sa => 5,
            Self::O => 6,
            Self::Mi => 7,
            Self::Sin => 8,
            Self::Yu => 9,
            Self::Sul => 10,
            Self::Hae => 11,
        }
    }

    /// Create from a 0-based index.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_BRANCHES.get(i as usize).copied()
    }

    /// Parse a single Korean branch character.
    pub fn from_char(c: char) -> Option<Self> {
        BRANCH_CHARS
            .iter()
            .position(|&b| b == c)
            .map(|i| ALL_BRANCHES[i])
    }

    /// Element of the branch.
    pub const fn element(self) -> Element {
        match self {
            Self::In | Self::Myo => Element::Wood,
            Self::Sa | Self::O => Element::Fire,
            Self::Jin | Self::Sul | Self::Chuk | Self::Mi => Element::Earth,
            Self::Sin | Self::Yu => Element::Metal,
            Self::Hae | Self::Ja => Element::Water,
        }
    }

    /// Yin/yang polarity by cycle parity (자 = yang).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Dominant hidden stem (정기).
    pub const fn hidden_stem(self) -> Stem {
        HIDDEN_STEMS[self.index() as usize]
    }

    /// Branch `n` steps away in the 12-branch cycle (negative walks backward).
    pub fn offset(self, n: i32) -> Self {
        let idx = (self.index() as i32 + n).rem_euclid(12);
        ALL_BRANCHES[idx as usize]
    }

    /// The opposing branch (육충): six steps across the cycle.
    pub fn opposite(self) -> Self {
        self.offset(6)
    }

    /// Whether two branches clash (자오, 축미, 인신, 묘유, 진술, 사해).
    pub fn clashes_with(self, other: Self) -> bool {
        self.opposite() == other
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
