//! Heavenly stems (천간).
//!
//! Ten stems cycle continuously. Each element owns two consecutive stems,
//! the first yang and the second yin.

use serde::{Deserialize, Serialize};

use crate::element::{Element, Polarity};

/// The 10 heavenly stems starting from 갑.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "갑")]
    Gap,
    #[serde(rename = "을")]
    Eul,
    #[serde(rename = "병")]
    Byeong,
    #[serde(rename = "정")]
    Jeong,
    #[serde(rename = "무")]
    Mu,
    #[serde(rename = "기")]
    Gi,
    #[serde(rename = "경")]
    Gyeong,
    #[serde(rename = "신")]
    Sin,
    #[serde(rename = "임")]
    Im,
    #[serde(rename = "계")]
    Gye,
}

/// All 10 stems in order (index 0 = 갑).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Gap,
    Stem::Eul,
    Stem::Byeong,
    Stem::Jeong,
    Stem::Mu,
    Stem::Gi,
    Stem::Gyeong,
    Stem::Sin,
    Stem::Im,
    Stem::Gye,
];

const STEM_CHARS: [char; 10] = ['갑', '을', '병', '정', '무', '기', '경', '신', '임', '계'];

impl Stem {
    /// Korean name of the stem.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gap => "갑",
            Self::Eul => "을",
            Self::Byeong => "병",
            Self::Jeong => "정",
            Self::Mu => "무",
            Self::Gi => "기",
            Self::Gyeong => "경",
            Self::Sin => "신",
            Self::Im => "임",
            Self::Gye => "계",
        }
    }

    /// Hanja of the stem.
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Gap => "甲",
            Self::Eul => "乙",
            Self::Byeong => "丙",
            Self::Jeong => "丁",
            Self::Mu => "戊",
            Self::Gi => "己",
            Self::Gyeong => "庚",
            Self::Sin => "辛",
            Self::Im => "壬",
            Self::Gye => "癸",
        }
    }

    /// 0-based index (갑=0 .. 계=9).
    pub const fn index(self) -> u8 {
        match self {
            Self::Gap => 0,
            Self::Eul => 1,
            Self::Byeong => 2,
            Self::Jeong => 3,
            Self::Mu => 4,
            Self::Gi => 5,
            Self::Gyeong => 6,
            Self::Sin => 7,
            Self::Im => 8,
            Self::Gye => 9,
        }
    }

    /// Create from a 0-based index.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_STEMS.get(i as usize).copied()
    }

    /// Parse a single Korean stem character.
    pub fn from_char(c: char) -> Option<Self> {
        STEM_CHARS
            .iter()
            .position(|&s| s == c)
            .map(|i| ALL_STEMS[i])
    }

    /// Element of the stem: 갑을 목, 병정 화, 무기 토, 경신 금, 임계 수.
    pub const fn element(self) -> Element {
        match self {
            Self::Gap | Self::Eul => Element::Wood,
            Self::Byeong | Self::Jeong => Element::Fire,
            Self::Mu | Self::Gi => Element::Earth,
            Self::Gyeong | Self::Sin => Element::Metal,
            Self::Im | Self::Gye => Element::Water,
        }
    }

    /// Yin/yang polarity (even index = yang).
    pub const fn polarity(self) -> Polarity {
        Polarity::from_parity(self.index())
    }

    /// Stem `n` steps away in the 10-stem cycle (negative walks backward).
    pub fn offset(self, n: i32) -> Self {
        let idx = (self.index() as i32 + n).rem_euclid(10);
        ALL_STEMS[idx as usize]
    }
}

impl std::fmt::Display for Stem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
