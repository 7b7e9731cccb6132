//! The 24 solar terms (절기) and the 12 month-opening terms (절).
//!
//! Terms are listed in calendar order from 소한 (early January). Every
//! even-indexed term opens a month and fixes that month's branch: 소한 opens
//! 축, 입춘 opens 인, ... 대설 opens 자.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::branch::Branch;

/// The 24 solar terms in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    #[serde(rename = "소한")]
    Sohan,
    #[serde(rename = "대한")]
    Daehan,
    #[serde(rename = "입춘")]
    Ipchun,
    #[serde(rename = "우수")]
    Usu,
    #[serde(rename = "경칩")]
    Gyeongchip,
    #[serde(rename = "춘분")]
    Chunbun,
    #[serde(rename = "청명")]
    Cheongmyeong,
    #[serde(rename = "곡우")]
    Gogu,
    #[serde(rename = "입하")]
    Ipha,
    #[serde(rename = "소만")]
    Soman,
    #[serde(rename = "망종")]
    Mangjong,
    #[serde(rename = "하지")]
    Haji,
    #[serde(rename = "소서")]
    Soseo,
    #[serde(rename = "대서")]
    Daeseo,
    #[serde(rename = "입추")]
    Ipchu,
    #[serde(rename = "처서")]
    Cheoseo,
    #[serde(rename = "백로")]
    Baengno,
    #[serde(rename = "추분")]
    Chubun,
    #[serde(rename = "한로")]
    Hallo,
    #[serde(rename = "상강")]
    Sanggang,
    #[serde(rename = "입동")]
    Ipdong,
    #[serde(rename = "소설")]
    Soseol,
    #[serde(rename = "대설")]
    Daeseol,
    #[serde(rename = "동지")]
    Dongji,
}

/// All 24 terms in calendar order (index 0 = 소한).
pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::Sohan,
    SolarTerm::Daehan,
    SolarTerm::Ipchun,
    SolarTerm::Usu,
    SolarTerm::Gyeongchip,
    SolarTerm::Chunbun,
    SolarTerm::Cheongmyeong,
    SolarTerm::Gogu,
    SolarTerm::Ipha,
    SolarTerm::Soman,
    SolarTerm::Mangjong,
    SolarTerm::Haji,
    SolarTerm::Soseo,
    SolarTerm::Daeseo,
    SolarTerm::Ipchu,
    SolarTerm::Cheoseo,
    SolarTerm::Baengno,
    SolarTerm::Chubun,
    SolarTerm::Hallo,
    SolarTerm::Sanggang,
    SolarTerm::Ipdong,
    SolarTerm::Soseol,
    SolarTerm::Daeseol,
    SolarTerm::Dongji,
];

const SOLAR_TERM_NAMES: [&str; 24] = [
    "소한", "대한", "입춘", "우수", "경칩", "춘분", "청명", "곡우", "입하", "소만", "망종", "하지",
    "소서", "대서", "입추", "처서", "백로", "추분", "한로", "상강", "입동", "소설", "대설", "동지",
];

impl SolarTerm {
    /// Korean name of the term.
    pub const fn name(self) -> &'static str {
        SOLAR_TERM_NAMES[self.index() as usize]
    }

    /// 0-based index in calendar order (소한=0 .. 동지=23).
    pub const fn index(self) -> u8 {
        match self {
            Self::Sohan => 0,
            Self::Daehan => 1,
            Self::Ipchun => 2,
            Self::Usu => 3,
            Self::Gyeongchip => 4,
            Self::Chunbun => 5,
            Self::Cheongmyeong => 6,
            Self::Gogu => 7,
            Self::Ipha => 8,
            Self::Soman => 9,
            Self::Mangjong => 10,
            Self::Haji => 11,
            Self::Soseo => 12,
            Self::Daeseo => 13,
            Self::Ipchu => 14,
            Self::Cheoseo => 15,
            Self::Baengno => 16,
            Self::Chubun => 17,
            Self::Hallo => 18,
            Self::Sanggang => 19,
            Self::Ipdong => 20,
            Self::Soseol => 21,
            Self::Daeseol => 22,
            Self::Dongji => 23,
        }
    }

    /// Parse the Korean name.
    pub fn from_name(name: &str) -> Option<Self> {
        SOLAR_TERM_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|i| ALL_SOLAR_TERMS[i])
    }

    /// Whether this term opens a month (절) rather than marking its middle (중기).
    pub const fn is_month_opening(self) -> bool {
        self.index() % 2 == 0
    }

    /// Branch of the month this term opens, if it is a month-opening term.
    pub fn month_branch(self) -> Option<Branch> {
        if !self.is_month_opening() {
            return None;
        }
        Branch::from_index((self.index() / 2 + 1) % 12)
    }

    /// The month-opening term for a month branch.
    pub const fn opening_term_for(month_branch: Branch) -> Self {
        let slot = (month_branch.index() + 11) % 12;
        ALL_SOLAR_TERMS[(slot * 2) as usize]
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A solar term onset on a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermDate {
    pub term: SolarTerm,
    pub date: NaiveDate,
}

impl SolarTermDate {
    pub const fn new(term: SolarTerm, date: NaiveDate) -> Self {
        Self { term, date }
    }
}
