//! Ganji (간지): stem-branch pairs forming the 60-term sexagenary cycle.
//!
//! Only pairs whose stem and branch share parity are valid, giving 60 of the
//! 100 combinations. Index 0 is 갑자 and the cycle advances stem and branch
//! together. The year cycle epoch is CE 1984 = 갑자.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::branch::Branch;
use crate::element::Element;
use crate::stem::Stem;

/// Number of terms in the sexagenary cycle.
pub const GANJI_CYCLE_LEN: u8 = 60;

/// Reference epoch: CE 1984 = 갑자 (index 0).
pub const GANJI_EPOCH_YEAR: i32 = 1984;

/// A valid stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ganji {
    stem: Stem,
    branch: Branch,
}

impl Ganji {
    /// Pair a stem with a branch. Returns `None` when the parities differ.
    pub fn new(stem: Stem, branch: Branch) -> Option<Self> {
        if stem.index() % 2 == branch.index() % 2 {
            Some(Self { stem, branch })
        } else {
            None
        }
    }

    /// Position `index` in the cycle (wraps modulo 60).
    pub fn from_index(index: u8) -> Self {
        let i = index % GANJI_CYCLE_LEN;
        Self {
            stem: Stem::offset(Stem::Gap, i as i32),
            branch: Branch::offset(Branch::Ja, i as i32),
        }
    }

    /// The calendar year's ganji (year-pillar convention, 1984 = 갑자).
    pub fn from_year(year: i32) -> Self {
        let cycle = GANJI_CYCLE_LEN as i32;
        let offset = (year.rem_euclid(cycle) - GANJI_EPOCH_YEAR.rem_euclid(cycle)).rem_euclid(cycle);
        Self::from_index(offset as u8)
    }

    /// Parse a 2-character code such as `"갑자"`.
    ///
    /// Returns `None` for any other length, unknown characters, or a
    /// stem/branch parity mismatch.
    pub fn parse(code: &str) -> Option<Self> {
        let mut chars = code.chars();
        let stem = Stem::from_char(chars.next()?)?;
        let branch = Branch::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Self::new(stem, branch)
    }

    pub const fn stem(self) -> Stem {
        self.stem
    }

    pub const fn branch(self) -> Branch {
        self.branch
    }

    /// Element of the pair, taken from its stem.
    pub const fn element(self) -> Element {
        self.stem.element()
    }

    /// 0-based cycle index (갑자=0 .. 계해=59).
    pub fn index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        // Unique i in 0..60 with i ≡ s (mod 10) and i ≡ b (mod 12).
        (6 * s - 5 * b).rem_euclid(60) as u8
    }

    /// The pair `n` steps away, walking stem and branch independently.
    pub fn step(self, n: i32) -> Self {
        Self {
            stem: self.stem.offset(n),
            branch: self.branch.offset(n),
        }
    }

    /// The 2-character Korean code.
    pub fn code(self) -> String {
        let mut s = String::with_capacity(6);
        s.push_str(self.stem.name());
        s.push_str(self.branch.name());
        s
    }

    /// Hanja rendering, e.g. `甲子`.
    pub fn hanja(self) -> String {
        format!("{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

impl Display for Ganji {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.name(), self.branch.name())
    }
}

impl Serialize for Ganji {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Ganji {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ganji::parse(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid ganji code: {code:?}")))
    }
}

/// Iterate the full cycle in order from 갑자.
pub fn all_ganji() -> impl Iterator<Item = Ganji> {
    (0..GANJI_CYCLE_LEN).map(Ganji::from_index)
}
