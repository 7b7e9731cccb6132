//! Five elements (오행) and yin/yang polarity.
//!
//! The canonical element order is 목 → 화 → 토 → 금 → 수, which is also the
//! generating (상생) cycle. Every tie-break in the crate uses this order.

use serde::{Deserialize, Serialize};

/// The five elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Element {
    #[serde(rename = "목")]
    Wood,
    #[serde(rename = "화")]
    Fire,
    #[serde(rename = "토")]
    Earth,
    #[serde(rename = "금")]
    Metal,
    #[serde(rename = "수")]
    Water,
}

/// All 5 elements in canonical order (0 = Wood, 4 = Water).
pub const ALL_ELEMENTS: [Element; 5] = [
    Element::Wood,
    Element::Fire,
    Element::Earth,
    Element::Metal,
    Element::Water,
];

impl Element {
    /// Korean name (목, 화, 토, 금, 수).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// Hanja name (木, 火, 土, 金, 水).
    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    /// English name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }

    /// 0-based canonical index (Wood=0 .. Water=4).
    pub const fn index(self) -> u8 {
        match self {
            Self::Wood => 0,
            Self::Fire => 1,
            Self::Earth => 2,
            Self::Metal => 3,
            Self::Water => 4,
        }
    }

    /// Create from canonical index.
    pub fn from_index(i: u8) -> Option<Self> {
        ALL_ELEMENTS.get(i as usize).copied()
    }

    /// Parse the Korean name.
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_ELEMENTS.into_iter().find(|e| e.name() == name)
    }

    /// The element this one generates (목생화, 화생토, ...).
    pub const fn generates(self) -> Self {
        ALL_ELEMENTS[((self.index() + 1) % 5) as usize]
    }

    /// The element this one controls (목극토, 토극수, ...).
    pub const fn controls(self) -> Self {
        ALL_ELEMENTS[((self.index() + 2) % 5) as usize]
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yin/yang polarity (음양).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    #[serde(rename = "양")]
    Yang,
    #[serde(rename = "음")]
    Yin,
}

impl Polarity {
    /// Polarity of a position in a cycle: even = yang, odd = yin.
    pub const fn from_parity(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    /// Korean name (양, 음).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "양",
            Self::Yin => "음",
        }
    }

    /// 0 for yang, 1 for yin.
    pub const fn index(self) -> u8 {
        match self {
            Self::Yang => 0,
            Self::Yin => 1,
        }
    }
}
