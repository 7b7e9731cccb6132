//! Element tally and remedial-element (용신) selection.
//!
//! The remedial element is a compensatory heuristic: the first element with
//! no representation in canonical order, or failing that the first element
//! holding the strict minimum count. Downstream readers treat the result as
//! ground truth, so ties must always resolve the same way.

use serde::{Deserialize, Serialize};

use crate::element::{ALL_ELEMENTS, Element};
use crate::pillar::Pillar;

/// Per-element counts over a set of pillars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementCount {
    #[serde(rename = "목")]
    pub wood: u8,
    #[serde(rename = "화")]
    pub fire: u8,
    #[serde(rename = "토")]
    pub earth: u8,
    #[serde(rename = "금")]
    pub metal: u8,
    #[serde(rename = "수")]
    pub water: u8,
}

impl ElementCount {
    /// Build from counts in canonical order (목, 화, 토, 금, 수).
    pub const fn from_array(counts: [u8; 5]) -> Self {
        Self {
            wood: counts[0],
            fire: counts[1],
            earth: counts[2],
            metal: counts[3],
            water: counts[4],
        }
    }

    /// Counts in canonical order.
    pub const fn to_array(self) -> [u8; 5] {
        [self.wood, self.fire, self.earth, self.metal, self.water]
    }

    /// Count stem and branch elements of every pillar. Unknown fields add nothing.
    pub fn tally(pillars: &[Pillar]) -> Self {
        let mut count = Self::default();
        for element in pillars.iter().flat_map(Pillar::elements) {
            count.add(element);
        }
        count
    }

    pub fn get(&self, element: Element) -> u8 {
        match element {
            Element::Wood => self.wood,
            Element::Fire => self.fire,
            Element::Earth => self.earth,
            Element::Metal => self.metal,
            Element::Water => self.water,
        }
    }

    fn add(&mut self, element: Element) {
        let slot = match element {
            Element::Wood => &mut self.wood,
            Element::Fire => &mut self.fire,
            Element::Earth => &mut self.earth,
            Element::Metal => &mut self.metal,
            Element::Water => &mut self.water,
        };
        *slot = slot.saturating_add(1);
    }

    /// Sum over all elements.
    pub fn total(&self) -> u32 {
        self.to_array().iter().map(|&c| c as u32).sum()
    }

    /// Elements with a zero count, in canonical order.
    pub fn missing(&self) -> Vec<Element> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.get(e) == 0)
            .collect()
    }

    /// The most represented element (first in canonical order on ties).
    pub fn dominant(&self) -> Element {
        let mut best = Element::Wood;
        for e in ALL_ELEMENTS {
            if self.get(e) > self.get(best) {
                best = e;
            }
        }
        best
    }
}

/// Select the remedial element for a count.
pub fn remedial_element(count: &ElementCount) -> Element {
    // A zero is the strict minimum whenever present, so one scan covers both
    // the missing-first and least-represented rules.
    let mut best = Element::Wood;
    for e in ALL_ELEMENTS {
        if count.get(e) < count.get(best) {
            best = e;
        }
    }
    best
}
