//! Five-elements analyzer (陰陽五行)
//!
//! Element of a grid = last digit of its value (see `Element::from_grid_value`).
//! Scores: 人格 element +2, 外格 element +1, seasonal element of the
//! birthdate +1 when one is given.
//!
//! - dominant: highest score; ties go to the 人格 element, then 木火土金水 order
//! - weak: lowest score among the remaining four; ties go to the element the
//!   dominant overcomes, then onward around the 相剋 cycle

use crate::domain::entities::{ElementProfile, ElementScore, Grids, Sansai};
use crate::domain::value_objects::{Birthdate, Element, Polarity};

const PERSON_WEIGHT: u32 = 2;
const OUTER_WEIGHT: u32 = 1;
const SEASON_WEIGHT: u32 = 1;

pub fn analyze_elements(grids: &Grids, birthdate: Option<&Birthdate>) -> ElementProfile {
    let person = Element::from_grid_value(grids.person);
    let outer = Element::from_grid_value(grids.outer);
    let seasonal = birthdate.map(|b| b.seasonal_element());

    let mut scores: Vec<ElementScore> = Element::ALL
        .iter()
        .map(|&element| ElementScore { element, score: 0 })
        .collect();
    let mut add = |element: Element, weight: u32| {
        if let Some(s) = scores.iter_mut().find(|s| s.element == element) {
            s.score += weight;
        }
    };
    add(person, PERSON_WEIGHT);
    add(outer, OUTER_WEIGHT);
    if let Some(season) = seasonal {
        add(season, SEASON_WEIGHT);
    }

    let score_of = |element: Element| {
        scores
            .iter()
            .find(|s| s.element == element)
            .map(|s| s.score)
            .unwrap_or(0)
    };

    let dominant = pick_dominant(person, &score_of);
    let weak = pick_weak(dominant, &score_of);

    let heaven = Element::from_grid_value(grids.heaven);
    let earth = Element::from_grid_value(grids.earth);

    ElementProfile {
        dominant,
        weak,
        polarity: Polarity::from_value(grids.person),
        scores,
        sansai: Sansai {
            heaven,
            person,
            earth,
            heaven_to_person: heaven.relation_to(person),
            person_to_earth: person.relation_to(earth),
        },
        seasonal,
    }
}

fn pick_dominant(person: Element, score_of: &impl Fn(Element) -> u32) -> Element {
    let best = Element::ALL.iter().map(|&e| score_of(e)).max().unwrap_or(0);
    if score_of(person) == best {
        return person;
    }
    Element::ALL
        .into_iter()
        .find(|&e| score_of(e) == best)
        .unwrap_or(person)
}

fn pick_weak(dominant: Element, score_of: &impl Fn(Element) -> u32) -> Element {
    // Walk the 相剋 cycle starting from what the dominant overcomes; the
    // dominant itself is the last step and is never reached.
    let mut order = Vec::with_capacity(4);
    let mut current = dominant.overcomes();
    while current != dominant {
        order.push(current);
        current = current.overcomes();
    }

    let lowest = order.iter().map(|&e| score_of(e)).min().unwrap_or(0);
    order
        .into_iter()
        .find(|&e| score_of(e) == lowest)
        .unwrap_or_else(|| dominant.overcomes())
}
