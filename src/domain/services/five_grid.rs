//! Five-grid calculator (五格)
//!
//! - 天格 = Σ surname (+1 霊数 for a one-character surname)
//! - 地格 = Σ given (+1 霊数 for a one-character given name)
//! - 人格 = last surname stroke + first given stroke
//! - 総格 = Σ all strokes, no 霊数
//! - 外格 = 天格 + 地格 − 人格, so each 霊数 is counted exactly once

use crate::domain::entities::Grids;
use crate::error::{SeimeiError, SeimeiResult};

/// Virtual stroke added to a one-character segment
pub const REISUU: u32 = 1;

pub fn compute_grids(surname: &[u32], given: &[u32]) -> SeimeiResult<Grids> {
    let (Some(&surname_last), Some(&given_first)) = (surname.last(), given.first()) else {
        return Err(SeimeiError::EmptySegment {
            segment: if surname.is_empty() {
                "surname"
            } else {
                "given name"
            },
        });
    };

    let surname_sum: u32 = surname.iter().sum();
    let given_sum: u32 = given.iter().sum();

    let surname_reisuu = if surname.len() == 1 { REISUU } else { 0 };
    let given_reisuu = if given.len() == 1 { REISUU } else { 0 };

    let heaven = surname_sum + surname_reisuu;
    let earth = given_sum + given_reisuu;
    let person = surname_last + given_first;
    let total = surname_sum + given_sum;
    // person <= surname_sum + given_sum, so this never underflows
    let outer = heaven + earth - person;

    Ok(Grids {
        heaven,
        person,
        earth,
        outer,
        total,
        surname_reisuu,
        given_reisuu,
    })
}
