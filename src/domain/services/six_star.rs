//! Six-star calculator (六星占術)
//!
//! star = destiny − 1 + day, folded back into 1..=60

use crate::domain::entities::SixStar;
use crate::domain::services::destiny_calendar::CYCLE;
use crate::domain::services::DestinyCalendar;
use crate::domain::value_objects::{Birthdate, StarFamily, StarPolarity};
use crate::error::{SeimeiError, SeimeiResult};

/// Fold any positive star sum into 1..=60
pub fn normalize_star(raw: u32) -> u32 {
    let mut star = raw;
    while star > CYCLE {
        star -= CYCLE;
    }
    star
}

pub fn compute_six_star(calendar: &DestinyCalendar, birthdate: Birthdate) -> SeimeiResult<SixStar> {
    let destiny_number = calendar.get(birthdate.year(), birthdate.month())?;
    let star_number = normalize_star(destiny_number - 1 + birthdate.day());

    // destiny >= 1 and day >= 1, so the star is never 0
    let family = StarFamily::from_star_number(star_number).ok_or_else(|| {
        SeimeiError::CalendarIntegrity {
            source_name: calendar.source_name().to_string(),
            message: format!("star number {star_number} outside 1..={CYCLE}"),
        }
    })?;
    let polarity = StarPolarity::BY_BRANCH[birthdate.year_branch()];

    Ok(SixStar {
        birthdate,
        destiny_number,
        star_number,
        family,
        polarity,
    })
}
