//! Person name entity
//!
//! A name is two validated segments: surname (姓) and given name (名).

use serde::{Deserialize, Serialize};

use crate::error::{SeimeiError, SeimeiResult};

/// 々 - repeats the previous character
pub const ITERATION_MARK: char = '々';

/// Default maximum characters per segment
pub const DEFAULT_MAX_SEGMENT_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Surname,
    Given,
}

impl SegmentKind {
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Surname => "surname",
            SegmentKind::Given => "given name",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl NameSegment {
    /// Trim and validate a raw segment
    pub fn parse(kind: SegmentKind, raw: &str, max_len: usize) -> SeimeiResult<Self> {
        let text = raw.trim();
        let segment = kind.label();

        if text.is_empty() {
            return Err(SeimeiError::EmptySegment { segment });
        }

        if let Some(bad) = text.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(SeimeiError::InvalidCharacter {
                segment,
                value: text.to_string(),
                character: bad,
            });
        }

        let len = text.chars().count();
        if len > max_len {
            return Err(SeimeiError::SegmentTooLong {
                segment,
                value: text.to_string(),
                len,
                max: max_len,
            });
        }

        if text.starts_with(ITERATION_MARK) {
            return Err(SeimeiError::LeadingIterationMark {
                segment,
                value: text.to_string(),
            });
        }

        Ok(Self {
            kind,
            text: text.to_string(),
        })
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.chars()
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Exactly one character: gets a 霊数 (+1) on its own grid
    pub fn is_single(&self) -> bool {
        self.len() == 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    pub surname: NameSegment,
    pub given: NameSegment,
}

impl PersonName {
    pub fn new(surname: &str, given: &str) -> SeimeiResult<Self> {
        Self::with_max_len(surname, given, DEFAULT_MAX_SEGMENT_LEN)
    }

    pub fn with_max_len(surname: &str, given: &str, max_len: usize) -> SeimeiResult<Self> {
        Ok(Self {
            surname: NameSegment::parse(SegmentKind::Surname, surname, max_len)?,
            given: NameSegment::parse(SegmentKind::Given, given, max_len)?,
        })
    }

    pub fn full(&self) -> String {
        format!("{} {}", self.surname.text, self.given.text)
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.surname.text, self.given.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_are_trimmed() {
        let name = PersonName::new(" 佐々木 ", "健人\n").unwrap();
        assert_eq!(name.surname.text, "佐々木");
        assert_eq!(name.given.text, "健人");
        assert_eq!(name.full(), "佐々木 健人");
    }

    #[test]
    fn empty_segments_are_rejected() {
        assert!(matches!(
            PersonName::new("", "健人"),
            Err(SeimeiError::EmptySegment { segment: "surname" })
        ));
        assert!(matches!(
            PersonName::new("佐藤", "   "),
            Err(SeimeiError::EmptySegment {
                segment: "given name"
            })
        ));
    }

    #[test]
    fn inner_whitespace_is_rejected() {
        let err = PersonName::new("佐 藤", "健").unwrap_err();
        assert!(matches!(
            err,
            SeimeiError::InvalidCharacter { character: ' ', .. }
        ));
    }

    #[test]
    fn leading_iteration_mark_is_rejected() {
        let err = PersonName::new("々木", "健").unwrap_err();
        assert!(matches!(err, SeimeiError::LeadingIterationMark { .. }));
        assert!(PersonName::new("佐々", "健").is_ok());
    }

    #[test]
    fn overlong_segment_is_rejected() {
        let err = PersonName::with_max_len("長谷川", "健", 2).unwrap_err();
        assert!(matches!(err, SeimeiError::SegmentTooLong { len: 3, max: 2, .. }));
    }

    #[test]
    fn single_character_detection() {
        let name = PersonName::new("林", "健太").unwrap();
        assert!(name.surname.is_single());
        assert!(!name.given.is_single());
    }
}
