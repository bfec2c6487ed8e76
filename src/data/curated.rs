//! Curated entries: characters the generic tables get wrong or miss.
//! A user-supplied override file is merged on top of these.

/// (character, strokes, modern form if it is a variant)
pub const CURATED: &[(char, u32, Option<char>)] = &[
    ('〆', 2, None),
    ('髙', 11, Some('高')),
    ('﨑', 11, Some('崎')),
    ('𠮷', 6, Some('吉')),
    ('隆', 12, None),
];
