//! Kanji numerals, counted by the number they stand for rather than by
//! brush strokes (四 = 4, not 5). 百, 千 and 万 use their written strokes.

pub const NUMERALS: &[(char, u32)] = &[
    ('一', 1),
    ('二', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
    ('十', 10),
    ('百', 6),
    ('千', 3),
    ('万', 3),
];
