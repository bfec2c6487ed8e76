//! 旧字体 (pre-reform forms) with their own stroke counts and the modern
//! form each one canonicalizes to.

/// (old form, strokes, modern form)
pub const OLD_FORMS: &[(char, u32, char)] = &[
    ('澤', 16, '沢'),
    ('邊', 19, '辺'),
    ('齋', 17, '斎'),
    ('齊', 14, '斉'),
    ('濱', 17, '浜'),
    ('櫻', 21, '桜'),
    ('廣', 15, '広'),
    ('國', 11, '国'),
    ('惠', 12, '恵'),
    ('眞', 10, '真'),
    ('亞', 8, '亜'),
    ('榮', 14, '栄'),
    ('學', 16, '学'),
    ('實', 14, '実'),
    ('德', 15, '徳'),
    ('龍', 16, '竜'),
    ('瀧', 19, '滝'),
    ('藏', 18, '蔵'),
    ('壽', 14, '寿'),
    ('彌', 17, '弥'),
    ('豐', 18, '豊'),
    ('團', 14, '団'),
    ('圓', 13, '円'),
    ('淺', 11, '浅'),
    ('黑', 12, '黒'),
    ('關', 19, '関'),
    ('縣', 16, '県'),
    ('會', 13, '会'),
    ('來', 8, '来'),
    ('條', 11, '条'),
    ('萬', 13, '万'),
    ('與', 14, '与'),
    ('傳', 13, '伝'),
    ('應', 17, '応'),
    ('增', 15, '増'),
    ('瀨', 19, '瀬'),
    ('氣', 10, '気'),
    ('兒', 8, '児'),
    ('佛', 7, '仏'),
    ('樂', 15, '楽'),
    ('緣', 15, '縁'),
];
