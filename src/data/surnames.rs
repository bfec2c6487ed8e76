//! Kanji common in family names, modern (新字体) stroke counts.

pub const SURNAME_KANJI: &[(char, u32)] = &[
    ('佐', 7),
    ('藤', 18),
    ('鈴', 13),
    ('木', 4),
    ('高', 10),
    ('橋', 16),
    ('田', 5),
    ('中', 4),
    ('伊', 6),
    ('渡', 12),
    ('辺', 5),
    ('山', 3),
    ('本', 5),
    ('小', 3),
    ('林', 8),
    ('加', 5),
    ('吉', 6),
    ('清', 11),
    ('松', 8),
    ('井', 4),
    ('斎', 11),
    ('斉', 8),
    ('森', 12),
    ('池', 6),
    ('阿', 8),
    ('部', 11),
    ('石', 5),
    ('川', 3),
    ('前', 9),
    ('岡', 8),
    ('長', 8),
    ('谷', 7),
    ('村', 7),
    ('坂', 7),
    ('遠', 13),
    ('青', 8),
    ('西', 6),
    ('原', 10),
    ('宮', 10),
    ('野', 11),
    ('島', 10),
    ('内', 4),
    ('岩', 8),
    ('久', 3),
    ('保', 9),
    ('葉', 12),
    ('菊', 11),
    ('地', 6),
    ('福', 13),
    ('竹', 6),
    ('金', 8),
    ('安', 6),
    ('平', 5),
    ('北', 5),
    ('東', 8),
    ('南', 9),
    ('武', 8),
    ('工', 3),
    ('後', 9),
    ('近', 7),
    ('今', 4),
    ('丸', 3),
    ('市', 5),
    ('角', 7),
    ('菅', 11),
    ('荒', 9),
    ('土', 3),
    ('横', 15),
    ('浅', 9),
    ('熊', 14),
    ('黒', 11),
    ('白', 5),
    ('柴', 10),
    ('関', 14),
    ('酒', 10),
    ('増', 14),
    ('杉', 7),
    ('沢', 7),
    ('浜', 10),
    ('桜', 10),
    ('国', 8),
    ('堀', 11),
    ('宇', 6),
    ('須', 12),
    ('磯', 17),
    ('秋', 9),
    ('桑', 10),
    ('片', 4),
    ('矢', 5),
    ('沼', 8),
    ('根', 10),
    ('梅', 10),
    ('栗', 10),
    ('徳', 14),
    ('植', 12),
    ('泉', 9),
    ('岸', 8),
    ('早', 6),
    ('星', 9),
    ('水', 4),
    ('河', 8),
    ('江', 6),
    ('半', 5),
    ('大', 3),
    ('上', 3),
    ('下', 3),
    ('太', 4),
    ('月', 4),
    ('戸', 4),
    ('滝', 13),
    ('瀬', 19),
    ('浦', 10),
    ('尾', 7),
    ('崎', 11),
    ('嶋', 14),
    ('広', 5),
    ('寺', 6),
    ('坪', 8),
    ('堤', 12),
    ('奥', 12),
    ('服', 8),
    ('望', 11),
    ('有', 6),
    ('古', 5),
    ('畑', 9),
    ('新', 13),
    ('相', 9),
    ('馬', 10),
    ('飯', 12),
    ('塚', 12),
    ('篠', 17),
    ('樋', 15),
    ('園', 13),
    ('若', 8),
    ('柳', 9),
    ('萩', 12),
    ('羽', 6),
    ('細', 11),
    ('嵐', 12),
    ('倉', 10),
    ('蔵', 15),
    ('団', 6),
    ('条', 7),
    ('来', 7),
    ('会', 6),
    ('県', 9),
    ('豊', 13),
];
