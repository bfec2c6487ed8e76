//! Hiragana and katakana stroke counts.
//!
//! Voiced marks (゛) add 2 strokes, the semi-voiced mark (゜) adds 1. Small
//! kana count the same as their full-size form.

use crate::domain::entities::{StrokeEntry, StrokeLayerKind};

const HIRAGANA_BASE: &[(char, u32)] = &[
    ('あ', 3),
    ('い', 2),
    ('う', 2),
    ('え', 2),
    ('お', 3),
    ('か', 3),
    ('き', 4),
    ('く', 1),
    ('け', 3),
    ('こ', 2),
    ('さ', 3),
    ('し', 1),
    ('す', 2),
    ('せ', 3),
    ('そ', 2),
    ('た', 4),
    ('ち', 3),
    ('つ', 1),
    ('て', 1),
    ('と', 2),
    ('な', 4),
    ('に', 3),
    ('ぬ', 2),
    ('ね', 2),
    ('の', 1),
    ('は', 3),
    ('ひ', 1),
    ('ふ', 4),
    ('へ', 1),
    ('ほ', 4),
    ('ま', 3),
    ('み', 2),
    ('む', 3),
    ('め', 2),
    ('も', 3),
    ('や', 3),
    ('ゆ', 2),
    ('よ', 2),
    ('ら', 2),
    ('り', 2),
    ('る', 1),
    ('れ', 2),
    ('ろ', 1),
    ('わ', 2),
    ('を', 3),
    ('ん', 1),
    ('ゝ', 1),
];

const HIRAGANA_SMALL: &[(char, char)] = &[
    ('ぁ', 'あ'),
    ('ぃ', 'い'),
    ('ぅ', 'う'),
    ('ぇ', 'え'),
    ('ぉ', 'お'),
    ('っ', 'つ'),
    ('ゃ', 'や'),
    ('ゅ', 'ゆ'),
    ('ょ', 'よ'),
    ('ゎ', 'わ'),
];

const HIRAGANA_VOICED: &[(char, char)] = &[
    ('が', 'か'),
    ('ぎ', 'き'),
    ('ぐ', 'く'),
    ('げ', 'け'),
    ('ご', 'こ'),
    ('ざ', 'さ'),
    ('じ', 'し'),
    ('ず', 'す'),
    ('ぜ', 'せ'),
    ('ぞ', 'そ'),
    ('だ', 'た'),
    ('ぢ', 'ち'),
    ('づ', 'つ'),
    ('で', 'て'),
    ('ど', 'と'),
    ('ば', 'は'),
    ('び', 'ひ'),
    ('ぶ', 'ふ'),
    ('べ', 'へ'),
    ('ぼ', 'ほ'),
    ('ゔ', 'う'),
    ('ゞ', 'ゝ'),
];

const HIRAGANA_SEMI_VOICED: &[(char, char)] = &[
    ('ぱ', 'は'),
    ('ぴ', 'ひ'),
    ('ぷ', 'ふ'),
    ('ぺ', 'へ'),
    ('ぽ', 'ほ'),
];

const KATAKANA_BASE: &[(char, u32)] = &[
    ('ア', 2),
    ('イ', 2),
    ('ウ', 3),
    ('エ', 3),
    ('オ', 3),
    ('カ', 2),
    ('キ', 3),
    ('ク', 2),
    ('ケ', 3),
    ('コ', 2),
    ('サ', 3),
    ('シ', 3),
    ('ス', 2),
    ('セ', 2),
    ('ソ', 2),
    ('タ', 3),
    ('チ', 3),
    ('ツ', 3),
    ('テ', 3),
    ('ト', 2),
    ('ナ', 2),
    ('ニ', 2),
    ('ヌ', 2),
    ('ネ', 4),
    ('ノ', 1),
    ('ハ', 2),
    ('ヒ', 2),
    ('フ', 1),
    ('ヘ', 1),
    ('ホ', 4),
    ('マ', 2),
    ('ミ', 3),
    ('ム', 2),
    ('メ', 2),
    ('モ', 3),
    ('ヤ', 2),
    ('ユ', 2),
    ('ヨ', 3),
    ('ラ', 2),
    ('リ', 2),
    ('ル', 2),
    ('レ', 1),
    ('ロ', 3),
    ('ワ', 2),
    ('ヲ', 3),
    ('ン', 2),
    ('ー', 1),
    ('ヽ', 1),
];

const KATAKANA_SMALL: &[(char, char)] = &[
    ('ァ', 'ア'),
    ('ィ', 'イ'),
    ('ゥ', 'ウ'),
    ('ェ', 'エ'),
    ('ォ', 'オ'),
    ('ッ', 'ツ'),
    ('ャ', 'ヤ'),
    ('ュ', 'ユ'),
    ('ョ', 'ヨ'),
    ('ヮ', 'ワ'),
    ('ヵ', 'カ'),
    ('ヶ', 'ケ'),
];

const KATAKANA_VOICED: &[(char, char)] = &[
    ('ガ', 'カ'),
    ('ギ', 'キ'),
    ('グ', 'ク'),
    ('ゲ', 'ケ'),
    ('ゴ', 'コ'),
    ('ザ', 'サ'),
    ('ジ', 'シ'),
    ('ズ', 'ス'),
    ('ゼ', 'セ'),
    ('ゾ', 'ソ'),
    ('ダ', 'タ'),
    ('ヂ', 'チ'),
    ('ヅ', 'ツ'),
    ('デ', 'テ'),
    ('ド', 'ト'),
    ('バ', 'ハ'),
    ('ビ', 'ヒ'),
    ('ブ', 'フ'),
    ('ベ', 'ヘ'),
    ('ボ', 'ホ'),
    ('ヴ', 'ウ'),
    ('ヾ', 'ヽ'),
];

const KATAKANA_SEMI_VOICED: &[(char, char)] = &[
    ('パ', 'ハ'),
    ('ピ', 'ヒ'),
    ('プ', 'フ'),
    ('ペ', 'ヘ'),
    ('ポ', 'ホ'),
];

const VOICED_MARK_STROKES: u32 = 2;
const SEMI_VOICED_MARK_STROKES: u32 = 1;

pub fn hiragana() -> Vec<StrokeEntry> {
    expand(
        StrokeLayerKind::Hiragana,
        HIRAGANA_BASE,
        HIRAGANA_SMALL,
        HIRAGANA_VOICED,
        HIRAGANA_SEMI_VOICED,
    )
}

pub fn katakana() -> Vec<StrokeEntry> {
    expand(
        StrokeLayerKind::Katakana,
        KATAKANA_BASE,
        KATAKANA_SMALL,
        KATAKANA_VOICED,
        KATAKANA_SEMI_VOICED,
    )
}

fn expand(
    kind: StrokeLayerKind,
    base: &[(char, u32)],
    small: &[(char, char)],
    voiced: &[(char, char)],
    semi_voiced: &[(char, char)],
) -> Vec<StrokeEntry> {
    let strokes_of = |c: char| {
        base.iter()
            .find(|(b, _)| *b == c)
            .map(|(_, n)| *n)
    };

    let mut entries: Vec<StrokeEntry> = base
        .iter()
        .map(|&(c, n)| StrokeEntry::new(c, n, kind))
        .collect();

    let derived = small
        .iter()
        .map(|&(c, b)| (c, b, 0))
        .chain(voiced.iter().map(|&(c, b)| (c, b, VOICED_MARK_STROKES)))
        .chain(
            semi_voiced
                .iter()
                .map(|&(c, b)| (c, b, SEMI_VOICED_MARK_STROKES)),
        );

    for (c, b, extra) in derived {
        if let Some(n) = strokes_of(b) {
            entries.push(StrokeEntry::new(c, n + extra, kind));
        }
    }

    entries
}
