//! Kanji common in given names, modern (新字体) stroke counts.

pub const GIVEN_NAME_KANJI: &[(char, u32)] = &[
    ('健', 11),
    ('人', 2),
    ('太', 4),
    ('郎', 9),
    ('翔', 12),
    ('大', 3),
    ('輝', 15),
    ('悠', 11),
    ('斗', 4),
    ('陽', 12),
    ('蓮', 13),
    ('湊', 12),
    ('樹', 16),
    ('蒼', 13),
    ('優', 17),
    ('奈', 8),
    ('子', 3),
    ('美', 9),
    ('花', 7),
    ('愛', 13),
    ('結', 12),
    ('菜', 11),
    ('咲', 9),
    ('凛', 15),
    ('葵', 12),
    ('莉', 10),
    ('彩', 11),
    ('心', 4),
    ('真', 10),
    ('誠', 13),
    ('和', 8),
    ('明', 8),
    ('宏', 7),
    ('浩', 10),
    ('博', 12),
    ('隆', 11),
    ('達', 12),
    ('哉', 9),
    ('也', 3),
    ('介', 4),
    ('助', 7),
    ('雄', 12),
    ('男', 7),
    ('夫', 4),
    ('之', 3),
    ('史', 5),
    ('司', 5),
    ('治', 8),
    ('修', 10),
    ('勇', 9),
    ('正', 5),
    ('直', 8),
    ('智', 12),
    ('知', 8),
    ('秀', 7),
    ('春', 9),
    ('夏', 10),
    ('秋', 9),
    ('冬', 5),
    ('恵', 10),
    ('香', 9),
    ('里', 7),
    ('理', 11),
    ('沙', 7),
    ('紀', 9),
    ('代', 5),
    ('枝', 8),
    ('由', 5),
    ('希', 7),
    ('亜', 7),
    ('舞', 15),
    ('海', 9),
    ('空', 8),
    ('光', 6),
    ('晴', 12),
    ('拓', 8),
    ('颯', 14),
    ('陸', 11),
    ('律', 9),
    ('航', 10),
    ('匠', 6),
    ('新', 13),
    ('歩', 8),
    ('壮', 6),
    ('奏', 9),
    ('朝', 12),
    ('日', 4),
    ('月', 4),
    ('星', 9),
    ('凪', 6),
    ('紬', 11),
    ('芽', 8),
    ('亮', 9),
    ('剛', 10),
    ('俊', 9),
    ('瑞', 13),
    ('穂', 15),
    ('桃', 10),
    ('梨', 11),
    ('杏', 7),
    ('萌', 11),
    ('葉', 12),
    ('乃', 2),
    ('絵', 12),
    ('織', 18),
    ('詩', 13),
    ('歌', 14),
    ('音', 9),
    ('琴', 12),
    ('翼', 17),
    ('悟', 10),
    ('竜', 10),
    ('栄', 9),
    ('学', 8),
    ('実', 8),
    ('寿', 7),
    ('弥', 8),
    ('円', 4),
    ('伝', 6),
    ('応', 7),
    ('気', 6),
    ('児', 7),
    ('仏', 4),
    ('楽', 13),
    ('縁', 15),
    ('与', 3),
];
