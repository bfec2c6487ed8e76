//! Fortune classification table (81 numbers)
//!
//! Rows 1..=81 carry a fixed tier and description. Above 81 the number wraps
//! back to the start of the table: `((n - 1) % 80) + 1`, so 82 reads as 2 and
//! 161 as 1. Zero is rejected.

use crate::domain::entities::{GridFortune, GridFortunes, GridKind, Grids};
use crate::domain::value_objects::FortuneTier::{
    self, Fortune, GreatFortune, GreatMisfortune, Misfortune, ModerateFortune,
    ModerateMisfortune,
};
use crate::domain::value_objects::Gender;
use crate::error::{SeimeiError, SeimeiResult};

/// Highest explicit row
pub const TABLE_MAX: u32 = 81;

/// Period used to wrap counts above [`TABLE_MAX`]
pub const WRAP_PERIOD: u32 = 80;

/// 頭領運 numbers: noted as too forceful for women in 人格/総格
pub const FEMALE_CAUTION_NUMBERS: [u32; 4] = [21, 23, 33, 39];

const FEMALE_CAUTION: &str = "頭領運: 女性には運勢が強すぎるとされる数";

/// (tier, description) for numbers 1..=81
pub const FORTUNE_ROWS: [(FortuneTier, &str); 81] = [
    (GreatFortune, "万物の始まり。独立心と発展の数"), // 1
    (Misfortune, "分離と不安定。人に依存しがちな数"), // 2
    (GreatFortune, "明朗活発。才能が開花する数"), // 3
    (Misfortune, "破壊と苦労。努力が報われにくい数"), // 4
    (GreatFortune, "調和と福徳。心身ともに安定する数"), // 5
    (GreatFortune, "天の恵み。家運が栄える数"), // 6
    (Fortune, "独立独歩。意志を貫く強さの数"), // 7
    (Fortune, "努力と忍耐。着実に前進する数"), // 8
    (Misfortune, "才知はあるが報われにくい数"), // 9
    (GreatMisfortune, "空虚と喪失。浮き沈みの激しい数"), // 10
    (GreatFortune, "穏やかな発展。家運再興の数"), // 11
    (Misfortune, "意志薄弱。挫折しやすい数"), // 12
    (GreatFortune, "知恵と人気。才能で成功する数"), // 13
    (Misfortune, "孤独と離散。不満を抱えやすい数"), // 14
    (GreatFortune, "人望と福寿。円満に栄える数"), // 15
    (GreatFortune, "面倒見がよく、人の上に立つ数"), // 16
    (Fortune, "強い意志で困難を突破する数"), // 17
    (Fortune, "意志堅固。目標を達成する数"), // 18
    (Misfortune, "才能はあるが障害に阻まれる数"), // 19
    (GreatMisfortune, "災厄と空虚。物事が実りにくい数"), // 20
    (GreatFortune, "頭領運。独立して人を率いる数"), // 21
    (Misfortune, "中途挫折。気力が続かない数"), // 22
    (GreatFortune, "旭日昇天。勢いよく発展する数"), // 23
    (GreatFortune, "財運に恵まれ、家庭円満の数"), // 24
    (Fortune, "個性と才覚。自力で道を開く数"), // 25
    (ModerateMisfortune, "波瀾万丈。英雄的だが浮沈の多い数"), // 26
    (ModerateFortune, "自我が強く批判を受けやすいが、実力のある数"), // 27
    (Misfortune, "波瀾と孤立。家族の縁が薄い数"), // 28
    (Fortune, "知略と財力。望みが叶う数"), // 29
    (ModerateFortune, "浮沈が激しい賭けの数"), // 30
    (GreatFortune, "智勇兼備。人望を集める数"), // 31
    (GreatFortune, "好機をつかみ、援助に恵まれる数"), // 32
    (GreatFortune, "頭領運。勢いが強く名声を得る数"), // 33
    (GreatMisfortune, "破家。災いが続きやすい数"), // 34
    (Fortune, "温和で学芸に秀でる数"), // 35
    (ModerateMisfortune, "義侠心が強いが波瀾の多い数"), // 36
    (Fortune, "誠実で信頼を得る独立の数"), // 37
    (ModerateFortune, "芸術や技芸に才能を発揮する数"), // 38
    (Fortune, "頭領運。富と権威を得る数"), // 39
    (ModerateMisfortune, "知略はあるが投機的で不安定な数"), // 40
    (GreatFortune, "実力と徳望を兼ね備えた数"), // 41
    (ModerateMisfortune, "多芸多才だが器用貧乏の数"), // 42
    (ModerateMisfortune, "散財と気迷い。外見と内実が異なる数"), // 43
    (GreatMisfortune, "苦難と破綻。心労の多い数"), // 44
    (GreatFortune, "順風満帆。大志を遂げる数"), // 45
    (Misfortune, "努力が実りにくく苦労の多い数"), // 46
    (GreatFortune, "協力者に恵まれ、花開く数"), // 47
    (GreatFortune, "知恵と徳で人を導く顧問の数"), // 48
    (ModerateMisfortune, "吉凶が入れ替わる変化の数"), // 49
    (Misfortune, "成功と没落が背中合わせの数"), // 50
    (ModerateFortune, "盛衰を繰り返す数"), // 51
    (Fortune, "先見の明で事業を成す数"), // 52
    (ModerateMisfortune, "表面は幸福でも内に憂いを抱く数"), // 53
    (GreatMisfortune, "辛苦が絶えない数"), // 54
    (ModerateMisfortune, "外見は華やかでも内情は苦しい数"), // 55
    (Misfortune, "気力に欠け、物事が続かない数"), // 56
    (Fortune, "困難を乗り越えて栄える数"), // 57
    (ModerateFortune, "晩年に開運する数"), // 58
    (Misfortune, "忍耐力に欠け、成功しにくい数"), // 59
    (GreatMisfortune, "暗中模索。方向を見失う数"), // 60
    (Fortune, "名誉と財を得るが、和を心がけたい数"), // 61
    (Misfortune, "信用を失いやすく基盤が弱い数"), // 62
    (GreatFortune, "万事順調。富貴繁栄の数"), // 63
    (GreatMisfortune, "浮沈が激しく災いを招く数"), // 64
    (GreatFortune, "富貴長寿。家運隆盛の数"), // 65
    (Misfortune, "内外の不和に悩む数"), // 66
    (GreatFortune, "自力で事業を成就する数"), // 67
    (Fortune, "発明の才。思慮深く成功する数"), // 68
    (GreatMisfortune, "不安定で行き詰まりやすい数"), // 69
    (GreatMisfortune, "空虚と寂寥の数"), // 70
    (ModerateFortune, "努力次第で安定を得る数"), // 71
    (ModerateMisfortune, "前半は吉、後半に苦労する数"), // 72
    (ModerateFortune, "志は高いが実行力に欠ける数"), // 73
    (Misfortune, "無為に陥りやすい数"), // 74
    (ModerateFortune, "保守的に進めば安泰の数"), // 75
    (GreatMisfortune, "離散と破綻の数"), // 76
    (ModerateFortune, "吉凶相半ばする数"), // 77
    (ModerateFortune, "中年まで栄え、晩年に衰える数"), // 78
    (Misfortune, "精神が定まらず信用を得にくい数"), // 79
    (GreatMisfortune, "困苦の多い数"), // 80
    (GreatFortune, "還元の数。一に戻り再び栄える数"), // 81
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortuneEntry {
    pub number: u32,
    pub tier: FortuneTier,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneTable {
    entries: Vec<FortuneEntry>,
}

impl FortuneTable {
    pub fn builtin() -> SeimeiResult<Self> {
        Self::from_rows(&FORTUNE_ROWS)
    }

    /// Build from explicit rows, numbered from 1. Must cover 1..=81 exactly.
    pub fn from_rows(rows: &[(FortuneTier, &'static str)]) -> SeimeiResult<Self> {
        if rows.len() != TABLE_MAX as usize {
            return Err(SeimeiError::FortuneTableIncomplete {
                message: format!("expected {} rows, found {}", TABLE_MAX, rows.len()),
            });
        }

        let mut entries = Vec::with_capacity(rows.len());
        for (idx, &(tier, description)) in rows.iter().enumerate() {
            let number = idx as u32 + 1;
            if description.trim().is_empty() {
                return Err(SeimeiError::FortuneTableIncomplete {
                    message: format!("row {number} has no description"),
                });
            }
            entries.push(FortuneEntry {
                number,
                tier,
                description,
            });
        }

        Ok(Self { entries })
    }

    /// Table row used for a stroke count
    pub fn table_number(count: u32) -> SeimeiResult<u32> {
        match count {
            0 => Err(SeimeiError::ZeroStrokeCount),
            1..=TABLE_MAX => Ok(count),
            _ => Ok((count - 1) % WRAP_PERIOD + 1),
        }
    }

    pub fn lookup(&self, count: u32) -> SeimeiResult<&FortuneEntry> {
        let number = Self::table_number(count)?;
        self.entries
            .get(number as usize - 1)
            .ok_or_else(|| SeimeiError::FortuneTableIncomplete {
                message: format!("row {number} missing"),
            })
    }

    pub fn grid_fortune(&self, kind: GridKind, value: u32, gender: Gender) -> SeimeiResult<GridFortune> {
        let entry = self.lookup(value)?;
        let caution = match (gender, kind) {
            (Gender::Female, GridKind::Person | GridKind::Total)
                if FEMALE_CAUTION_NUMBERS.contains(&entry.number) =>
            {
                Some(FEMALE_CAUTION.to_string())
            }
            _ => None,
        };

        Ok(GridFortune {
            kind,
            value,
            table_number: entry.number,
            tier: entry.tier,
            score: entry.tier.score(),
            description: entry.description.to_string(),
            caution,
        })
    }

    pub fn grid_fortunes(&self, grids: &Grids, gender: Gender) -> SeimeiResult<GridFortunes> {
        Ok(GridFortunes {
            heaven: self.grid_fortune(GridKind::Heaven, grids.heaven, gender)?,
            person: self.grid_fortune(GridKind::Person, grids.person, gender)?,
            earth: self.grid_fortune(GridKind::Earth, grids.earth, gender)?,
            outer: self.grid_fortune(GridKind::Outer, grids.outer, gender)?,
            total: self.grid_fortune(GridKind::Total, grids.total, gender)?,
        })
    }

    pub fn entries(&self) -> &[FortuneEntry] {
        &self.entries
    }
}

/// Weighted headline score: (天 + 地 + 外 + 2·人 + 2·総) / 7, rounded half up
pub fn headline_score(fortunes: &GridFortunes) -> u32 {
    let weighted: u32 = fortunes.iter().map(|f| f.score * f.kind.weight()).sum();
    let weights: u32 = GridKind::ALL.iter().map(|k| k.weight()).sum();
    (weighted * 2 + weights) / (weights * 2)
}
