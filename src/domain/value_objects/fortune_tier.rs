//! Fortune tier value object
//!
//! Six tiers with fixed scores. The scores are part of the reference table and
//! feed the weighted headline score, so they are constants rather than derived.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FortuneTier {
    /// 大吉
    GreatFortune,
    /// 吉
    Fortune,
    /// 中吉
    ModerateFortune,
    /// 凶
    Misfortune,
    /// 中凶
    ModerateMisfortune,
    /// 大凶
    GreatMisfortune,
}

impl FortuneTier {
    pub const ALL: [FortuneTier; 6] = [
        FortuneTier::GreatFortune,
        FortuneTier::Fortune,
        FortuneTier::ModerateFortune,
        FortuneTier::Misfortune,
        FortuneTier::ModerateMisfortune,
        FortuneTier::GreatMisfortune,
    ];

    pub fn score(&self) -> u32 {
        match self {
            FortuneTier::GreatFortune => 100,
            FortuneTier::Fortune => 80,
            FortuneTier::ModerateFortune => 60,
            FortuneTier::Misfortune => 40,
            FortuneTier::ModerateMisfortune => 30,
            FortuneTier::GreatMisfortune => 20,
        }
    }

    pub fn kanji(&self) -> &'static str {
        match self {
            FortuneTier::GreatFortune => "大吉",
            FortuneTier::Fortune => "吉",
            FortuneTier::ModerateFortune => "中吉",
            FortuneTier::Misfortune => "凶",
            FortuneTier::ModerateMisfortune => "中凶",
            FortuneTier::GreatMisfortune => "大凶",
        }
    }

    pub fn is_auspicious(&self) -> bool {
        matches!(
            self,
            FortuneTier::GreatFortune | FortuneTier::Fortune | FortuneTier::ModerateFortune
        )
    }
}

impl std::fmt::Display for FortuneTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kanji())
    }
}
