use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Leaderboard views, declared in tab order.
///
/// This enum is the single registry of categories: badge parsing, the
/// category index and the `/categories` listing all read from it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
#[serde(rename_all = "camelCase")]
pub enum CategoryKey {
    Overall,
    SpearMace,
    Vanilla,
    Uhc,
    DiamondSmpNethopSpear,
    Nethop,
    Smp,
    Sword,
    Axe,
    Mace,
}

impl CategoryKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKey::Overall => "overall",
            CategoryKey::SpearMace => "spearMace",
            CategoryKey::Vanilla => "vanilla",
            CategoryKey::Uhc => "uhc",
            CategoryKey::DiamondSmpNethopSpear => "diamondSmpNethopSpear",
            CategoryKey::Nethop => "nethop",
            CategoryKey::Smp => "smp",
            CategoryKey::Sword => "sword",
            CategoryKey::Axe => "axe",
            CategoryKey::Mace => "mace",
        }
    }

    /// Human readable tab label
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKey::Overall => "Overall",
            CategoryKey::SpearMace => "Spear Mace",
            CategoryKey::Vanilla => "Vanilla",
            CategoryKey::Uhc => "UHC",
            CategoryKey::DiamondSmpNethopSpear => "Diamond SMP Nethop Spear",
            CategoryKey::Nethop => "NethOP",
            CategoryKey::Smp => "SMP",
            CategoryKey::Sword => "Sword",
            CategoryKey::Axe => "Axe",
            CategoryKey::Mace => "Mace",
        }
    }

    /// "overall" contains every player regardless of badges
    pub fn is_overall(&self) -> bool {
        matches!(self, CategoryKey::Overall)
    }

    pub fn all() -> Vec<CategoryKey> {
        CategoryKey::iter().collect()
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for CategoryKey {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        CategoryKey::iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
