use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use super::errors::LeaderboardError;
use crate::ranking::{CategoryKey, Tier};

/// Region codes with a dedicated display style. Any other non-empty code is
/// still accepted on a player record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Region {
    NA,
    EU,
    AS,
    SA,
    OC,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NA => "NA",
            Region::EU => "EU",
            Region::AS => "AS",
            Region::SA => "SA",
            Region::OC => "OC",
        }
    }

    pub fn is_known(code: &str) -> bool {
        Region::iter().any(|region| region.as_str() == code)
    }
}

/// A `(category, tier)` pair granting membership in that category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub category: CategoryKey,
    pub tier: Tier,
}

/// Canonical player record, keyed by `identity`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub identity: String,
    pub display_name: String,
    pub region: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub badges: Vec<Badge>,
}

impl PlayerRecord {
    pub fn new(
        identity: impl Into<String>,
        display_name: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            display_name: display_name.into(),
            region: region.into(),
            title: String::new(),
            points: 0,
            badges: Vec::new(),
        }
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = points;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_badge(mut self, category: CategoryKey, tier: Tier) -> Self {
        let mut badges = std::mem::take(&mut self.badges);
        badges.push(Badge { category, tier });
        self.set_badges(badges);
        self
    }

    /// Replaces the badge set. Later entries win when a category repeats;
    /// the stored list is sorted in registry order.
    pub fn set_badges(&mut self, badges: impl IntoIterator<Item = Badge>) {
        let by_category: BTreeMap<CategoryKey, Tier> = badges
            .into_iter()
            .map(|badge| (badge.category, badge.tier))
            .collect();

        self.badges = by_category
            .into_iter()
            .map(|(category, tier)| Badge { category, tier })
            .collect();
    }

    pub fn has_badge(&self, category: CategoryKey) -> bool {
        self.badges.iter().any(|badge| badge.category == category)
    }

    pub fn tier_for(&self, category: CategoryKey) -> Option<Tier> {
        self.badges
            .iter()
            .find(|badge| badge.category == category)
            .map(|badge| badge.tier)
    }

    /// Checks the fields an add requires: identity, display name and region
    pub fn validate(&self) -> Result<(), LeaderboardError> {
        if self.identity.trim().is_empty() {
            return Err(LeaderboardError::Validation(
                "identity is required".to_string(),
            ));
        }
        if self.display_name.trim().is_empty() {
            return Err(LeaderboardError::Validation(
                "display name is required".to_string(),
            ));
        }
        if self.region.trim().is_empty() {
            return Err(LeaderboardError::Validation(
                "region is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A player together with its position inside one category's ranking.
/// The position is computed on every read and never stored on the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    #[serde(flatten)]
    pub player: PlayerRecord,
    pub rank_position: usize,
}
