use serde::{Deserialize, Serialize};

use super::{
    errors::LeaderboardError,
    models::{Badge, PlayerRecord},
};
use crate::ranking::{CategoryKey, Tier};

/// Badge as submitted by the add form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeRequest {
    pub category: String,
    pub tier: String,
}

/// Request payload for adding a player.
///
/// Required fields default to empty so a missing field is reported as a
/// validation error naming it, not as a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddPlayerRequest {
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub points: Option<u64>,
    #[serde(default)]
    pub badges: Vec<BadgeRequest>,
    /// Category the entry was submitted under. Never grants membership on its
    /// own: unless it is "overall" the badge list must name it too.
    #[serde(default)]
    pub category: Option<String>,
}

impl AddPlayerRequest {
    pub fn new(
        identity: impl Into<String>,
        display_name: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            identity: identity.into(),
            display_name: display_name.into(),
            region: region.into(),
            ..Self::default()
        }
    }

    pub fn with_points(mut self, points: u64) -> Self {
        self.points = Some(points);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_badge(mut self, category: impl Into<String>, tier: impl Into<String>) -> Self {
        self.badges.push(BadgeRequest {
            category: category.into(),
            tier: tier.into(),
        });
        self
    }

    pub fn submitted_under(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Trims, validates and converts the request into a record
    pub fn into_record(self) -> Result<PlayerRecord, LeaderboardError> {
        let points = self.points.unwrap_or_default();
        if i64::try_from(points).is_err() {
            return Err(LeaderboardError::Validation(format!(
                "points {points} out of range"
            )));
        }

        let mut badges = Vec::with_capacity(self.badges.len());
        for badge in &self.badges {
            let category = CategoryKey::try_from(badge.category.trim()).map_err(|raw| {
                LeaderboardError::Validation(format!("unknown category '{raw}' in badges"))
            })?;
            let tier = Tier::try_from(badge.tier.as_str()).map_err(|raw| {
                LeaderboardError::Validation(format!("unknown tier '{raw}' for {category}"))
            })?;
            badges.push(Badge { category, tier });
        }

        let mut record = PlayerRecord::new(
            self.identity.trim(),
            self.display_name.trim(),
            self.region.trim(),
        )
        .with_points(points)
        .with_title(self.title.as_deref().unwrap_or_default().trim());
        record.set_badges(badges);
        record.validate()?;

        if let Some(raw) = self.category.as_deref() {
            let category = CategoryKey::try_from(raw.trim()).map_err(|raw| {
                LeaderboardError::Validation(format!("unknown category '{raw}'"))
            })?;
            if !category.is_overall() && !record.has_badge(category) {
                return Err(LeaderboardError::Validation(format!(
                    "player submitted under {category} must carry a {category} badge"
                )));
            }
        }

        Ok(record)
    }
}

/// Query string for the text filter on list/search routes
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

/// Registry entry for the tab list
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct CategoryResponse {
    pub key: CategoryKey,
    pub label: String,
}

/// Aggregate numbers used for UI scaling
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub max_points: u64,
    pub entry_count: usize,
}
