use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Badge tier label. Display only, never used for ordering players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Tier {
    #[serde(rename = "HT1")]
    Ht1,
    #[serde(rename = "HT2")]
    Ht2,
    #[serde(rename = "HT3")]
    Ht3,
    #[serde(rename = "HT4")]
    Ht4,
    #[serde(rename = "HT5")]
    Ht5,
    #[serde(rename = "LT1")]
    Lt1,
    #[serde(rename = "LT2")]
    Lt2,
    #[serde(rename = "LT3")]
    Lt3,
    #[serde(rename = "LT4")]
    Lt4,
    #[serde(rename = "LT5")]
    Lt5,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Ht1 => "HT1",
            Tier::Ht2 => "HT2",
            Tier::Ht3 => "HT3",
            Tier::Ht4 => "HT4",
            Tier::Ht5 => "HT5",
            Tier::Lt1 => "LT1",
            Tier::Lt2 => "LT2",
            Tier::Lt3 => "LT3",
            Tier::Lt4 => "LT4",
            Tier::Lt5 => "LT5",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Tier {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let normalized = s.trim().to_ascii_uppercase();
        Tier::iter()
            .find(|tier| tier.as_str() == normalized)
            .ok_or_else(|| s.to_string())
    }
}
