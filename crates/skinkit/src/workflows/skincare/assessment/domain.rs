use serde::{Deserialize, Serialize};

/// Coarse bucket for a tracked finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None,
    Mild,
    Moderate,
    Severe,
}

impl Level {
    pub const fn label(self) -> &'static str {
        match self {
            Level::None => "none",
            Level::Mild => "mild",
            Level::Moderate => "moderate",
            Level::Severe => "severe",
        }
    }
}

/// Named skin issue, doubling as the tag used to match catalog products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Concern {
    Acne,
    Pores,
    DarkCircles,
    Aging,
    Hydration,
    SkinHealth,
}

impl Concern {
    pub const ALL: [Concern; 6] = [
        Concern::Acne,
        Concern::Pores,
        Concern::DarkCircles,
        Concern::Aging,
        Concern::Hydration,
        Concern::SkinHealth,
    ];

    pub const fn tag(self) -> &'static str {
        match self {
            Concern::Acne => "acne",
            Concern::Pores => "pores",
            Concern::DarkCircles => "dark-circles",
            Concern::Aging => "aging",
            Concern::Hydration => "hydration",
            Concern::SkinHealth => "skin-health",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|concern| concern.tag().eq_ignore_ascii_case(tag.trim()))
    }
}

/// Level plus numeric severity (0-100) for one tracked concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub level: Level,
    pub severity: u8,
}

impl Finding {
    pub const fn new(level: Level, severity: u8) -> Self {
        Self { level, severity }
    }
}

/// Raw attributes parsed from the face-analysis provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignal {
    pub beauty_score: f64,
    pub age: u32,
}

impl RawSignal {
    pub const fn new(beauty_score: f64, age: u32) -> Self {
        Self { beauty_score, age }
    }
}

/// Normalized skin-health assessment derived from a [`RawSignal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinAssessment {
    pub skin_score: u8,
    pub acne: Finding,
    pub pores: Finding,
    pub dark_circles: Finding,
    pub age: u32,
    pub concerns: Vec<Concern>,
}

impl SkinAssessment {
    /// Finding backing a concern, if the concern is one of the tracked three.
    pub fn finding(&self, concern: Concern) -> Option<Finding> {
        match concern {
            Concern::Acne => Some(self.acne),
            Concern::Pores => Some(self.pores),
            Concern::DarkCircles => Some(self.dark_circles),
            Concern::Aging | Concern::Hydration | Concern::SkinHealth => None,
        }
    }

    /// Concerns ordered most-severe-first. Derived concerns rank as severity 0 and ties keep
    /// their evaluation order.
    pub fn prioritized_concerns(&self) -> Vec<Concern> {
        let mut ranked = self.concerns.clone();
        ranked.sort_by_key(|concern| {
            std::cmp::Reverse(self.finding(*concern).map_or(0, |finding| finding.severity))
        });
        ranked
    }

    pub fn has_concern(&self, concern: Concern) -> bool {
        self.concerns.contains(&concern)
    }
}
