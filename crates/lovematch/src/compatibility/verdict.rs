use serde::{Deserialize, Serialize};

/// Score band shown alongside a compatibility result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompatibilityTier {
    JustFriends,
    NotGreat,
    Decent,
    Good,
    Great,
    Perfect,
}

impl CompatibilityTier {
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Perfect,
            75..=89 => Self::Great,
            60..=74 => Self::Good,
            40..=59 => Self::Decent,
            20..=39 => Self::NotGreat,
            _ => Self::JustFriends,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect match",
            Self::Great => "Great match",
            Self::Good => "Good match",
            Self::Decent => "Decent match",
            Self::NotGreat => "Not a great match",
            Self::JustFriends => "Just friends",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::Perfect => "Perfect match! You were destined to be together!",
            Self::Great => "Great match! Your love has amazing potential!",
            Self::Good => "Good match! You have a strong connection!",
            Self::Decent => "Decent match. You might need to work on your relationship.",
            Self::NotGreat => "Not a great match. But opposites sometimes attract!",
            Self::JustFriends => {
                "Maybe just be friends? The stars aren't aligned for romance."
            }
        }
    }
}
