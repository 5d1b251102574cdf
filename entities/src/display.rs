use serde::{Deserialize, Serialize};

/// Colour tokens shared by the list view badges, map markers and alert cards.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Yellow,
    Orange,
    Red,
}

impl ColorToken {
    pub fn hex(&self) -> &'static str {
        match self {
            ColorToken::Green => "#10B981",
            ColorToken::Yellow => "#F59E0B",
            ColorToken::Orange => "#F97316",
            ColorToken::Red => "#EF4444",
        }
    }
}
