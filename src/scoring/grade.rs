use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall assessment band for a final 0-100 health score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthGrade {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
}

impl HealthGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => HealthGrade::Excellent,
            60..=79 => HealthGrade::Good,
            40..=59 => HealthGrade::Fair,
            20..=39 => HealthGrade::Poor,
            _ => HealthGrade::VeryPoor,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthGrade::Excellent => "Excellent",
            HealthGrade::Good => "Good",
            HealthGrade::Fair => "Fair",
            HealthGrade::Poor => "Poor",
            HealthGrade::VeryPoor => "Very Poor",
        }
    }
}

impl fmt::Display for HealthGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
