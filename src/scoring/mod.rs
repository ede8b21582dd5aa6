pub mod config;
pub mod engine;
pub mod explain;
pub mod factors;
pub mod grade;
pub mod validation;

pub use config::*;
pub use engine::{
    calculate_score, energy_kcal, score_product, CategoryBreakdown, ScoreComponents, ScoreResult,
    FAILURE_MESSAGE, KJ_PER_KCAL,
};
pub use factors::{split_explanation, Band, Category, Direction, QualityRule, Tier};
pub use grade::HealthGrade;
pub use validation::validate_scoring;
