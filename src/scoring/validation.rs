use super::config::ScoringConfig;
use super::factors::{Category, Direction};

/// Tolerance when checking that max points add up to 100
const TOTAL_EPSILON: f64 = 1e-6;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for category in Category::ALL {
        let Some(configured) = config.band_config(category) else {
            continue;
        };
        let path = format!("scoring.{}", category.key());

        let fields = [
            ("max_points", configured.max_points),
            ("excellent", configured.excellent),
            ("good", configured.good),
            ("fair", configured.fair),
        ];
        let mut fields_ok = true;
        for (name, value) in fields {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    errors.push(format!("{}.{}: must be a non-negative number", path, name));
                    fields_ok = false;
                }
            }
        }

        // Ordering is checked on the merged band so partial overrides are
        // validated against the defaults they fall back to
        if fields_ok {
            if let Some(band) = config.band(category) {
                let ordered = match band.direction {
                    Direction::LowerIsBetter => band.excellent <= band.good && band.good <= band.fair,
                    Direction::HigherIsBetter => band.excellent >= band.good && band.good >= band.fair,
                };
                if !ordered {
                    let expected = match band.direction {
                        Direction::LowerIsBetter => "excellent <= good <= fair",
                        Direction::HigherIsBetter => "excellent >= good >= fair",
                    };
                    errors.push(format!(
                        "{}: thresholds out of order (got excellent={}, good={}, fair={}; expected {})",
                        path, band.excellent, band.good, band.fair, expected
                    ));
                }
            }
        }
    }

    if let Some(ref quality) = config.ingredient_quality {
        if let Some(max) = quality.max_points {
            if !max.is_finite() || max < 0.0 {
                errors.push(
                    "scoring.ingredient_quality.max_points: must be a non-negative number"
                        .to_string(),
                );
            }
        }
        for (name, phrases) in [("positive", &quality.positive), ("negative", &quality.negative)] {
            if let Some(phrases) = phrases {
                for (i, phrase) in phrases.iter().enumerate() {
                    if phrase.trim().is_empty() {
                        errors.push(format!(
                            "scoring.ingredient_quality.{}[{}]: phrase must not be empty",
                            name, i
                        ));
                    }
                }
            }
        }
    }

    let total = config.total_max_points();
    if (total - 100.0).abs() > TOTAL_EPSILON {
        errors.push(format!(
            "scoring: max points must sum to 100 (got {})",
            total
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{BandConfig, QualityConfig};

    fn empty_config() -> ScoringConfig {
        ScoringConfig {
            energy: None,
            sugar: None,
            fat: None,
            saturated_fat: None,
            salt: None,
            fiber: None,
            protein: None,
            additives: None,
            ingredient_quality: None,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(validate_scoring(&empty_config()).is_ok());
    }

    #[test]
    fn test_rebalanced_points_valid() {
        let config = ScoringConfig {
            fiber: Some(BandConfig {
                max_points: Some(12.0),
                ..Default::default()
            }),
            protein: Some(BandConfig {
                max_points: Some(8.0),
                ..Default::default()
            }),
            ..empty_config()
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_negative_threshold() {
        let config = ScoringConfig {
            salt: Some(BandConfig {
                good: Some(-1.0),
                ..Default::default()
            }),
            ..empty_config()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.salt.good"));
    }

    #[test]
    fn test_thresholds_out_of_order() {
        let config = ScoringConfig {
            sugar: Some(BandConfig {
                excellent: Some(12.0),
                ..Default::default()
            }),
            ..empty_config()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("scoring.sugar: thresholds out of order"));
        assert!(errors[0].contains("excellent <= good <= fair"));
    }

    #[test]
    fn test_higher_is_better_order() {
        let config = ScoringConfig {
            protein: Some(BandConfig {
                excellent: Some(4.0),
                ..Default::default()
            }),
            ..empty_config()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("excellent >= good >= fair"));
    }

    #[test]
    fn test_total_must_be_100() {
        let config = ScoringConfig {
            energy: Some(BandConfig {
                max_points: Some(25.0),
                ..Default::default()
            }),
            ..empty_config()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors, vec!["scoring: max points must sum to 100 (got 110)".to_string()]);
    }

    #[test]
    fn test_empty_quality_phrase() {
        let config = ScoringConfig {
            ingredient_quality: Some(QualityConfig {
                max_points: None,
                positive: Some(vec!["organic".to_string(), " ".to_string()]),
                negative: None,
            }),
            ..empty_config()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.ingredient_quality.positive[1]"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            fat: Some(BandConfig {
                max_points: Some(-5.0), // Error 1, and the total drifts (Error 2)
                ..Default::default()
            }),
            sugar: Some(BandConfig {
                fair: Some(1.0), // Error 3
                ..Default::default()
            }),
            ..empty_config()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
