use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Allowed drift of a weight total from 1.
const SUM_TOLERANCE: f64 = 1e-9;

/// One value per video sub-score.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VideoBreakdown {
    pub resolution: f64,
    pub duration: f64,
    pub lighting: f64,
    pub audio: f64,
}

/// One value per engagement sub-score.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EngagementBreakdown {
    pub watch_time_percentage: f64,
    pub retakes: f64,
    pub shortlist_history: f64,
}

/// One value per relevance sub-score.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RelevanceBreakdown {
    pub keyword_match: f64,
}

/// A value for each of the eight sub-scores, grouped by category. Used
/// both for the scores themselves and for their weights.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Breakdown {
    pub video: VideoBreakdown,
    pub engagement: EngagementBreakdown,
    pub relevance: RelevanceBreakdown,
}

pub type Scores = Breakdown;

pub type Weights = Breakdown;

/// The weights applied unless configuration overrides them.
pub const DEFAULT_WEIGHTS: Weights = Breakdown {
    video: VideoBreakdown {
        resolution: 0.15,
        duration: 0.1,
        lighting: 0.2,
        audio: 0.2,
    },
    engagement: EngagementBreakdown {
        watch_time_percentage: 0.15,
        retakes: 0.05,
        shortlist_history: 0.05,
    },
    relevance: RelevanceBreakdown { keyword_match: 0.1 },
};

impl Breakdown {
    /// Every value paired with its dotted name, in aggregation order.
    pub fn fields(&self) -> [(&'static str, f64); 8] {
        [
            ("video.resolution", self.video.resolution),
            ("video.duration", self.video.duration),
            ("video.lighting", self.video.lighting),
            ("video.audio", self.video.audio),
            ("engagement.watchTimePercentage", self.engagement.watch_time_percentage),
            ("engagement.retakes", self.engagement.retakes),
            ("engagement.shortlistHistory", self.engagement.shortlist_history),
            ("relevance.keywordMatch", self.relevance.keyword_match),
        ]
    }

    /// Adds up every value, left to right in aggregation order.
    pub fn total(&self) -> f64 {
        self.fields().iter().fold(0.0, |sum, (_, value)| sum + value)
    }

    /// Multiplies each value by its weight and adds the products, left to
    /// right in aggregation order. The result is not re-normalized.
    pub fn weighted_sum(&self, weights: &Weights) -> f64 {
        self.fields()
            .iter()
            .zip(weights.fields().iter())
            .fold(0.0, |sum, ((_, score), (_, weight))| sum + score * weight)
    }

    /// Checks that these are usable as weights: finite, non-negative and
    /// adding up to 1.
    pub fn validate_weights(&self) -> Result<(), ConfigError> {
        for &(field, value) in self.fields().iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { field, value });
            }
        }

        let total = self.total();

        if (total - 1.0).abs() > SUM_TOLERANCE {
            return Err(ConfigError::WeightsDoNotSumToOne(total));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        assert!((DEFAULT_WEIGHTS.total() - 1.0).abs() < 1e-12);
        assert!(DEFAULT_WEIGHTS.validate_weights().is_ok());
    }

    #[test]
    fn weighted_sum_of_ones_is_the_weight_total() {
        let ones = Breakdown {
            video: VideoBreakdown {
                resolution: 1.0,
                duration: 1.0,
                lighting: 1.0,
                audio: 1.0,
            },
            engagement: EngagementBreakdown {
                watch_time_percentage: 1.0,
                retakes: 1.0,
                shortlist_history: 1.0,
            },
            relevance: RelevanceBreakdown { keyword_match: 1.0 },
        };

        assert_eq!(ones.weighted_sum(&DEFAULT_WEIGHTS), DEFAULT_WEIGHTS.total());
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut weights = DEFAULT_WEIGHTS;
        weights.video.audio = -0.2;

        assert!(matches!(
            weights.validate_weights(),
            Err(ConfigError::InvalidWeight {
                field: "video.audio",
                ..
            })
        ));
    }

    #[test]
    fn weights_must_add_up_to_one() {
        let mut weights = DEFAULT_WEIGHTS;
        weights.relevance.keyword_match = 0.3;

        assert!(matches!(
            weights.validate_weights(),
            Err(ConfigError::WeightsDoNotSumToOne(_))
        ));
    }

    #[test]
    fn serializes_with_nested_camel_case_names() {
        let json = serde_json::to_value(&DEFAULT_WEIGHTS).expect("serialize weights");

        assert_eq!(json["video"]["resolution"], 0.15);
        assert_eq!(json["engagement"]["watchTimePercentage"], 0.15);
        assert_eq!(json["engagement"]["shortlistHistory"], 0.05);
        assert_eq!(json["relevance"]["keywordMatch"], 0.1);
    }
}
