use std::fmt;
use std::sync::Arc;

use log::{debug, warn, Logger};
use serde::{Deserialize, Serialize};

use crate::analyzer::{MetadataAnalyzer, VideoQualityAnalyzer};
use crate::errors::InvalidInputError;
use crate::keywords::keyword_overlap;
use crate::submission::EvaluationInput;
use crate::weights::{
    EngagementBreakdown, RelevanceBreakdown, Scores, VideoBreakdown, Weights,
};

/// Lowest score classified as [`QualityTier::High`].
pub const HIGH_THRESHOLD: f64 = 0.8;

/// Lowest score classified as [`QualityTier::Medium`].
pub const MEDIUM_THRESHOLD: f64 = 0.6;

/// Retake counts above this earn no extra credit.
const MAX_RETAKES: f64 = 3.0;

/// Shortlist counts above this earn no extra credit.
const MAX_SHORTLISTS: f64 = 5.0;

/// A discrete classification of an audition's score, used to triage
/// submissions.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QualityTier {
    High,
    Medium,
    Low,
}

impl QualityTier {
    /// Classifies `score` top-down. Anything that is not at least
    /// [`MEDIUM_THRESHOLD`], NaN included, is [`QualityTier::Low`].
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_THRESHOLD {
            QualityTier::High
        } else if score >= MEDIUM_THRESHOLD {
            QualityTier::Medium
        } else {
            QualityTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityTier::High => "High",
            QualityTier::Medium => "Medium",
            QualityTier::Low => "Low",
        }
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The breakdown behind a score.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Details {
    pub scores: Scores,
    pub weights: Weights,
}

/// The outcome of scoring one audition.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct EvaluationResult {
    quality: QualityTier,
    score: f64,
    details: Details,
}

impl EvaluationResult {
    pub fn quality(&self) -> QualityTier {
        self.quality
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn details(&self) -> &Details {
        &self.details
    }
}

/// 1 from 720 lines up, 0.5 from 480, 0.3 below that.
pub fn resolution_score(height: f64) -> f64 {
    if height >= 720.0 {
        1.0
    } else if height >= 480.0 {
        0.5
    } else {
        0.3
    }
}

/// 1 for videos between one and three minutes long inclusive, 0.5 otherwise.
pub fn duration_score(duration: f64) -> f64 {
    if (60.0..=180.0).contains(&duration) {
        1.0
    } else {
        0.5
    }
}

/// The smaller of `value` and `cap`, except that NaN stays NaN.
fn capped(value: f64, cap: f64) -> f64 {
    if value.is_nan() || value < cap {
        value
    } else {
        cap
    }
}

/// A single take when unspecified. An explicit zero scores zero.
pub fn retakes_score(retakes: Option<f64>) -> f64 {
    capped(retakes.unwrap_or(1.0), MAX_RETAKES) / MAX_RETAKES
}

pub fn shortlist_score(previous_shortlists: Option<f64>) -> f64 {
    capped(previous_shortlists.unwrap_or(0.0), MAX_SHORTLISTS) / MAX_SHORTLISTS
}

/// Computes every sub-score for `input`.
pub fn score_breakdown<A>(analyzer: &A, input: &EvaluationInput) -> Scores
where
    A: VideoQualityAnalyzer + ?Sized,
{
    let video = &input.video_metadata;
    let audition = &input.audition_metadata;

    Scores {
        video: VideoBreakdown {
            resolution: resolution_score(video.height),
            duration: duration_score(video.duration),
            lighting: analyzer.lighting(video),
            audio: analyzer.audio(video),
        },
        engagement: EngagementBreakdown {
            watch_time_percentage: input.producer_watch_time / 100.0,
            retakes: retakes_score(audition.retakes),
            shortlist_history: shortlist_score(input.previous_shortlists),
        },
        relevance: RelevanceBreakdown {
            keyword_match: keyword_overlap(&input.role_description, &audition.description),
        },
    }
}

/// Scores `input` with metadata-backed lighting and audio scores.
///
/// Performs no validation: out-of-range input produces out-of-range scores
/// and NaN classifies as [`QualityTier::Low`].
pub fn evaluate_audition_quality(input: &EvaluationInput, weights: &Weights) -> EvaluationResult {
    evaluate_with(&MetadataAnalyzer, input, weights)
}

/// Scores `input`, taking the lighting and audio scores from `analyzer`.
pub fn evaluate_with<A>(analyzer: &A, input: &EvaluationInput, weights: &Weights) -> EvaluationResult
where
    A: VideoQualityAnalyzer + ?Sized,
{
    let scores = score_breakdown(analyzer, input);
    let score = scores.weighted_sum(weights);

    EvaluationResult {
        quality: QualityTier::from_score(score),
        score,
        details: Details {
            scores,
            weights: *weights,
        },
    }
}

/// Scores auditions against a fixed set of weights, validating input
/// first unless told otherwise.
#[derive(Clone)]
pub struct Evaluator<A = MetadataAnalyzer> {
    logger: Arc<Logger>,
    weights: Weights,
    analyzer: A,
    strict: bool,
}

impl Evaluator<MetadataAnalyzer> {
    pub fn new(logger: Arc<Logger>, weights: Weights) -> Self {
        Self::with_analyzer(logger, weights, MetadataAnalyzer)
    }
}

impl<A: VideoQualityAnalyzer> Evaluator<A> {
    pub fn with_analyzer(logger: Arc<Logger>, weights: Weights, analyzer: A) -> Self {
        Self {
            logger,
            weights,
            analyzer,
            strict: true,
        }
    }

    /// Whether to reject invalid input rather than score it verbatim.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn evaluate(&self, input: &EvaluationInput) -> Result<EvaluationResult, InvalidInputError> {
        if self.strict {
            if let Err(error) = input.validate() {
                warn!(self.logger, "Rejected audition input"; "error" => error.to_string());
                return Err(error);
            }
        }

        let result = evaluate_with(&self.analyzer, input, &self.weights);

        debug!(
            self.logger,
            "Scored audition";
            "score" => result.score(),
            "quality" => result.quality().as_str()
        );

        Ok(result)
    }
}
