use serde::{Deserialize, Serialize};

use crate::errors::InvalidInputError;
use crate::evaluation::{Details, EvaluationResult, QualityTier};

/// Technical metadata for an uploaded audition video.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMetadata {
    /// The vertical resolution in pixels.
    pub height: f64,

    /// The length in seconds.
    pub duration: f64,

    /// The measured brightness, between 0 and 1, if analysis produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,

    /// The measured audio quality, between 0 and 1, if analysis produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_quality: Option<f64>,
}

/// The actor-submitted metadata for an audition.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditionMetadata {
    /// Free text describing the audition.
    #[serde(default)]
    pub description: String,

    /// How many takes the actor recorded. Kept as a plain number so that
    /// lenient scoring sees fractional or negative counts as submitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retakes: Option<f64>,
}

/// Everything needed to score one audition submission.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationInput {
    pub video_metadata: VideoMetadata,

    pub audition_metadata: AuditionMetadata,

    /// The casting call's role description.
    #[serde(default)]
    pub role_description: String,

    /// The percentage of the video the producer has watched, from 0 to 100.
    pub producer_watch_time: f64,

    /// How many times the actor has been shortlisted before.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_shortlists: Option<f64>,
}

impl EvaluationInput {
    /// Checks every numeric field against the range its formula expects.
    pub fn validate(&self) -> Result<(), InvalidInputError> {
        let video = &self.video_metadata;

        non_negative("videoMetadata.height", video.height)?;
        non_negative("videoMetadata.duration", video.duration)?;

        if let Some(brightness) = video.brightness {
            within("videoMetadata.brightness", brightness, 0.0, 1.0)?;
        }

        if let Some(audio_quality) = video.audio_quality {
            within("videoMetadata.audioQuality", audio_quality, 0.0, 1.0)?;
        }

        if let Some(retakes) = self.audition_metadata.retakes {
            count("auditionMetadata.retakes", retakes)?;
        }

        if let Some(previous_shortlists) = self.previous_shortlists {
            count("previousShortlists", previous_shortlists)?;
        }

        within("producerWatchTime", self.producer_watch_time, 0.0, 100.0)
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, InvalidInputError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInputError::NonFinite { field, value })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    if finite(field, value)? < 0.0 {
        return Err(InvalidInputError::Negative { field, value });
    }

    Ok(())
}

fn count(field: &'static str, value: f64) -> Result<(), InvalidInputError> {
    non_negative(field, value)?;

    if value.fract() != 0.0 {
        return Err(InvalidInputError::NotACount { field, value });
    }

    Ok(())
}

fn within(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), InvalidInputError> {
    let value = finite(field, value)?;

    if value < min || value > max {
        return Err(InvalidInputError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }

    Ok(())
}

/// The assessment persisted onto a submission record.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct QualityAssessment {
    pub score: f64,
    pub level: QualityTier,
}

impl From<&EvaluationResult> for QualityAssessment {
    fn from(result: &EvaluationResult) -> Self {
        QualityAssessment {
            score: result.score(),
            level: result.quality(),
        }
    }
}

/// A submission awaiting a score, as read by the batch scorer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SubmissionRecord {
    /// The ID of the submission.
    pub id: String,

    #[serde(flatten)]
    pub input: EvaluationInput,
}

/// A submission with its assessment attached.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredSubmission {
    /// The ID of the submission.
    pub id: String,

    pub quality_assessment: QualityAssessment,

    /// The breakdown behind the assessment.
    pub details: Details,
}

impl ScoredSubmission {
    pub fn new(id: String, result: &EvaluationResult) -> Self {
        ScoredSubmission {
            id,
            quality_assessment: QualityAssessment::from(result),
            details: result.details().clone(),
        }
    }
}
