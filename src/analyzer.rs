use crate::submission::VideoMetadata;

/// Lighting score assumed when no brightness was measured.
pub const DEFAULT_LIGHTING_SCORE: f64 = 0.75;

/// Audio score assumed when no audio quality was measured.
pub const DEFAULT_AUDIO_SCORE: f64 = 0.8;

/// Derives the signal-based video sub-scores. Implementations may analyse
/// the media itself; the aggregator only sees the resulting numbers.
pub trait VideoQualityAnalyzer {
    fn lighting(&self, metadata: &VideoMetadata) -> f64;

    fn audio(&self, metadata: &VideoMetadata) -> f64;
}

/// Reads the scores straight from the upload's metadata, falling back to
/// fixed defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct MetadataAnalyzer;

impl VideoQualityAnalyzer for MetadataAnalyzer {
    fn lighting(&self, metadata: &VideoMetadata) -> f64 {
        metadata.brightness.unwrap_or(DEFAULT_LIGHTING_SCORE)
    }

    fn audio(&self, metadata: &VideoMetadata) -> f64 {
        metadata.audio_quality.unwrap_or(DEFAULT_AUDIO_SCORE)
    }
}

impl<A: VideoQualityAnalyzer + ?Sized> VideoQualityAnalyzer for &A {
    fn lighting(&self, metadata: &VideoMetadata) -> f64 {
        (**self).lighting(metadata)
    }

    fn audio(&self, metadata: &VideoMetadata) -> f64 {
        (**self).audio(metadata)
    }
}
