use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::constants::{
    MAX_FACE_STABILITY, MAX_FACE_WIDTH, MAX_NOSE_OFFSET, MAX_POSITION_OFFSET, MIN_FACE_WIDTH,
    SCORE_MULTIPLIER,
};

#[derive(Error, Debug)]
pub enum ThresholdsError {
    #[error("failed to read thresholds from {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid thresholds JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Invalid(String),
}

/// Framing and scoring limits used by the analyzer.
///
/// Defaults are the pixel constants tuned for 640x480 capture. Fields
/// missing from a JSON file keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerThresholds {
    pub min_face_width: f64,
    pub max_face_width: f64,
    pub max_nose_offset: f64,
    pub max_position_offset: f64,
    pub max_face_stability: f64,
    pub score_multiplier: f64,
}

impl Default for AnalyzerThresholds {
    fn default() -> Self {
        Self {
            min_face_width: MIN_FACE_WIDTH,
            max_face_width: MAX_FACE_WIDTH,
            max_nose_offset: MAX_NOSE_OFFSET,
            max_position_offset: MAX_POSITION_OFFSET,
            max_face_stability: MAX_FACE_STABILITY,
            score_multiplier: SCORE_MULTIPLIER,
        }
    }
}

impl AnalyzerThresholds {
    pub fn load(path: &Path) -> Result<Self, ThresholdsError> {
        let content = fs::read_to_string(path).map_err(|source| ThresholdsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let thresholds: Self = serde_json::from_str(&content)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), ThresholdsError> {
        let limits = [
            ("min_face_width", self.min_face_width),
            ("max_face_width", self.max_face_width),
            ("max_nose_offset", self.max_nose_offset),
            ("max_position_offset", self.max_position_offset),
            ("max_face_stability", self.max_face_stability),
            ("score_multiplier", self.score_multiplier),
        ];
        for (name, value) in limits {
            if !value.is_finite() || value <= 0.0 {
                return Err(ThresholdsError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.min_face_width > self.max_face_width {
            return Err(ThresholdsError::Invalid(format!(
                "min_face_width ({}) exceeds max_face_width ({})",
                self.min_face_width, self.max_face_width
            )));
        }
        Ok(())
    }
}
