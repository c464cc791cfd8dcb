use serde::Serialize;

use crate::analysis::domain::asymmetry_result::AsymmetryResult;
use crate::composition::domain::symmetry_image_set::SymmetryImageSet;
use crate::pipeline::session_error::SessionError;

/// What the client receives for a frame or capture: the analysis, plus the
/// session's captured comparison images once a capture has happened.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub result: AsymmetryResult,
    #[serde(flatten)]
    pub images: Option<SymmetryImageSet>,
}

impl AnalysisReport {
    pub fn new(result: AsymmetryResult, images: Option<SymmetryImageSet>) -> Self {
        Self { result, images }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Serializes an outcome as the JSON text sent back over the wire.
///
/// Failures become `{"error": "<message>"}`.
pub fn response_json(outcome: &Result<AnalysisReport, SessionError>) -> String {
    let serialized = match outcome {
        Ok(report) => serde_json::to_string(report),
        Err(e) => serde_json::to_string(&ErrorBody {
            error: e.to_string(),
        }),
    };
    serialized.unwrap_or_else(|e| {
        log::warn!("Failed to serialize response: {e}");
        r#"{"error":"failed to serialize response"}"#.to_string()
    })
}
