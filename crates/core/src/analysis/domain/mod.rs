pub mod analyzer_thresholds;
pub mod asymmetry_analyzer;
pub mod asymmetry_result;
pub mod landmark_detector;
pub mod landmark_set;
