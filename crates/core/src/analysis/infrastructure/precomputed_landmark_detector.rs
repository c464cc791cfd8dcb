use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::analysis::domain::landmark_detector::LandmarkDetector;
use crate::analysis::domain::landmark_set::LandmarkSet;
use crate::shared::frame::Frame;

/// Replays landmark sets recorded by an external face-mesh run, by frame index.
///
/// The JSON layout is one entry per frame: an array of `[x, y]` or
/// `[x, y, z]` normalized points, or `null` when no face was found.
/// Frames without an entry are reported as faceless.
pub struct PrecomputedLandmarkDetector {
    cache: Arc<HashMap<usize, LandmarkSet>>,
    frame_count: usize,
}

impl PrecomputedLandmarkDetector {
    /// Covers every frame up to the highest cached index.
    pub fn new(cache: Arc<HashMap<usize, LandmarkSet>>) -> Self {
        let frame_count = cache.keys().max().map_or(0, |last| last + 1);
        Self { cache, frame_count }
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let entries: Vec<Option<Vec<Vec<f64>>>> = serde_json::from_str(json)?;
        let frame_count = entries.len();
        let mut cache = HashMap::new();
        for (index, entry) in entries.into_iter().enumerate() {
            if let Some(raw) = entry {
                let set = LandmarkSet::from_components(&raw)
                    .map_err(|e| format!("frame {index}: {e}"))?;
                cache.insert(index, set);
            }
        }
        Ok(Self {
            cache: Arc::new(cache),
            frame_count,
        })
    }

    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = fs::read_to_string(path)
            .map_err(|e| format!("failed to read landmarks {}: {e}", path.display()))?;
        Self::from_json(&json)
    }

    /// Number of frames that carry a face.
    pub fn face_count(&self) -> usize {
        self.cache.len()
    }

    /// Number of frames with an entry, faceless (`null`) ones included.
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }
}

impl LandmarkDetector for PrecomputedLandmarkDetector {
    fn detect(
        &mut self,
        frame: &Frame,
    ) -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>> {
        Ok(self.cache.get(&frame.index()).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::domain::landmark_set::Keypoint;

    fn frame(index: usize) -> Frame {
        Frame::new(vec![0u8; 4 * 4 * 3], 4, 4, 3, index)
    }

    #[test]
    fn test_returns_cached_set_for_known_frame() {
        let set = LandmarkSet::new(vec![Keypoint::new(0.1, 0.2)]);
        let cache = Arc::new(HashMap::from([(0, set.clone())]));
        let mut detector = PrecomputedLandmarkDetector::new(cache);

        assert_eq!(detector.detect(&frame(0)).unwrap(), Some(set));
    }

    #[test]
    fn test_unknown_frame_has_no_face() {
        let mut detector = PrecomputedLandmarkDetector::new(Arc::new(HashMap::new()));
        assert!(detector.detect(&frame(3)).unwrap().is_none());
    }

    #[test]
    fn test_from_json_skips_null_entries() {
        let json = r#"[[[0.1, 0.2], [0.3, 0.4, 0.01]], null, [[0.5, 0.5]]]"#;
        let mut detector = PrecomputedLandmarkDetector::from_json(json).unwrap();

        assert_eq!(detector.face_count(), 2);
        assert_eq!(detector.frame_count(), 3);
        assert_eq!(detector.detect(&frame(0)).unwrap().unwrap().len(), 2);
        assert!(detector.detect(&frame(1)).unwrap().is_none());
        assert_eq!(detector.detect(&frame(2)).unwrap().unwrap().len(), 1);
    }

    #[test]
    fn test_all_null_entries_still_count_as_frames() {
        let detector = PrecomputedLandmarkDetector::from_json("[null, null]").unwrap();
        assert_eq!(detector.face_count(), 0);
        assert_eq!(detector.frame_count(), 2);
    }

    #[test]
    fn test_new_counts_frames_up_to_last_cached_index() {
        let set = LandmarkSet::new(vec![Keypoint::new(0.1, 0.2)]);
        let detector = PrecomputedLandmarkDetector::new(Arc::new(HashMap::from([(4, set)])));
        assert_eq!(detector.frame_count(), 5);
        let empty = PrecomputedLandmarkDetector::new(Arc::new(HashMap::new()));
        assert_eq!(empty.frame_count(), 0);
    }

    #[test]
    fn test_from_json_rejects_malformed_point() {
        let json = r#"[[[0.1]]]"#;
        let err = PrecomputedLandmarkDetector::from_json(json).err().unwrap();
        assert!(err.to_string().contains("frame 0"));
    }

    #[test]
    fn test_from_json_rejects_invalid_json() {
        assert!(PrecomputedLandmarkDetector::from_json("{").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landmarks.json");
        fs::write(&path, "[null, [[0.5, 0.5]]]").unwrap();

        let detector = PrecomputedLandmarkDetector::load(&path).unwrap();
        assert_eq!(detector.face_count(), 1);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let missing = Path::new("/nonexistent/landmarks.json");
        assert!(PrecomputedLandmarkDetector::load(missing).is_err());
    }
}
