//! Face-mesh keypoints for a single detected face.
//!
//! Coordinates are normalized to `[0, 1]` of the frame width and height.
//! A third (depth) component is accepted from 3-D detectors but unused.

use serde::{Deserialize, Serialize};

use crate::shared::constants::MIN_LANDMARKS;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl Keypoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_depth(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Scales the normalized point to integer pixel coordinates. Values beyond
    /// the `i32` range saturate.
    pub fn to_pixel(&self, width: u32, height: u32) -> (i32, i32) {
        (
            (self.x * width as f64).round() as i32,
            (self.y * height as f64).round() as i32,
        )
    }
}

/// Ordered keypoints as produced by the landmark detector, indexed positionally.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LandmarkSet {
    points: Vec<Keypoint>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Keypoint>) -> Self {
        Self { points }
    }

    /// Builds a set from raw `[x, y]` or `[x, y, z]` tuples.
    ///
    /// Tuples with fewer than two components are rejected.
    pub fn from_components(raw: &[Vec<f64>]) -> Result<Self, String> {
        let points = raw
            .iter()
            .enumerate()
            .map(|(i, c)| match c.as_slice() {
                [x, y] => Ok(Keypoint::new(*x, *y)),
                [x, y, z, ..] => Ok(Keypoint::with_depth(*x, *y, *z)),
                _ => Err(format!("landmark {i} has {} components", c.len())),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Keypoint> {
        self.points.get(index)
    }

    pub fn points(&self) -> &[Keypoint] {
        &self.points
    }

    /// Whether the set satisfies the face-mesh contract.
    pub fn is_complete(&self) -> bool {
        self.points.len() >= MIN_LANDMARKS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_to_pixel_rounds_to_nearest() {
        let kp = Keypoint::new(0.5, 0.25);
        assert_eq!(kp.to_pixel(640, 480), (320, 120));

        // 0.2 * 641 = 128.2 -> 128, 0.9 * 481 = 432.9 -> 433
        let kp = Keypoint::new(0.2, 0.9);
        assert_eq!(kp.to_pixel(641, 481), (128, 433));
    }

    #[test]
    fn test_to_pixel_ignores_depth() {
        let flat = Keypoint::new(0.3, 0.6);
        let deep = Keypoint::with_depth(0.3, 0.6, -0.05);
        assert_eq!(flat.to_pixel(100, 100), deep.to_pixel(100, 100));
    }

    #[rstest]
    #[case::empty(0, false)]
    #[case::one_short(MIN_LANDMARKS - 1, false)]
    #[case::exact(MIN_LANDMARKS, true)]
    #[case::refined_mesh(478, true)]
    fn test_is_complete(#[case] count: usize, #[case] expected: bool) {
        let set = LandmarkSet::new(vec![Keypoint::new(0.5, 0.5); count]);
        assert_eq!(set.is_complete(), expected);
        assert_eq!(set.len(), count);
    }

    #[test]
    fn test_from_components_accepts_2d_and_3d() {
        let raw = vec![vec![0.1, 0.2], vec![0.3, 0.4, 0.5]];
        let set = LandmarkSet::from_components(&raw).unwrap();
        assert_eq!(set.get(0), Some(&Keypoint::new(0.1, 0.2)));
        assert_eq!(set.get(1), Some(&Keypoint::with_depth(0.3, 0.4, 0.5)));
    }

    #[test]
    fn test_from_components_rejects_short_tuple() {
        let raw = vec![vec![0.1, 0.2], vec![0.3]];
        let err = LandmarkSet::from_components(&raw).unwrap_err();
        assert_eq!(err, "landmark 1 has 1 components");
    }

    #[test]
    fn test_get_out_of_range_is_none() {
        let set = LandmarkSet::default();
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
    }
}
