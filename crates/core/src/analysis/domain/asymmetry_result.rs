use serde::{Serialize, Serializer};

/// Qualitative band of the composite asymmetry score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assessment {
    VerySymmetrical,
    GoodSymmetry,
    SlightAsymmetry,
    ModerateAsymmetry,
    SignificantAsymmetry,
}

impl Assessment {
    /// All bands, from most to least symmetrical.
    pub const ALL: [Assessment; 5] = [
        Assessment::VerySymmetrical,
        Assessment::GoodSymmetry,
        Assessment::SlightAsymmetry,
        Assessment::ModerateAsymmetry,
        Assessment::SignificantAsymmetry,
    ];

    /// Bands are `[0,5)`, `[5,10)`, `[10,20)`, `[20,30)`, `[30,∞)`.
    pub fn from_score(score: f64) -> Self {
        if score < 5.0 {
            Assessment::VerySymmetrical
        } else if score < 10.0 {
            Assessment::GoodSymmetry
        } else if score < 20.0 {
            Assessment::SlightAsymmetry
        } else if score < 30.0 {
            Assessment::ModerateAsymmetry
        } else {
            Assessment::SignificantAsymmetry
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Assessment::VerySymmetrical => "very symmetrical",
            Assessment::GoodSymmetry => "good symmetry",
            Assessment::SlightAsymmetry => "slight asymmetry",
            Assessment::ModerateAsymmetry => "moderate asymmetry",
            Assessment::SignificantAsymmetry => "significant asymmetry (needs improvement)",
        }
    }
}

/// Which side of a horizontal feature pair sits higher on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalDirection {
    RightHigher,
    LeftHigher,
    Symmetrical,
}

impl VerticalDirection {
    /// Classifies a raw `left.y - right.y` delta.
    pub fn from_delta(delta: f64) -> Self {
        if delta < 0.0 {
            VerticalDirection::RightHigher
        } else if delta > 0.0 {
            VerticalDirection::LeftHigher
        } else {
            VerticalDirection::Symmetrical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VerticalDirection::RightHigher => "right higher",
            VerticalDirection::LeftHigher => "left higher",
            VerticalDirection::Symmetrical => "symmetrical",
        }
    }
}

/// Horizontal drift of the nose tip away from the eye midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoseDirection {
    ShiftedLeft,
    ShiftedRight,
    Symmetrical,
}

impl NoseDirection {
    /// Classifies a raw `nose.x - face_center_x` offset.
    pub fn from_offset(offset: f64) -> Self {
        if offset > 0.0 {
            NoseDirection::ShiftedLeft
        } else if offset < 0.0 {
            NoseDirection::ShiftedRight
        } else {
            NoseDirection::Symmetrical
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoseDirection::ShiftedLeft => "shifted left",
            NoseDirection::ShiftedRight => "shifted right",
            NoseDirection::Symmetrical => "symmetrical",
        }
    }
}

/// Framing hint derived from the apparent face width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceFeedback {
    MoveCloser,
    MoveBack,
    GoodDistance,
}

impl DistanceFeedback {
    pub fn label(&self) -> &'static str {
        match self {
            DistanceFeedback::MoveCloser => "move closer to the camera",
            DistanceFeedback::MoveBack => "move back from the camera",
            DistanceFeedback::GoodDistance => "good distance",
        }
    }
}

macro_rules! serialize_as_label {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.label())
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

serialize_as_label!(Assessment, VerticalDirection, NoseDirection, DistanceFeedback);

/// Per-frame symmetry measurements.
///
/// Signed deltas are reported negated so that they read correctly against the
/// mirrored selfie view shown to the user. Magnitudes and `total_score` are
/// sign-independent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AsymmetryResult {
    pub eye_diff: f64,
    pub mouth_diff: f64,
    pub nose_offset: f64,
    #[serde(rename = "eye_asymmetry_val")]
    pub eye_asymmetry: f64,
    #[serde(rename = "mouth_asymmetry_val")]
    pub mouth_asymmetry: f64,
    #[serde(rename = "nose_asymmetry_val")]
    pub nose_asymmetry: f64,
    pub eye_direction: VerticalDirection,
    pub mouth_direction: VerticalDirection,
    pub nose_direction: NoseDirection,
    pub total_score: f64,
    pub assessment: Assessment,
    /// Eye-left, eye-right, nose, chin, mouth-left, mouth-right.
    #[serde(rename = "landmarks_coords")]
    pub key_points: [(i32, i32); 6],
    pub capture_ready: bool,
    pub center_alignment_score: f64,
    pub distance_feedback: DistanceFeedback,
    pub face_width: f64,
    pub face_stability: f64,
    /// Unrounded facial axis used by the mirrored comparison.
    #[serde(rename = "accurate_center_x")]
    pub face_center_x: f64,
}
