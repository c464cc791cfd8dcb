pub mod precomputed_landmark_detector;
