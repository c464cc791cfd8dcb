pub mod symmetry_image_composer;
pub mod symmetry_image_set;
