use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::Parser;

use symmetry_core::analysis::domain::analyzer_thresholds::AnalyzerThresholds;
use symmetry_core::analysis::domain::asymmetry_analyzer::AsymmetryAnalyzer;
use symmetry_core::analysis::infrastructure::precomputed_landmark_detector::PrecomputedLandmarkDetector;
use symmetry_core::codec::infrastructure::base64_frame_decoder::Base64FrameDecoder;
use symmetry_core::codec::infrastructure::jpeg_base64_encoder::JpegBase64Encoder;
use symmetry_core::composition::domain::symmetry_image_composer::SymmetryImageComposer;
use symmetry_core::composition::domain::symmetry_image_set::SymmetryImageSet;
use symmetry_core::pipeline::analysis_report::response_json;
use symmetry_core::pipeline::process_message_use_case::ProcessMessageUseCase;
use symmetry_core::pipeline::session_logger::SessionStatsLogger;
use symmetry_core::pipeline::symmetry_session::SymmetrySession;
use symmetry_core::shared::constants::{CAPTURE_REQUEST_MESSAGE, IMAGE_EXTENSIONS, JPEG_QUALITY};

/// Replays webcam frames through facial asymmetry analysis.
///
/// Each input image is one frame of a single session, processed in order.
/// One JSON response is printed per frame.
#[derive(Parser)]
#[command(name = "symmetry")]
struct Cli {
    /// Input frames (JPEG, PNG, ...), in session order.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// JSON file with one landmark list (or null) per input frame.
    #[arg(long)]
    landmarks: PathBuf,

    /// Request a mirrored comparison capture after the last frame.
    #[arg(long)]
    capture: bool,

    /// Directory for the captured comparison images (requires --capture).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// JSON file overriding the analyzer thresholds.
    #[arg(long)]
    thresholds: Option<PathBuf>,

    /// JPEG quality of the comparison images (1-100).
    #[arg(long, default_value_t = JPEG_QUALITY)]
    jpeg_quality: u8,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let mut use_case = build_use_case(&cli)?;

    for input in &cli.inputs {
        let bytes = fs::read(input)
            .map_err(|e| format!("Failed to read {}: {e}", input.display()))?;
        let response = use_case.handle_to_json(&STANDARD.encode(&bytes));
        println!("{response}");
    }

    if cli.capture {
        let outcome = use_case.handle(CAPTURE_REQUEST_MESSAGE);
        println!("{}", response_json(&outcome));
        match (&outcome, &cli.output_dir) {
            (Ok(report), Some(dir)) => {
                if let Some(images) = &report.images {
                    write_captured_images(dir, images)?;
                    log::info!("Comparison images written to {}", dir.display());
                }
            }
            (Err(e), _) => log::warn!("Capture failed: {e}"),
            _ => {}
        }
    }

    use_case.end();
    Ok(())
}

fn build_use_case(cli: &Cli) -> Result<ProcessMessageUseCase, Box<dyn std::error::Error>> {
    let thresholds = match &cli.thresholds {
        Some(path) => {
            log::info!("Loading thresholds from {}", path.display());
            AnalyzerThresholds::load(path)?
        }
        None => AnalyzerThresholds::default(),
    };

    let detector = PrecomputedLandmarkDetector::load(&cli.landmarks)?;
    log::info!(
        "Loaded landmarks for {} frames ({} with a face)",
        detector.frame_count(),
        detector.face_count()
    );
    if let Some(warning) = coverage_warning(detector.frame_count(), cli.inputs.len()) {
        log::warn!("{warning}");
    }

    let composer = SymmetryImageComposer::new(Box::new(JpegBase64Encoder::new(cli.jpeg_quality)));
    let session = SymmetrySession::new(
        AsymmetryAnalyzer::new(thresholds)?,
        composer,
        Box::new(SessionStatsLogger::default()),
    );

    Ok(ProcessMessageUseCase::new(
        session,
        Box::new(Base64FrameDecoder::new()),
        Box::new(detector),
    ))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    for input in &cli.inputs {
        if !input.exists() {
            return Err(format!("Input file not found: {}", input.display()).into());
        }
        if !is_image(input) {
            return Err(format!("Unsupported input format: {}", input.display()).into());
        }
    }
    if !cli.landmarks.exists() {
        return Err(format!("Landmarks file not found: {}", cli.landmarks.display()).into());
    }
    if cli.output_dir.is_some() && !cli.capture {
        return Err("--output-dir requires --capture".into());
    }
    if !(1..=100).contains(&cli.jpeg_quality) {
        return Err(format!(
            "JPEG quality must be between 1 and 100, got {}",
            cli.jpeg_quality
        )
        .into());
    }
    Ok(())
}

fn coverage_warning(recorded: usize, inputs: usize) -> Option<String> {
    (recorded < inputs).then(|| {
        format!("Landmarks cover {recorded} of {inputs} frames; the rest are treated as faceless")
    })
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn write_captured_images(
    dir: &Path,
    images: &SymmetryImageSet,
) -> Result<(), Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;
    let outputs = [
        ("original.jpg", &images.original),
        ("left_symmetric.jpg", &images.left_symmetric),
        ("right_symmetric.jpg", &images.right_symmetric),
    ];
    for (name, encoded) in outputs {
        fs::write(dir.join(name), STANDARD.decode(encoded)?)?;
    }
    Ok(())
}
