pub mod echo_capture;
pub mod inevitability_scorer;
pub mod pattern_detector;
pub mod safety_screen;

pub use echo_capture::IEchoCapture;
pub use inevitability_scorer::IInevitabilityScorer;
pub use pattern_detector::IPatternDetector;
pub use safety_screen::ISafetyScreen;
