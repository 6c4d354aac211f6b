mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from platewatch for tests
pub use platewatch::{
    CaptureSession, Detection, ExportSnapshot, HISTORY_LIMIT, PlateRegion, ScanPipeline,
    SessionPhase, Statistics,
};
