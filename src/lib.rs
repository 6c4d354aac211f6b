pub mod camera;
pub mod export;
pub mod models;
pub mod scanner;
pub mod session;

pub use export::ExportSnapshot;
pub use models::{Detection, PlateRegion, Statistics};
pub use scanner::ScanPipeline;
pub use session::{CaptureSession, HISTORY_LIMIT, SessionPhase};

#[cfg(feature = "gui")]
pub mod gui;
