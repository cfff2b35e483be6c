mod decision;
mod photo;
mod state;

pub use decision::Decision;
pub use photo::{ColorMode, Photo};
pub use state::{AppState, ReviewSummary, ScanResult};
