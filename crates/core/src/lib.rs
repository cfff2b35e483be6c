mod committer;
mod gesture;
mod metadata;
mod review;
mod scanner;
mod thumbnail;

pub use committer::{CommitError, FileCommitter};
pub use gesture::{SwipeGesture, decision_for, gesture_fraction};
pub use metadata::{ImageProperties, MetadataExtractor};
pub use review::ReviewStack;
pub use scanner::Scanner;
pub use thumbnail::Thumbnail;
