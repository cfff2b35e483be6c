pub mod media_types;
mod path;

pub use media_types::{IMAGE_EXTENSIONS, is_reviewable_image};
pub use path::{destination_path, is_hidden};
