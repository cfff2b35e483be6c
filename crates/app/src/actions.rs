use filegate_core::{ReviewStack, Thumbnail};
use filegate_models::{AppState, Decision, ReviewSummary};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::{App, FolderBrowser};

const THUMBNAIL_WIDTH: u32 = 160;
const THUMBNAIL_HEIGHT: u32 = 120;

fn fallback_start_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"))
}

impl App {
    /// Starts the two-step folder selection: source first, then destination.
    pub fn open_directory(&mut self) {
        let start = self.settings.source_folder.clone().unwrap_or_else(fallback_start_dir);
        self.browser = FolderBrowser::open(&start);
        self.pending_source = None;
        self.state = AppState::PickingSource;
    }

    /// Accepts the directory currently shown in the folder picker.
    pub async fn choose_current_folder(&mut self) {
        let chosen = self.browser.current().to_path_buf();

        match self.state {
            AppState::PickingSource => {
                info!("Source folder chosen: {:?}", chosen);
                let start = self
                    .settings
                    .destination_folder
                    .clone()
                    .or_else(|| chosen.parent().map(Path::to_path_buf))
                    .unwrap_or_else(|| chosen.clone());
                self.pending_source = Some(chosen);
                self.browser = FolderBrowser::open(&start);
                self.state = AppState::PickingDestination;
            }
            AppState::PickingDestination => {
                info!("Destination folder chosen: {:?}", chosen);
                let Some(source) = self.pending_source.take() else {
                    self.cancel_folder_pick();
                    return;
                };
                self.load_batch(&source, chosen.clone()).await;
                self.remember_folders(source, chosen);
            }
            _ => {}
        }
    }

    /// A cancelled picker leaves nothing to review, like an empty folder.
    pub fn cancel_folder_pick(&mut self) {
        info!("Folder selection cancelled");
        self.pending_source = None;
        self.replace_stack(ReviewStack::default());
        self.state = AppState::Welcome;
    }

    /// Scans `source` and makes it the pending stack, replacing any earlier batch.
    pub async fn load_batch(&mut self, source: &Path, output_dir: PathBuf) {
        let (photos, result) = self.scanner.scan_with_result(source).await;
        self.last_scan_result = Some(result);
        self.replace_stack(ReviewStack::new(photos, output_dir, self.settings.visible_cards));
        self.state = AppState::Review;
    }

    fn replace_stack(&mut self, stack: ReviewStack) {
        self.stack = stack;
        self.summary = ReviewSummary::default();
        self.gesture.reset();
        self.drag_origin = None;
        self.thumbnails.clear();
        self.failed_thumbnails.clear();
        self.selected_index = (!self.stack.is_empty()).then_some(0);
    }

    /// Writes the chosen folders back to the config file when enabled. A
    /// failed write is logged; the session carries on with the new folders.
    fn remember_folders(&mut self, source: PathBuf, destination: PathBuf) {
        if !self.settings.remember_folders {
            return;
        }
        self.settings.source_folder = Some(source);
        self.settings.destination_folder = Some(destination);

        let Some(path) = &self.config_path else {
            return;
        };
        if let Err(e) = self.settings.save_to(path) {
            warn!("Could not remember folders in {:?}: {}", path, e);
        }
    }

    /// Commits `decision` for the top card.
    pub async fn decide_top(&mut self, decision: Decision) {
        let Some(id) = self.stack.top().map(|p| p.id) else {
            return;
        };
        self.decide(id, decision).await;
    }

    /// Removes the photo from the pending stack and, on keep, copies it to the
    /// output directory. Copy failures are logged and otherwise ignored.
    pub async fn decide(&mut self, id: usize, decision: Decision) {
        let Some(photo) = self.stack.decide(id, decision) else {
            return;
        };
        self.gesture.reset();
        self.drag_origin = None;
        self.thumbnails.remove(&id);
        self.summary.record(decision);
        self.clamp_selection();

        if decision == Decision::Keep {
            let Some(output_dir) = self.stack.output_dir().map(Path::to_path_buf) else {
                warn!("No output directory for {}, not copied", photo.filename);
                self.summary.copy_failures += 1;
                return;
            };
            if let Err(e) = self.committer.commit(&photo, decision, &output_dir).await {
                warn!("Keep of {} failed: {}", photo.filename, e);
                self.summary.copy_failures += 1;
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.stack.remaining();
        self.selected_index = match self.selected_index {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }

    /// Loads the preview of the first visible card (or the selected list entry)
    /// that has none yet.
    pub(crate) async fn load_next_thumbnail(&mut self) {
        if !self.settings.show_preview {
            return;
        }

        let selected = self
            .selected_index
            .and_then(|index| self.stack.photos().get(index))
            .filter(|_| self.state == AppState::FileList);
        let candidates = self.stack.visible_cards().into_iter().rev().chain(selected);

        let missing = candidates
            .filter(|p| !self.thumbnails.contains_key(&p.id) && !self.failed_thumbnails.contains(&p.id))
            .map(|p| (p.id, p.path.clone()))
            .next();

        let Some((id, path)) = missing else {
            return;
        };

        match Thumbnail::load_async(path, THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT).await {
            Ok(thumbnail) => {
                self.thumbnails.insert(id, thumbnail);
            }
            Err(e) => {
                tracing::debug!("No preview for photo {}: {}", id, e);
                self.failed_thumbnails.insert(id);
            }
        }
    }
}
