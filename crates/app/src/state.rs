use color_eyre::eyre::Result;
use filegate_config::Settings;
use filegate_core::{FileCommitter, ReviewStack, Scanner, SwipeGesture, Thumbnail};
use filegate_models::{AppState, ReviewSummary, ScanResult};
use ratatui::layout::Rect;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

use crate::FolderBrowser;

pub struct App {
    // Core state
    pub state: AppState,
    pub should_quit: bool,
    pub show_help: bool,

    // Components
    pub settings: Settings,
    pub(crate) config_path: Option<PathBuf>,
    pub scanner: Scanner,
    pub committer: FileCommitter,

    // Review state
    pub stack: ReviewStack,
    pub gesture: SwipeGesture,
    pub summary: ReviewSummary,
    pub last_scan_result: Option<ScanResult>,

    // Folder picking
    pub browser: FolderBrowser,
    pub(crate) pending_source: Option<PathBuf>,

    // Layout fed back by the renderer
    pub card_area: Option<Rect>,
    pub(crate) drag_origin: Option<u16>,

    // File list
    pub selected_index: Option<usize>,

    // Previews keyed by photo id
    pub thumbnails: HashMap<usize, Thumbnail>,
    pub(crate) failed_thumbnails: HashSet<usize>,
}

impl App {
    /// Initializes the app from the user's config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or the
    /// config file cannot be parsed.
    pub async fn init() -> Result<Self> {
        let settings = Settings::load().await?;
        Ok(Self::with_settings(settings).with_config_path(Settings::config_path()?))
    }

    /// Builds an app around explicit settings without a backing config file,
    /// so remembered folders are never written.
    #[must_use]
    pub fn with_settings(settings: Settings) -> Self {
        let settings = settings.validated();

        Self {
            state: AppState::Welcome,
            should_quit: false,
            show_help: false,
            scanner: Scanner::new(settings.match_extensions_any_case),
            committer: FileCommitter::new(),
            stack: ReviewStack::default(),
            gesture: SwipeGesture::new(settings.swipe_threshold),
            summary: ReviewSummary::default(),
            last_scan_result: None,
            browser: FolderBrowser::default(),
            pending_source: None,
            card_area: None,
            drag_origin: None,
            selected_index: None,
            thumbnails: HashMap::new(),
            failed_thumbnails: HashSet::new(),
            config_path: None,
            settings,
        }
    }

    /// Saves remembered folders to this path instead of the default location.
    #[must_use]
    pub fn with_config_path(mut self, config_path: PathBuf) -> Self {
        self.config_path = Some(config_path);
        self
    }

    /// Width of the top card in terminal cells, as last drawn.
    #[must_use]
    pub fn card_width(&self) -> f64 {
        self.card_area.map_or(0.0, |area| f64::from(area.width))
    }
}
