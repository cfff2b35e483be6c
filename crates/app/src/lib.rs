mod actions;
mod browser;
mod handlers;
mod state;

pub use browser::FolderBrowser;
pub use state::App;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use filegate_models::AppState;

impl App {
    /// Creates the app with settings from the user's config file.
    ///
    /// # Errors
    /// Returns an error if the configuration file exists but cannot be read
    /// or parsed.
    pub async fn new() -> Result<Self> {
        state::App::init().await
    }

    /// Handles keyboard input events and updates application state accordingly.
    pub async fn on_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.state {
            AppState::PickingSource | AppState::PickingDestination => self.handle_picker_keys(key).await,
            AppState::Review => self.handle_review_keys(key).await,
            AppState::FileList => self.handle_file_list_keys(key),
            AppState::Welcome => {
                self.handle_global_keys(key);
            }
        }
    }

    /// Handles mouse drags on the top card.
    pub async fn on_mouse(&mut self, mouse: MouseEvent) {
        if self.state == AppState::Review && !self.show_help {
            self.handle_mouse(mouse).await;
        }
    }

    /// Advances the snap-back animation and loads at most one missing preview.
    pub async fn on_tick(&mut self) {
        self.gesture.tick();
        self.load_next_thumbnail().await;
    }
}
