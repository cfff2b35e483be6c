use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use filegate_models::{AppState, Decision};

use super::App;

impl App {
    /// Keys that work on every non-modal screen. Returns true if handled.
    pub(crate) fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => {
                self.drop_drag();
                self.show_help = true;
            }
            KeyCode::Char('o') => {
                self.drop_drag();
                self.open_directory();
            }
            KeyCode::Tab => {
                self.drop_drag();
                self.state = match self.state {
                    AppState::Review => AppState::FileList,
                    AppState::FileList => AppState::Review,
                    other => other,
                };
            }
            _ => return false,
        }
        true
    }

    /// Leaving the card screen ends any drag in progress without deciding.
    fn drop_drag(&mut self) {
        self.gesture.cancel();
        self.drag_origin = None;
    }

    pub(crate) async fn handle_review_keys(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        let width = self.card_width();
        let step = self.settings.drag_step;

        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.gesture.nudge(-step, width),
            KeyCode::Right | KeyCode::Char('l') => self.gesture.nudge(step, width),
            KeyCode::Enter => {
                if let Some(decision) = self.gesture.release() {
                    self.decide_top(decision).await;
                }
            }
            KeyCode::Esc => self.gesture.cancel(),
            KeyCode::Char('k') => self.decide_top(Decision::Keep).await,
            KeyCode::Char('x' | 'd') => self.decide_top(Decision::Discard).await,
            _ => {}
        }
    }

    pub(crate) fn handle_file_list_keys(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        let len = self.stack.remaining();
        if len == 0 {
            return;
        }

        match key.code {
            KeyCode::Up => {
                self.selected_index = Some(self.selected_index.map_or(0, |i| i.saturating_sub(1)));
            }
            KeyCode::Down => {
                self.selected_index = Some(self.selected_index.map_or(0, |i| (i + 1).min(len - 1)));
            }
            KeyCode::Home => self.selected_index = Some(0),
            KeyCode::End => self.selected_index = Some(len - 1),
            KeyCode::Esc => self.state = AppState::Review,
            _ => {}
        }
    }

    pub(crate) async fn handle_picker_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => self.browser.move_up(),
            KeyCode::Down => self.browser.move_down(),
            KeyCode::Enter | KeyCode::Right => self.browser.enter_selected(),
            KeyCode::Backspace | KeyCode::Left => self.browser.go_parent(),
            KeyCode::Char(' ' | 's') => self.choose_current_folder().await,
            KeyCode::Esc => self.cancel_folder_pick(),
            _ => {}
        }
    }

    /// A press on the top card starts a drag; the drag follows the pointer
    /// horizontally and the release applies the threshold.
    pub(crate) async fn handle_mouse(&mut self, mouse: MouseEvent) {
        let width = self.card_width();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let on_card = self.card_area.is_some_and(|area| {
                    mouse.column >= area.x
                        && mouse.column < area.x + area.width
                        && mouse.row >= area.y
                        && mouse.row < area.y + area.height
                });
                if on_card && self.stack.top().is_some() {
                    self.drag_origin = Some(mouse.column);
                    self.gesture.on_changed(0.0, width);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(origin) = self.drag_origin {
                    let translation = f64::from(mouse.column) - f64::from(origin);
                    self.gesture.on_changed(translation, width);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(origin) = self.drag_origin.take() {
                    let translation = f64::from(mouse.column) - f64::from(origin);
                    if let Some(decision) = self.gesture.on_ended(translation, width) {
                        self.decide_top(decision).await;
                    }
                }
            }
            _ => {}
        }
    }
}
