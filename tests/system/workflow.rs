#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::float_cmp)]
use color_eyre::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use image::RgbImage;
use ratatui::{Terminal, backend::TestBackend};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use filegate_app::App;
use filegate_config::Settings;
use filegate_models::AppState;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// `root/inbox` with `count` PNGs and an empty `root/keepers`
fn setup_test_environment(root: &Path, count: usize) -> Result<(PathBuf, PathBuf)> {
    let inbox = root.join("inbox");
    let keepers = root.join("keepers");
    std::fs::create_dir_all(&inbox)?;
    std::fs::create_dir_all(&keepers)?;
    std::fs::create_dir_all(inbox.join("raw"))?;

    for i in 0..count {
        let shade = u8::try_from(i * 40).unwrap_or(u8::MAX);
        RgbImage::from_pixel(32, 24, image::Rgb([shade, 90, 200])).save(inbox.join(format!("IMG_{i:04}.png")))?;
    }
    std::fs::write(inbox.join("readme.txt"), "not a photo")?;
    std::fs::write(inbox.join(".DS_Store"), "junk")?;
    Ok((inbox, keepers))
}

fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal.draw(|f| filegate_ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn kept_files(keepers: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(keepers)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

/// Opens both pickers at `root` and walks into inbox, then keepers.
async fn open_batch(app: &mut App) -> Result<()> {
    app.on_key(key(KeyCode::Char('o'))).await;
    assert_eq!(app.state, AppState::PickingSource);

    // entries: inbox, keepers
    app.on_key(key(KeyCode::Enter)).await;
    assert!(app.browser.current().ends_with("inbox"));
    app.on_key(key(KeyCode::Char(' '))).await;
    assert_eq!(app.state, AppState::PickingDestination);

    // destination picker starts next to the source
    app.on_key(key(KeyCode::Down)).await;
    app.on_key(key(KeyCode::Right)).await;
    assert!(app.browser.current().ends_with("keepers"));
    app.on_key(key(KeyCode::Char('s'))).await;
    Ok(())
}

#[tokio::test]
async fn test_complete_review_workflow() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (_inbox, keepers) = setup_test_environment(temp_dir.path(), 3)?;

    let settings = Settings {
        source_folder: Some(temp_dir.path().to_path_buf()),
        ..Default::default()
    };
    let mut app = App::with_settings(settings);
    let mut terminal = Terminal::new(TestBackend::new(120, 40))?;

    assert!(render(&mut terminal, &mut app).contains("Select a directory"));

    open_batch(&mut app).await?;
    assert_eq!(app.state, AppState::Review);
    assert_eq!(app.stack.remaining(), 3);
    assert_eq!(app.last_scan_result.as_ref().map(|r| r.photos_found), Some(3));

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("3 photos left"));
    assert!(screen.contains("IMG_0002.png"));
    assert!(screen.contains("32x24, RGB"));

    // The first tick loads the top card's preview
    app.on_tick().await;
    assert!(app.thumbnails.contains_key(&2));

    // Five 5% nudges pass the 20% threshold
    for _ in 0..5 {
        app.on_key(key(KeyCode::Right)).await;
    }
    assert!(render(&mut terminal, &mut app).contains("KEEP"));
    app.on_key(key(KeyCode::Enter)).await;
    assert_eq!(kept_files(&keepers), ["IMG_0002.png"]);

    app.on_key(key(KeyCode::Char('x'))).await;
    assert_eq!(app.stack.remaining(), 1);
    assert_eq!(kept_files(&keepers), ["IMG_0002.png"]);

    // The file list shows what is left
    app.on_key(key(KeyCode::Tab)).await;
    assert_eq!(app.state, AppState::FileList);
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("IMG_0000.png"));
    assert!(screen.contains("32 x 24"));
    app.on_key(key(KeyCode::Tab)).await;

    app.on_key(key(KeyCode::Char('k'))).await;
    assert_eq!(kept_files(&keepers), ["IMG_0000.png", "IMG_0002.png"]);
    assert_eq!((app.summary.kept, app.summary.discarded, app.summary.copy_failures), (2, 1, 0));

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("All photos reviewed"));
    assert!(!screen.contains("photos left"));

    app.on_key(key(KeyCode::Char('q'))).await;
    assert!(app.should_quit);
    Ok(())
}

#[tokio::test]
async fn test_mouse_swipe_workflow() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (_inbox, keepers) = setup_test_environment(temp_dir.path(), 2)?;

    let settings = Settings {
        source_folder: Some(temp_dir.path().to_path_buf()),
        ..Default::default()
    };
    let mut app = App::with_settings(settings);
    let mut terminal = Terminal::new(TestBackend::new(120, 40))?;
    open_batch(&mut app).await?;
    render(&mut terminal, &mut app);

    let area = app.card_area.expect("card drawn");
    let row = area.y + area.height / 2;
    let start = area.x + area.width / 2;
    let short = start + area.width / 10;
    let far = start.saturating_sub(area.width * 2 / 5);

    // A short drag snaps back
    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), start, row)).await;
    app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), short, row)).await;
    app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), short, row)).await;
    assert_eq!(app.stack.remaining(), 2);
    for _ in 0..10 {
        app.on_tick().await;
    }
    assert_eq!(app.gesture.offset(), 0.0);

    // A long drag to the left discards
    app.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), start, row)).await;
    app.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), far, row)).await;
    assert!(render(&mut terminal, &mut app).contains("DISCARD"));
    app.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), far, row)).await;

    assert_eq!(app.stack.remaining(), 1);
    assert!(app.stack.get(1).is_none());
    assert!(kept_files(&keepers).is_empty());
    Ok(())
}

#[tokio::test]
async fn test_cancelled_picker_leaves_nothing_to_review() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_test_environment(temp_dir.path(), 2)?;

    let settings = Settings {
        source_folder: Some(temp_dir.path().to_path_buf()),
        ..Default::default()
    };
    let mut app = App::with_settings(settings);
    open_batch(&mut app).await?;
    assert_eq!(app.stack.remaining(), 2);

    app.on_key(key(KeyCode::Char('o'))).await;
    app.on_key(key(KeyCode::Esc)).await;

    assert_eq!(app.state, AppState::Welcome);
    assert!(app.stack.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_remembered_folders_survive_restart() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let (inbox, keepers) = setup_test_environment(temp_dir.path(), 1)?;
    let config_path = temp_dir.path().join("config").join("config.toml");

    let settings = Settings {
        source_folder: Some(temp_dir.path().to_path_buf()),
        remember_folders: true,
        ..Default::default()
    };
    let mut app = App::with_settings(settings).with_config_path(config_path.clone());
    open_batch(&mut app).await?;

    let reloaded = Settings::load_from(&config_path).await?;
    assert_eq!(reloaded.source_folder.as_deref(), Some(inbox.as_path()));
    assert_eq!(reloaded.destination_folder.as_deref(), Some(keepers.as_path()));
    assert!(reloaded.remember_folders);
    Ok(())
}
