use filegate_app::App;
use filegate_models::AppState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

mod browser;
mod cards;
mod file_list;
mod preview;

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);

    match app.state {
        AppState::Welcome => {
            app.card_area = None;
            draw_welcome(f, chunks[1]);
        }
        AppState::Review => cards::draw(f, chunks[1], app),
        AppState::FileList => {
            app.card_area = None;
            file_list::draw(f, chunks[1], app);
        }
        AppState::PickingSource | AppState::PickingDestination => {
            app.card_area = None;
            browser::draw(f, chunks[1], app);
        }
    }

    draw_status_bar(f, chunks[2], app);

    if app.show_help {
        draw_help_overlay(f);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        " 🗂  FileGate ",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];

    if !app.stack.is_empty() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} photos left", app.stack.remaining()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }
    if app.summary.decided() > 0 {
        spans.push(Span::styled(
            format!("  ({} reviewed)", app.summary.decided()),
            Style::default().fg(Color::Rgb(150, 150, 150)),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
    );
    f.render_widget(header, area);
}

fn draw_welcome(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Select a directory",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press o to choose a folder of photos, then a folder for the keepers.",
            Style::default().fg(Color::Rgb(150, 150, 150)),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
    );
    f.render_widget(paragraph, area);
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(40),
            Constraint::Percentage(25),
        ])
        .split(area);

    let shortcuts = match app.state {
        AppState::Welcome => "o:Open | ?:Help | q:Quit",
        AppState::Review => "←→:Drag | Enter:Release | k:Keep | x:Discard | Tab:List",
        AppState::FileList => "↑↓:Select | Tab/Esc:Cards | o:Open",
        AppState::PickingSource | AppState::PickingDestination => "↑↓:Move | Enter:Open | ←:Up | Space:Choose",
    };

    let center_content = match (app.state, &app.last_scan_result) {
        (AppState::PickingSource, _) => Line::from(Span::styled(
            "Choose the folder to review",
            Style::default().fg(Color::Cyan),
        )),
        (AppState::PickingDestination, _) => Line::from(Span::styled(
            "Choose where kept photos are copied",
            Style::default().fg(Color::Cyan),
        )),
        (_, Some(scan)) => Line::from(vec![
            Span::styled("📷 ", Style::default().fg(Color::Cyan)),
            Span::styled(
                format!(
                    "Scanned {} photos in {:.1}s at {}",
                    scan.photos_found,
                    scan.duration.as_secs_f64(),
                    scan.timestamp.format("%H:%M:%S")
                ),
                Style::default().fg(Color::Rgb(150, 150, 150)),
            ),
        ]),
        _ => Line::from(Span::styled("Ready", Style::default().fg(Color::Rgb(100, 100, 100)))),
    };

    let stats = format!(
        "👍 {} | 👎 {} | ⚠ {}",
        app.summary.kept, app.summary.discarded, app.summary.copy_failures
    );

    let block = || {
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(60, 60, 60)))
    };

    let left = Paragraph::new(shortcuts)
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .block(block());
    let center = Paragraph::new(center_content).alignment(Alignment::Center).block(block());
    let right = Paragraph::new(stats)
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .block(block());

    f.render_widget(left, chunks[0]);
    f.render_widget(center, chunks[1]);
    f.render_widget(right, chunks[2]);
}

fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(60, 70, f.area());
    f.render_widget(Clear, area);

    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |keys: &'static str, action: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {keys:<14}"), Style::default().fg(Color::Cyan)),
            Span::raw(action),
        ])
    };

    let help_text = vec![
        Line::from(""),
        heading("Reviewing"),
        entry("← / h", "Drag the top card left (discard side)"),
        entry("→ / l", "Drag the top card right (keep side)"),
        entry("Enter", "Release the drag"),
        entry("Esc", "Let go without deciding"),
        entry("k", "Keep: copy to the output folder"),
        entry("x / d", "Discard: drop from the stack"),
        entry("Mouse drag", "Swipe the top card"),
        Line::from(""),
        heading("Folders"),
        entry("o", "Open a source folder, then an output folder"),
        entry("↑ / ↓", "Move in the folder picker"),
        entry("Enter / →", "Open the highlighted folder"),
        entry("Backspace / ←", "Go to the parent folder"),
        entry("Space / s", "Choose the folder shown"),
        Line::from(""),
        heading("General"),
        entry("Tab", "Switch between cards and the file list"),
        entry("? / F1", "Toggle this help"),
        entry("q / Ctrl+C", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::Rgb(120, 120, 120)),
        )),
    ];

    let help = Paragraph::new(help_text).block(
        Block::default()
            .title(" Help ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Rgb(20, 20, 30))),
    );
    f.render_widget(help, area);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
