use filegate_app::App;
use filegate_models::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.state {
        AppState::PickingDestination => " Select output folder ",
        _ => " Select source folder ",
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let current = Paragraph::new(Line::from(vec![
        Span::styled("📂 ", Style::default().fg(Color::Yellow)),
        Span::styled(
            app.browser.current().display().to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]))
    .block(
        Block::default()
            .title(title)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(current, chunks[0]);

    let entries = app.browser.entries();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(60, 60, 60)));

    if entries.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No subfolders. Press Space to choose this folder.",
            Style::default().fg(Color::Rgb(120, 120, 120)),
        ))
        .block(block);
        f.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
            ListItem::new(Line::from(format!("📁 {name}")))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Rgb(40, 40, 70))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(Some(app.browser.selected()));
    f.render_stateful_widget(list, chunks[1], &mut state);
}
