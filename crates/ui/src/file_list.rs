use filegate_app::App;
use filegate_models::Photo;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Row, Table},
};

use crate::preview::ThumbnailView;

pub fn draw(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let photos = app.stack.photos();
    let items: Vec<ListItem> = photos
        .iter()
        .map(|photo| ListItem::new(Line::from(photo.path.display().to_string())))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Pending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(60, 60, 60))),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Rgb(40, 40, 70))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default();
    state.select(app.selected_index);
    f.render_stateful_widget(list, chunks[0], &mut state);

    let selected = app.selected_index.and_then(|index| photos.get(index));
    match selected {
        Some(photo) => draw_details(f, chunks[1], app, photo),
        None => {
            let prompt = if photos.is_empty() {
                "Select a directory"
            } else {
                "Select an image"
            };
            let paragraph = Paragraph::new(prompt)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Rgb(150, 150, 150)))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(paragraph, chunks[1]);
        }
    }
}

fn draw_details(f: &mut Frame, area: Rect, app: &App, photo: &Photo) {
    let block = Block::default()
        .title(format!(" {} ", photo.filename))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(6)])
        .split(inner);

    if let Some(thumbnail) = app.thumbnails.get(&photo.id) {
        f.render_widget(ThumbnailView::new(thumbnail), chunks[0]);
    } else {
        let loading = Paragraph::new(Span::styled("no preview", Style::default().fg(Color::Rgb(90, 70, 120))))
            .alignment(Alignment::Center);
        f.render_widget(loading, chunks[0]);
    }

    let unknown = || "unknown".to_string();
    let dimensions = match (photo.width, photo.height) {
        (Some(w), Some(h)) => format!("{w} x {h}"),
        _ => unknown(),
    };
    let color = photo.color_mode.map_or_else(unknown, |c| c.to_string());
    let location = photo
        .coordinates()
        .map_or_else(|| "none".to_string(), |(lat, lon)| format!("{lat:.5}, {lon:.5}"));

    let label = Style::default().fg(Color::Rgb(150, 150, 150));
    let rows = vec![
        Row::new(vec![
            Span::styled("Dimensions", label),
            Span::raw(dimensions),
        ]),
        Row::new(vec![Span::styled("Color", label), Span::raw(color)]),
        Row::new(vec![Span::styled("GPS", label), Span::raw(location)]),
        Row::new(vec![
            Span::styled("Path", label),
            Span::raw(photo.path.display().to_string()),
        ]),
    ];

    let table = Table::new(rows, [Constraint::Length(12), Constraint::Min(10)]).column_spacing(1);
    f.render_widget(table, chunks[1]);
}
