use filegate_app::App;
use filegate_models::{Decision, Photo};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use crate::preview::ThumbnailView;

/// Horizontal inset per level of depth in the pile, in cells.
const DEPTH_INSET: u16 = 2;

pub fn draw(f: &mut Frame, area: Rect, app: &mut App) {
    let cards = app.stack.visible_cards();
    let Some(top) = cards.last().copied() else {
        app.card_area = None;
        draw_finished(f, area, app);
        return;
    };

    #[allow(clippy::cast_possible_truncation)]
    let max_depth = (cards.len() - 1) as u16;
    let pile = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    let card_height = pile.height.saturating_sub(max_depth);

    // Deepest card first so the top card is drawn last.
    for (index, photo) in cards.iter().enumerate() {
        #[allow(clippy::cast_possible_truncation)]
        let depth = max_depth - index as u16;
        if depth == 0 {
            break;
        }
        let rect = Rect {
            x: pile.x + depth * DEPTH_INSET,
            y: pile.y + depth,
            width: pile.width.saturating_sub(depth * DEPTH_INSET * 2),
            height: card_height,
        };
        draw_back_card(f, rect, photo);
    }

    let home = Rect {
        x: pile.x,
        y: pile.y,
        width: pile.width,
        height: card_height,
    };
    app.card_area = Some(home);
    draw_top_card(f, home, area, app, top);
}

fn draw_back_card(f: &mut Frame, rect: Rect, photo: &Photo) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(70, 70, 80)))
        .title(Span::styled(
            format!(" {} ", photo.filename),
            Style::default().fg(Color::Rgb(110, 110, 120)),
        ));
    f.render_widget(Clear, rect);
    f.render_widget(block, rect);
}

fn draw_top_card(f: &mut Frame, home: Rect, bounds: Rect, app: &App, photo: &Photo) {
    let gesture = &app.gesture;

    // Tilting about the bottom edge lifts the card a little as it swings out.
    #[allow(clippy::cast_possible_truncation)]
    let lift = (gesture.rotation_degrees().abs() / 12.5).round() as u16;
    #[allow(clippy::cast_possible_truncation)]
    let offset = gesture.offset().round() as i32;

    // Clip the shifted card to the screen so it slides off either edge.
    let left = (i32::from(home.x) + offset).max(i32::from(bounds.left()));
    let right = (i32::from(home.right()) + offset).min(i32::from(bounds.right()));
    let (Ok(x), Ok(width)) = (u16::try_from(left), u16::try_from(right - left)) else {
        return;
    };
    let rect = Rect {
        x,
        y: home.y.saturating_sub(lift).max(bounds.y),
        width,
        height: home.height,
    }
    .intersection(bounds);
    if rect.width < 4 || rect.height < 4 {
        return;
    }

    let opacity = gesture.opacity();
    let verdict = gesture.verdict();
    let border_color = match verdict {
        Some(Decision::Keep) => Color::Green,
        Some(Decision::Discard) => Color::Red,
        None => Color::White,
    };
    let mut border_style = Style::default().fg(border_color);
    if opacity < 0.6 {
        border_style = border_style.add_modifier(Modifier::DIM);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(Color::Rgb(24, 24, 28)));
    let inner = block.inner(rect);
    f.render_widget(Clear, rect);
    f.render_widget(block, rect);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(75), Constraint::Min(3)])
        .split(inner);

    match app.thumbnails.get(&photo.id) {
        Some(thumbnail) if app.settings.show_preview => {
            f.render_widget(ThumbnailView::new(thumbnail).opacity(opacity), chunks[0]);
        }
        _ => {
            let placeholder = Paragraph::new("🖼")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Rgb(90, 70, 120)));
            f.render_widget(placeholder, centered_line(chunks[0]));
        }
    }

    let mut caption = vec![
        Line::from(Span::styled(
            photo.filename.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            photo.dimensions_label(),
            Style::default().fg(Color::Rgb(180, 180, 180)).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some((latitude, longitude)) = photo.coordinates() {
        caption.push(Line::from(Span::styled(
            format!("📍 {latitude:.5}, {longitude:.5}"),
            Style::default().fg(Color::Rgb(130, 130, 130)),
        )));
    }
    f.render_widget(Paragraph::new(caption), padded(chunks[1]));

    if let Some(decision) = verdict {
        draw_verdict(f, inner, decision);
    }
}

fn draw_verdict(f: &mut Frame, inner: Rect, decision: Decision) {
    let (label, color) = match decision {
        Decision::Keep => ("KEEP", Color::Green),
        Decision::Discard => ("DISCARD", Color::Red),
    };

    let area = centered_line(inner);
    let badge = Rect {
        y: area.y.saturating_sub(1),
        height: 3.min(inner.height),
        ..area
    }
    .intersection(inner);

    let text = Paragraph::new(Line::from(vec![
        Span::raw(format!("{} ", decision.icon())),
        Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)))
    .style(Style::default().bg(Color::Rgb(10, 10, 10)));

    f.render_widget(Clear, badge);
    f.render_widget(text, badge);
}

fn draw_finished(f: &mut Frame, area: Rect, app: &App) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "All photos reviewed",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} kept, {} discarded",
            app.summary.kept, app.summary.discarded
        )),
        Line::from(Span::styled(
            "Press o to open another folder",
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

/// A one-line band through the vertical middle of `area`.
fn centered_line(area: Rect) -> Rect {
    Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    }
}

fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}
