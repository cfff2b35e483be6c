use filegate_core::Thumbnail;
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// Draws a thumbnail with `▀` cells: foreground is the upper pixel, background
/// the lower one, so every cell shows two rows of the image.
pub struct ThumbnailView<'a> {
    thumbnail: &'a Thumbnail,
    opacity: f64,
}

impl<'a> ThumbnailView<'a> {
    pub const fn new(thumbnail: &'a Thumbnail) -> Self {
        Self {
            thumbnail,
            opacity: 1.0,
        }
    }

    /// Fades the image toward black, `0.0` being fully faded.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn shade(&self, [r, g, b]: [u8; 3]) -> Color {
        let scale = |c: u8| (f64::from(c) * self.opacity).round() as u8;
        Color::Rgb(scale(r), scale(g), scale(b))
    }
}

impl Widget for ThumbnailView<'_> {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let (src_w, src_h) = (self.thumbnail.width, self.thumbnail.height);
        if area.is_empty() || src_w == 0 || src_h == 0 {
            return;
        }

        // Target size in pixels: one per column, two per row.
        let target_w = f64::from(area.width);
        let target_h = f64::from(area.height) * 2.0;
        let scale = (target_w / f64::from(src_w)).min(target_h / f64::from(src_h));
        let draw_w = ((f64::from(src_w) * scale).floor() as u16).max(1);
        let draw_rows = (((f64::from(src_h) * scale) / 2.0).ceil() as u16).max(1);

        let x0 = area.x + (area.width.saturating_sub(draw_w)) / 2;
        let y0 = area.y + (area.height.saturating_sub(draw_rows)) / 2;

        let sample = |px: u16, py: u32| {
            let sx = ((f64::from(px) / scale) as u32).min(src_w - 1);
            let sy = ((f64::from(py) / scale) as u32).min(src_h - 1);
            self.thumbnail.pixel(sx, sy).map(|p| self.shade(p))
        };

        for row in 0..draw_rows {
            for col in 0..draw_w {
                let upper = sample(col, u32::from(row) * 2);
                let lower = sample(col, u32::from(row) * 2 + 1);
                if let Some(cell) = buf.cell_mut((x0 + col, y0 + row)) {
                    cell.set_char('▀');
                    if let Some(color) = upper {
                        cell.set_fg(color);
                    }
                    if let Some(color) = lower {
                        cell.set_bg(color);
                    }
                }
            }
        }
    }
}
