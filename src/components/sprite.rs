use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

/// Draws a block of text cell by cell, clipped to the given area. With
/// `ignore_whitespace` set, blank cells keep whatever is already behind the
/// sprite, so irregular shapes don't punch rectangular holes into the scene.
#[derive(Debug, Default)]
pub struct Sprite {
    lines: Vec<String>,
    style: Style,
    ignore_whitespace: bool,
}

impl Sprite {
    pub fn new(lines: Vec<String>) -> Self {
        Sprite { lines, style: Style::default(), ignore_whitespace: false }
    }

    pub fn from_text(text: &str) -> Self {
        Sprite::new(text.lines().filter(|line| !line.is_empty()).map(str::to_string).collect())
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn ignore_whitespace(mut self, ignore_whitespace: bool) -> Self {
        self.ignore_whitespace = ignore_whitespace;
        self
    }

    pub fn width(&self) -> u16 {
        self.lines.iter().map(|line| line.chars().count()).max().unwrap_or(0) as u16
    }

    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }
}

impl Widget for Sprite {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        for (row, line) in self.lines.iter().enumerate() {
            let y = area.y.saturating_add(row as u16);
            if y >= area.bottom() {
                break;
            }
            for (col, ch) in line.chars().enumerate() {
                let x = area.x.saturating_add(col as u16);
                if x >= area.right() {
                    break;
                }
                if self.ignore_whitespace && ch.is_whitespace() {
                    continue;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(ch);
                    cell.set_style(self.style);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_text_drops_blank_lines() {
        let sprite = Sprite::from_text("\nab\ncd\n");
        assert_eq!(sprite.height(), 2);
        assert_eq!(sprite.width(), 2);
    }

    #[test]
    fn test_render_clips_to_area() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 4));
        let sprite = Sprite::from_text("abcdef\nghijkl");
        sprite.render(Rect::new(2, 2, 2, 1), &mut buf);

        assert_eq!(buf.cell((2, 2)).unwrap().symbol(), "a");
        assert_eq!(buf.cell((3, 2)).unwrap().symbol(), "b");
        // Clipped on both axes.
        assert_eq!(buf.cell((3, 3)).unwrap().symbol(), " ");
    }

    #[test]
    fn test_whitespace_preserves_background() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        buf.cell_mut((1, 0)).unwrap().set_char('#');

        let sprite = Sprite::from_text("a b").ignore_whitespace(true);
        sprite.render(Rect::new(0, 0, 4, 1), &mut buf);

        assert_eq!(buf.cell((0, 0)).unwrap().symbol(), "a");
        assert_eq!(buf.cell((1, 0)).unwrap().symbol(), "#");
        assert_eq!(buf.cell((2, 0)).unwrap().symbol(), "b");
    }
}
