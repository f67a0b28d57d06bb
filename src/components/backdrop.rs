use rand::prelude::*;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{StatefulWidget, Widget},
};

use crate::{components::sprite::Sprite, constants::backdrop};

/// Presentation variant of the playfield background, a pure function of how
/// long the round has been running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Day,
    Night,
}

impl Phase {
    pub fn at(elapsed_ms: u64) -> Self {
        if elapsed_ms >= backdrop::NIGHT_AFTER_MS {
            Phase::Night
        } else {
            Phase::Day
        }
    }
}

/// Star placement for the night sky, resampled only when the canvas size
/// changes. Purely cosmetic, so the thread RNG is fine here.
#[derive(Debug, Default)]
pub struct BackdropState {
    stars: Vec<Vec<usize>>,
    width: usize,
    height: usize,
}

impl BackdropState {
    pub fn new() -> Self {
        BackdropState::default()
    }

    fn sample(rng: &mut ThreadRng) -> usize {
        let u: f32 = rng.gen();
        if u > backdrop::STAR_DENSITY {
            backdrop::STAR_CHARS.len()
        } else {
            rng.gen_range(0..backdrop::STAR_CHARS.len())
        }
    }

    fn resize(&mut self, area: Rect) {
        let width = area.width as usize;
        let height = area.height as usize;
        if width == self.width && height == self.height {
            return;
        }

        let mut rng = thread_rng();
        self.stars =
            (0..height).map(|_| (0..width).map(|_| Self::sample(&mut rng)).collect()).collect();
        self.width = width;
        self.height = height;
    }
}

pub struct Backdrop {
    phase: Phase,
}

impl Backdrop {
    pub fn new(phase: Phase) -> Self {
        Backdrop { phase }
    }

    fn render_clouds(&self, area: Rect, buf: &mut Buffer) {
        let cloud = Sprite::from_text(backdrop::CLOUD_TEXT);
        let width = cloud.width();

        let positions = [(area.width / 6, area.height / 8), (area.width / 2 + width / 2, area.height / 4)];
        for (dx, dy) in positions {
            let rect = Rect {
                x: area.x + dx.min(area.width.saturating_sub(width)),
                y: area.y + dy,
                width,
                height: area.height.saturating_sub(dy),
            };
            Sprite::from_text(backdrop::CLOUD_TEXT)
                .style(Style::default().fg(backdrop::CLOUD_COLOR))
                .ignore_whitespace(true)
                .render(rect, buf);
        }
    }

    fn render_stars(&self, area: Rect, buf: &mut Buffer, state: &mut BackdropState) {
        state.resize(area);
        for (row, cells) in state.stars.iter().enumerate() {
            for (col, index) in cells.iter().enumerate() {
                if *index == backdrop::STAR_CHARS.len() {
                    continue;
                }
                let position = (area.x + col as u16, area.y + row as u16);
                if let Some(cell) = buf.cell_mut(position) {
                    cell.set_char(backdrop::STAR_CHARS[*index]);
                    cell.set_style(Style::default().fg(backdrop::STAR_COLOR));
                }
            }
        }
    }
}

impl StatefulWidget for Backdrop {
    type State = BackdropState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut BackdropState)
    where
        Self: Sized,
    {
        match self.phase {
            Phase::Day => self.render_clouds(area, buf),
            Phase::Night => self.render_stars(area, buf, state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_flips_at_threshold() {
        assert_eq!(Phase::at(0), Phase::Day);
        assert_eq!(Phase::at(backdrop::NIGHT_AFTER_MS - 1), Phase::Day);
        assert_eq!(Phase::at(backdrop::NIGHT_AFTER_MS), Phase::Night);
        assert_eq!(Phase::at(u64::MAX), Phase::Night);
    }

    #[test]
    fn test_star_grid_matches_canvas() {
        let mut state = BackdropState::new();
        state.resize(Rect::new(0, 0, 30, 10));
        assert_eq!(state.stars.len(), 10);
        assert!(state.stars.iter().all(|row| row.len() == 30));
    }
}
