mod bird;
mod difficulty;
mod hitbox;
mod pipes;

use std::{collections::HashMap, time::Instant};

use color_eyre::eyre::Result;
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Frame, Page, PageId};
use crate::{
    action::{Action, GameAction},
    components::{
        backdrop::{Backdrop, BackdropState, Phase},
        sprite::Sprite,
    },
    config::PageKeyBindings,
    constants::game,
    pages::game::{bird::Bird, difficulty::Difficulty, hitbox::Hitbox, pipes::PipeField},
};

enum RoundState {
    Idle,
    Playing,
}

/// Runs one round at a time: integrates the bird, spawns and advances pipes,
/// detects the end of the round and reports the final score.
pub struct GamePage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    state: RoundState,
    bird: Bird,
    pipes: PipeField,
    score: u32,
    params: Difficulty,
    started_at: Option<Instant>,
    backdrop: BackdropState,
    rng: StdRng,
}

impl GamePage {
    pub fn new() -> Self {
        GamePage {
            action_tx: None,
            keymap: PageKeyBindings::default(),
            state: RoundState::Idle,
            bird: Bird::new(game::BIRD_X, game::LOGICAL_HEIGHT / 2.0),
            pipes: PipeField::new(),
            score: 0,
            params: Difficulty::for_score(0),
            started_at: None,
            backdrop: BackdropState::new(),
            rng: StdRng::from_entropy(),
        }
    }

    fn reset(&mut self) {
        self.state = RoundState::Playing;
        self.bird = Bird::new(game::BIRD_X, game::LOGICAL_HEIGHT / 2.0);
        self.pipes.reset();
        self.score = 0;
        self.params = Difficulty::for_score(0);
        self.started_at = Some(Instant::now());
        log::info!("Starting a new round");
    }

    fn elapsed_ms(&self) -> u64 {
        self.started_at.map(|start| start.elapsed().as_millis() as u64).unwrap_or(0)
    }

    fn finish_round(&mut self) -> Option<Action> {
        self.state = RoundState::Idle;
        log::info!("Round over, score {}", self.score);
        Some(Action::RoundOver(self.score))
    }

    /// One fixed-rate step: integrate, cull the floor, spawn, scroll + score,
    /// check pipe collisions, then refresh the difficulty for the next step.
    fn advance_round(&mut self) -> Option<Action> {
        self.bird.tick(self.params.gravity);
        if self.bird.hitbox().bottom() >= game::LOGICAL_HEIGHT {
            return self.finish_round();
        }

        let now_ms = self.elapsed_ms();
        self.pipes.try_spawn(now_ms, &mut self.rng);
        self.score += self.pipes.advance(self.params.scroll_speed);

        if self.pipes.collides(&self.bird.hitbox()) {
            return self.finish_round();
        }

        self.params = Difficulty::for_score(self.score);
        None
    }
}

impl Page for GamePage {
    fn id(&self) -> PageId {
        PageId::Game
    }

    fn register_keymap(&mut self, keymaps: &HashMap<PageId, PageKeyBindings>) -> Result<()> {
        if let Some(keymap) = keymaps.get(&self.id()) {
            self.keymap = keymap.clone();
        }
        Ok(())
    }

    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
        self.action_tx = Some(tx);
        Ok(())
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::StartRound => self.reset(),
            Action::Game(GameAction::Flap) => {
                if let RoundState::Playing = self.state {
                    self.bird.flap(self.params.impulse);
                }
            },
            Action::Tick => {
                if let RoundState::Playing = self.state {
                    return Ok(self.advance_round());
                }
            },
            _ => {},
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        let phase = Phase::at(self.elapsed_ms());
        f.render_stateful_widget(Backdrop::new(phase), area, &mut self.backdrop);

        for pair in self.pipes.iter() {
            if let Some(rect) = project(&pair.upper(), area) {
                let rows = pipe_rows(rect.width, rect.height, true);
                f.render_widget(Sprite::new(rows).style(Style::default().fg(game::PIPE_COLOR)), rect);
            }
            if let Some(rect) = project(&pair.lower(), area) {
                let rows = pipe_rows(rect.width, rect.height, false);
                f.render_widget(Sprite::new(rows).style(Style::default().fg(game::PIPE_COLOR)), rect);
            }
        }

        if let Some(rect) = project(&self.bird.hitbox(), area) {
            let sprite = Sprite::from_text(game::BIRD_TEXT)
                .style(Style::default().fg(game::BIRD_COLOR))
                .ignore_whitespace(true);
            let rect = Rect {
                width: sprite.width().min(area.right() - rect.x),
                height: sprite.height().min(area.bottom() - rect.y),
                ..rect
            };
            f.render_widget(sprite, rect);
        }

        let score = Paragraph::new(Line::from(format!("Score: {}", self.score)))
            .style(Style::default().fg(game::SCORE_COLOR))
            .alignment(Alignment::Center);
        f.render_widget(score, Rect { height: 1, ..area });

        Ok(())
    }
}

/// Maps a logical-space box onto terminal cells inside `canvas`, clamped to
/// the canvas. Boxes entirely outside it yield `None`.
fn project(hitbox: &Hitbox, canvas: Rect) -> Option<Rect> {
    let scale_x = canvas.width as f32 / game::LOGICAL_WIDTH;
    let scale_y = canvas.height as f32 / game::LOGICAL_HEIGHT;

    let left = ((hitbox.x * scale_x).floor() as i32).clamp(0, canvas.width as i32);
    let right = ((hitbox.right() * scale_x).ceil() as i32).clamp(0, canvas.width as i32);
    let top = ((hitbox.y * scale_y).floor() as i32).clamp(0, canvas.height as i32);
    let bottom = ((hitbox.bottom() * scale_y).ceil() as i32).clamp(0, canvas.height as i32);

    if right <= left || bottom <= top {
        return None;
    }
    Some(Rect {
        x: canvas.x + left as u16,
        y: canvas.y + top as u16,
        width: (right - left) as u16,
        height: (bottom - top) as u16,
    })
}

/// Pipe body with a thicker rim on the gap-facing end.
fn pipe_rows(width: u16, height: u16, rim_at_bottom: bool) -> Vec<String> {
    let body_row = std::iter::repeat_n('|', width as usize).collect::<String>();
    let rim_row = std::iter::repeat_n('█', width as usize).collect::<String>();

    let rim_count = height.min(2);
    let body_iter = std::iter::repeat_with(|| body_row.clone()).take((height - rim_count) as usize);
    let rim_iter = std::iter::repeat_with(|| rim_row.clone()).take(rim_count as usize);

    if rim_at_bottom {
        body_iter.chain(rim_iter).collect()
    } else {
        rim_iter.chain(body_iter).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_round_resets_state() -> Result<()> {
        let mut page = GamePage::new();
        page.update(Action::StartRound)?;

        assert!(matches!(page.state, RoundState::Playing));
        assert_eq!(page.score, 0);
        assert_eq!(page.params, Difficulty::for_score(0));
        assert!(page.pipes.is_empty());
        assert!((page.bird.hitbox().y - game::LOGICAL_HEIGHT / 2.0).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn test_flap_sets_velocity_to_impulse() -> Result<()> {
        let mut page = GamePage::new();
        page.update(Action::StartRound)?;

        page.update(Action::Game(GameAction::Flap))?;
        page.update(Action::Game(GameAction::Flap))?;
        assert!((page.bird.velocity() - page.params.impulse).abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn test_flap_is_ignored_between_rounds() -> Result<()> {
        let mut page = GamePage::new();
        page.update(Action::Game(GameAction::Flap))?;
        assert!(page.bird.velocity().abs() < f32::EPSILON);
        Ok(())
    }

    #[test]
    fn test_free_fall_ends_round_on_the_floor() -> Result<()> {
        let mut page = GamePage::new();
        page.update(Action::StartRound)?;

        for _ in 0..200 {
            if let Some(action) = page.update(Action::Tick)? {
                assert_eq!(action, Action::RoundOver(0));
                assert!(matches!(page.state, RoundState::Idle));
                // Later ticks are inert until the next round starts.
                assert_eq!(page.update(Action::Tick)?, None);
                return Ok(());
            }
        }
        panic!("bird never reached the floor");
    }

    #[test]
    fn test_project_covers_canvas() {
        let canvas = Rect::new(1, 1, 60, 40);
        let full = Hitbox::new(0.0, 0.0, game::LOGICAL_WIDTH, game::LOGICAL_HEIGHT);
        assert_eq!(project(&full, canvas), Some(canvas));
    }

    #[test]
    fn test_project_rejects_offscreen_boxes() {
        let canvas = Rect::new(0, 0, 60, 40);
        assert_eq!(project(&Hitbox::new(-100.0, 0.0, 50.0, 50.0), canvas), None);
        assert_eq!(project(&Hitbox::new(0.0, game::LOGICAL_HEIGHT + 1.0, 50.0, 50.0), canvas), None);
    }

    #[test]
    fn test_pipe_rows_shape() {
        let rows = pipe_rows(3, 5, true);
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0], "|||");
        assert_eq!(rows[4], "███");

        let rows = pipe_rows(3, 5, false);
        assert_eq!(rows[0], "███");
        assert_eq!(rows[4], "|||");
    }
}
