use std::collections::HashMap;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Frame, Page, PageId};
use crate::{action::Action, config::PageKeyBindings, store::ScoreStore};

/// End-of-round screen. Receiving the round's final score persists it; any
/// key press afterwards leads back to the menu.
pub struct OverPage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    store: Option<ScoreStore>,
    score: u32,
    is_best: bool,
}

impl OverPage {
    pub fn new() -> Self {
        OverPage {
            action_tx: None,
            keymap: PageKeyBindings::default(),
            store: None,
            score: 0,
            is_best: false,
        }
    }
}

impl Page for OverPage {
    fn id(&self) -> PageId {
        PageId::Over
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

    fn register_score_store(&mut self, store: ScoreStore) -> Result<()> {
        self.store = Some(store);
        Ok(())
    }

    fn handle_key_events(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(Some(Action::ShowHome))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::RoundOver(score) = action {
            self.score = score;
            self.is_best = false;
            if let Some(store) = &self.store {
                match store.record(score) {
                    Ok(scores) => {
                        self.is_best = score > 0 && scores.first() == Some(&score);
                    },
                    Err(e) => log::error!("Failed to persist score {score}: {e:?}"),
                }
            }
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        f.render_widget(Clear, rect);

        let mut lines = vec![
            Line::from("Game Over!").style(Style::default().fg(Color::Red)),
            Line::from(""),
            Line::from(format!("Score: {}", self.score)).style(Style::default().fg(Color::Yellow)),
        ];
        if self.is_best {
            lines.push(Line::from(""));
            lines.push(Line::from("New best!").style(Style::default().fg(Color::LightCyan)));
        }

        let [message_area, hint_area] =
            Layout::vertical(vec![Constraint::Length(lines.len() as u16), Constraint::Length(1)])
                .flex(layout::Flex::SpaceAround)
                .areas(rect);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(paragraph, message_area);

        let hint = Paragraph::new(Line::from("Press any key to return to menu"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint, hint_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with_store(store: ScoreStore) -> OverPage {
        let mut page = OverPage::new();
        page.register_score_store(store).unwrap();
        page
    }

    #[test]
    fn test_round_over_persists_score() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("flappy-rs-over-{}", std::process::id()));
        let path = dir.join("scores.txt");
        let _ = std::fs::remove_file(&path);
        let store = ScoreStore::at(path);
        let mut page = page_with_store(store.clone());

        page.update(Action::RoundOver(4))?;
        assert_eq!(store.load(), vec![4]);
        assert!(page.is_best);

        page.update(Action::RoundOver(2))?;
        assert_eq!(store.load(), vec![4, 2]);
        assert!(!page.is_best);
        Ok(())
    }

    #[test]
    fn test_any_key_returns_to_menu() -> Result<()> {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut page = OverPage::new();
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty());
        assert!(matches!(page.handle_key_events(key)?, Some(Action::ShowHome)));
        Ok(())
    }
}
