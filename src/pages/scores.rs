use std::collections::HashMap;

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Frame, Page, PageId};
use crate::{action::Action, config::PageKeyBindings, store::ScoreStore};

/// Read-only view of the persisted top scores; any key press returns to the
/// menu.
pub struct ScoresPage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    store: Option<ScoreStore>,
    scores: Vec<u32>,
}

impl ScoresPage {
    pub fn new() -> Self {
        ScoresPage {
            action_tx: None,
            keymap: PageKeyBindings::default(),
            store: None,
            scores: Vec::new(),
        }
    }

    fn reload(&mut self) {
        if let Some(store) = &self.store {
            self.scores = store.load();
        }
    }
}

impl Page for ScoresPage {
    fn id(&self) -> PageId {
        PageId::Scores
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

    fn init(&mut self) -> Result<()> {
        self.reload();
        Ok(())
    }

    fn handle_key_events(&mut self, _key: KeyEvent) -> Result<Option<Action>> {
        Ok(Some(Action::ShowHome))
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::ShowScores {
            self.reload();
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        f.render_widget(Clear, rect);

        let mut lines = vec![
            Line::from("High Scores").style(Style::default().fg(Color::Yellow)),
            Line::from(""),
        ];
        if self.scores.is_empty() {
            lines.push(Line::from("No scores yet").style(Style::default().fg(Color::DarkGray)));
        } else {
            for (index, score) in self.scores.iter().enumerate() {
                lines.push(Line::from(format!("{}. {}", index + 1, score)));
            }
        }

        let [list_area, hint_area] =
            Layout::vertical(vec![Constraint::Length(lines.len() as u16), Constraint::Length(1)])
                .flex(layout::Flex::SpaceAround)
                .areas(rect);

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
        f.render_widget(paragraph, list_area);

        let hint = Paragraph::new(Line::from("Press any key to return"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hint, hint_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_picks_up_new_scores() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("flappy-rs-scores-{}", std::process::id()));
        let path = dir.join("scores.txt");
        let _ = std::fs::remove_file(&path);
        let store = ScoreStore::at(path);

        let mut page = ScoresPage::new();
        page.register_score_store(store.clone())?;
        page.init()?;
        assert!(page.scores.is_empty());

        store.record(11)?;
        page.update(Action::ShowScores)?;
        assert_eq!(page.scores, vec![11]);
        Ok(())
    }
}
