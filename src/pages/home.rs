use std::collections::HashMap;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use derive_builder::Builder;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Frame, Page, PageId};
use crate::{
    action::{Action, HomeAction},
    config::PageKeyBindings,
    constants::TITLE_TEXT,
};

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum OptionItem {
    Start,
    Scores,
    Quit,
}

impl OptionItem {
    fn action(&self) -> Action {
        match self {
            OptionItem::Start => Action::StartRound,
            OptionItem::Scores => Action::ShowScores,
            OptionItem::Quit => Action::Quit,
        }
    }
}

#[derive(Builder)]
pub struct HomePage {
    #[builder(default)]
    pub action_tx: Option<UnboundedSender<Action>>,
    #[builder(default)]
    pub keymap: PageKeyBindings,
    options: Vec<(OptionItem, &'static str)>,
    selected_option_index: usize,
}

impl HomePage {
    pub fn new() -> Self {
        HomePageBuilder::default()
            .options(vec![
                (OptionItem::Start, "1. Start"),
                (OptionItem::Scores, "2. Scores"),
                (OptionItem::Quit, "3. Quit"),
            ])
            .selected_option_index(0)
            .build()
            .unwrap()
    }

    fn up(&mut self) {
        if self.selected_option_index > 0 {
            self.selected_option_index -= 1;
        }
    }

    fn down(&mut self) {
        if self.selected_option_index < self.options.len() - 1 {
            self.selected_option_index += 1;
        }
    }
}

impl Page for HomePage {
    fn id(&self) -> PageId {
        PageId::Home
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

    fn handle_key_events(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        // Digit shortcuts select an entry without moving the cursor.
        let action = match key.code {
            KeyCode::Char('1') => Some(Action::StartRound),
            KeyCode::Char('2') => Some(Action::ShowScores),
            KeyCode::Char('3') => Some(Action::Quit),
            _ => None,
        };
        Ok(action)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if let Action::Home(command) = action {
            match command {
                HomeAction::Up => self.up(),
                HomeAction::Down => self.down(),
                HomeAction::Select => {
                    let (item, _) = self.options[self.selected_option_index];
                    return Ok(Some(item.action()));
                },
            }
        }
        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, rect: Rect) -> Result<()> {
        f.render_widget(Clear, rect);

        let title_lines: Vec<&str> = TITLE_TEXT.lines().filter(|s| !s.is_empty()).collect();
        let num_title_lines = title_lines.len() as u16;

        let num_options = self.options.len() as u16;
        let option_height = num_options * 2 - 1;

        let [title_area, option_area] =
            Layout::vertical(vec![Constraint::Length(num_title_lines), Constraint::Length(option_height)])
                .flex(layout::Flex::SpaceAround)
                .areas(rect);

        // Draw title
        let lines = title_lines.iter().map(|line| Line::from(*line)).collect::<Vec<_>>();
        let paragraph = Paragraph::new(lines).style(Style::default().fg(Color::Yellow)).alignment(Alignment::Center);
        f.render_widget(paragraph, title_area);

        // Draw options
        let option_titles = self.options.iter().map(|(_, title)| *title).collect::<Vec<_>>();
        let max_option_len = option_titles.iter().map(|title| title.len()).max().unwrap_or(0) as u16;

        // Pad option titles so the highlight bar has an even width
        let option_titles = option_titles
            .into_iter()
            .map(|title| format!("  {title:<width$}  ", width = max_option_len as usize))
            .collect::<Vec<_>>();

        let [option_area] = Layout::horizontal(vec![Constraint::Length(max_option_len + (2 * 2))])
            .flex(layout::Flex::SpaceAround)
            .areas(option_area);

        let lines = option_titles
            .iter()
            .enumerate()
            .map(|(index, title)| {
                Line::from(title.as_str()).style({
                    if index == self.selected_option_index {
                        Style::default().bg(Color::Cyan).fg(Color::Black)
                    } else {
                        Style::default()
                    }
                })
            })
            .collect::<Vec<_>>();
        // Insert empty lines between options
        let lines = {
            let len = lines.len();
            let mut new_lines = vec![];
            for (index, line) in lines.into_iter().enumerate() {
                new_lines.push(line);
                if index < len - 1 {
                    new_lines.push(Line::from(""));
                }
            }
            new_lines
        };

        let paragraph = Paragraph::new(lines).style(Style::default().fg(Color::White)).alignment(Alignment::Left);
        f.render_widget(paragraph, option_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut page = HomePage::new();
        page.up();
        assert_eq!(page.selected_option_index, 0);

        page.down();
        page.down();
        page.down();
        assert_eq!(page.selected_option_index, 2);
    }

    #[test]
    fn test_select_emits_routing_action() -> Result<()> {
        let mut page = HomePage::new();
        assert_eq!(page.update(Action::Home(HomeAction::Select))?, Some(Action::StartRound));

        page.update(Action::Home(HomeAction::Down))?;
        assert_eq!(page.update(Action::Home(HomeAction::Select))?, Some(Action::ShowScores));

        page.update(Action::Home(HomeAction::Down))?;
        assert_eq!(page.update(Action::Home(HomeAction::Select))?, Some(Action::Quit));
        Ok(())
    }

    #[test]
    fn test_digit_shortcuts() -> Result<()> {
        use crossterm::event::KeyModifiers;

        let mut page = HomePage::new();
        let key = KeyEvent::new(KeyCode::Char('2'), KeyModifiers::empty());
        assert_eq!(page.handle_key_events(key)?, Some(Action::ShowScores));
        Ok(())
    }
}
