pub mod game;
pub mod home;

use serde::{Deserialize, Serialize};
use strum::Display;

pub use crate::action::game::GameAction;
pub use crate::action::home::HomeAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Refresh,
    Error(String),
    ToggleShowHelp,
    // Page routing
    StartRound,
    RoundOver(u32),
    ShowScores,
    ShowHome,
    // Page actions
    Home(HomeAction),
    Game(GameAction),
}

impl Action {
    /// Human-readable name, unwrapping page actions to their own label.
    pub fn string(&self) -> String {
        match self {
            Action::Home(action) => action.to_string(),
            Action::Game(action) => action.to_string(),
            action => action.to_string(),
        }
    }
}
