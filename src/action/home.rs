use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Display, Deserialize)]
pub enum HomeAction {
    Up,
    Down,
    Select,
}
