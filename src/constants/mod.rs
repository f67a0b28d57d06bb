pub mod backdrop;
pub mod game;

/// Outer frame of the playfield, in terminal cells. The bordered area leaves
/// a 60x40 canvas for the game itself.
pub const WIDTH: u16 = 62;
pub const HEIGHT: u16 = 42;

pub const TITLE_TEXT: &str = r#"
  ______ _
 |  ____| |
 | |__  | | __ _ _ __  _ __  _   _
 |  __| | |/ _` | '_ \| '_ \| | | |
 | |    | | (_| | |_) | |_) | |_| |
 |_|    |_|\__,_| .__/| .__/ \__, |
                | |   | |     __/ |
                |_|   |_|    |___/
"#;
