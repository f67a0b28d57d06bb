use ratatui::style::Color;

// Gameplay runs in a fixed logical space; rendering projects it onto the
// terminal canvas. All units below are logical pixels.
pub const LOGICAL_WIDTH: f32 = 400.0;
pub const LOGICAL_HEIGHT: f32 = 600.0;

pub const BIRD_X: f32 = 100.0;
pub const BIRD_WIDTH: f32 = 34.0;
pub const BIRD_HEIGHT: f32 = 24.0;

pub const PIPE_WIDTH: f32 = 52.0;
pub const GAP_HEIGHT: f32 = 200.0;
pub const GAP_TOP_MIN: f32 = 150.0;

pub const SPAWN_INTERVAL_MS: u64 = 2000;

pub const BIRD_TEXT: &str = r#"
 __
(o)>
"#;
pub const BIRD_COLOR: Color = Color::Yellow;
pub const PIPE_COLOR: Color = Color::LightGreen;
pub const SCORE_COLOR: Color = Color::Yellow;
