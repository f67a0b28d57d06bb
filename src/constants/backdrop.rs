use ratatui::style::Color;

/// Rounds switch from the day to the night backdrop after this much
/// wall-clock time.
pub const NIGHT_AFTER_MS: u64 = 10_000;

pub const STAR_CHARS: [char; 3] = ['✦', '·', '+'];
pub const STAR_DENSITY: f32 = 0.04;
pub const STAR_COLOR: Color = Color::DarkGray;

pub const CLOUD_COLOR: Color = Color::White;
pub const CLOUD_TEXT: &str = r#"
   .--.
 .(    ).
(___.__)__)
"#;
