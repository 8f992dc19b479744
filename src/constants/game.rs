use ratatui::style::Color;

// Physics, in world pixels per simulation step. One step corresponds to one
// animation frame at the default tick rate of 60 per second.
pub const GRAVITY: f32 = 0.25;
pub const JUMP_IMPULSE: f32 = -4.6;
pub const PIPE_SPEED: f32 = 2.0;

pub const BIRD_SIZE: f32 = 30.0;
pub const BIRD_X: f32 = 10.0;

pub const PIPE_WIDTH: f32 = 50.0;
pub const PIPE_GAP: f32 = 120.0;
// A new pipe spawns once the trailing one has scrolled this far in from the
// right edge.
pub const SPAWN_THRESHOLD: f32 = 200.0;

// World pixels covered by one terminal cell. Cells are roughly twice as tall
// as they are wide, so the vertical scale doubles the horizontal one.
pub const CELL_WIDTH: f32 = 10.0;
pub const CELL_HEIGHT: f32 = 20.0;

// Fallbacks when the `styles` config section is missing an entry
pub const SKY_COLOR: Color = Color::Cyan;
pub const BIRD_COLOR: Color = Color::Yellow;
pub const PIPE_COLOR: Color = Color::Green;
pub const TEXT_COLOR: Color = Color::White;

pub const START_HINT: &str = "Press Space or click to start";
pub const GAME_OVER_TEXT: &str = "Game Over!";
pub const RESTART_HINT: &str = "Press Space or click to restart";
