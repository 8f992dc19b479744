use std::collections::HashMap;

use color_eyre::eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};
use log::info;
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc::UnboundedSender;

use super::{Page, PageId};
use crate::{
    action::{act, Action, ActionState, Command, GameAction},
    config::{Config, PageKeyBindings},
    constants::game,
    game::{GameState, Phase},
};

pub struct GamePage {
    pub action_tx: Option<UnboundedSender<Action>>,
    pub keymap: PageKeyBindings,
    styles: HashMap<String, Style>,
    game: Option<GameState>,
}

impl GamePage {
    pub fn new() -> Self {
        GamePage {
            action_tx: None,
            keymap: PageKeyBindings::default(),
            styles: HashMap::new(),
            game: None,
        }
    }

    fn style(&self, name: &str, fallback: Style) -> Style {
        self.styles.get(name).copied().unwrap_or(fallback)
    }

    /// Size the world from the first visible area. The world keeps these
    /// dimensions afterwards; drawing clips to the live area instead.
    fn mount(&mut self, area: Rect) {
        let width = area.width as f32 * game::CELL_WIDTH;
        let height = area.height as f32 * game::CELL_HEIGHT;
        // A world shorter than the gap cannot seed a pipe
        if width <= game::PIPE_WIDTH || height <= game::PIPE_GAP {
            return;
        }
        self.game = Some(GameState::new(&mut rand::thread_rng(), width, height));
    }

    fn draw_world(&self, f: &mut Frame<'_>, area: Rect, state: &GameState) {
        f.render_widget(Block::default().style(self.style("sky", Style::default().bg(game::SKY_COLOR))), area);

        let bird_style = self.style("bird", Style::default().bg(game::BIRD_COLOR));
        fill_rect(f, area, game::BIRD_X, state.bird.y, game::BIRD_SIZE, game::BIRD_SIZE, bird_style);

        let pipe_style = self.style("pipe", Style::default().bg(game::PIPE_COLOR));
        for pipe in &state.pipes {
            fill_rect(f, area, pipe.x, 0.0, game::PIPE_WIDTH, pipe.gap_y, pipe_style);
            let gap_end = pipe.gap_y + game::PIPE_GAP;
            fill_rect(f, area, pipe.x, gap_end, game::PIPE_WIDTH, state.height - gap_end, pipe_style);
        }
    }

    fn draw_score(&self, f: &mut Frame<'_>, area: Rect, state: &GameState) {
        let line = Line::from(format!("Score: {}", state.score))
            .style(self.style("score", Style::default().fg(game::TEXT_COLOR).bold()));
        let rect = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(1),
            height: area.height.min(1),
        };
        f.render_widget(Paragraph::new(line), rect);
    }

    fn draw_overlay(&self, f: &mut Frame<'_>, area: Rect, lines: Vec<&str>) {
        let style = self.style("overlay", Style::default().fg(game::TEXT_COLOR).bold());
        let text: Vec<Line> = lines.into_iter().map(Line::from).collect();
        let height = text.len() as u16;
        let [rect] = Layout::vertical([Constraint::Length(height)]).flex(layout::Flex::Center).areas(area);
        f.render_widget(Paragraph::new(text).style(style).alignment(Alignment::Center), rect);
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

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        if let Some(styles) = config.styles.get(&PageId::Game) {
            self.styles = styles.clone();
        }
        Ok(())
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        // Any button press anywhere on the surface means flap
        match mouse.kind {
            MouseEventKind::Down(_) => Ok(Some(act!(Command::Game(GameAction::Flap)))),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let Some(state) = self.game.as_mut() else {
            return Ok(None);
        };

        match action.command {
            Command::Game(GameAction::Flap) if action.state == ActionState::Start => {
                let phase = state.phase;
                state.input(&mut rand::thread_rng());
                if phase != Phase::Running {
                    info!("run started from {phase:?}");
                }
            },
            Command::Tick => {
                let phase = state.phase;
                state.step(&mut rand::thread_rng());
                if phase == Phase::Running && state.phase == Phase::GameOver {
                    info!("game over at score {}", state.score);
                }
            },
            _ => {},
        }

        Ok(None)
    }

    fn draw(&mut self, f: &mut Frame<'_>, area: Rect) -> Result<()> {
        if self.game.is_none() {
            self.mount(area);
        }
        let Some(state) = self.game.as_ref() else {
            return Ok(());
        };

        self.draw_world(f, area, state);
        self.draw_score(f, area, state);

        match state.phase {
            Phase::NotStarted => self.draw_overlay(f, area, vec![game::START_HINT]),
            Phase::GameOver => {
                self.draw_overlay(f, area, vec![game::GAME_OVER_TEXT, "", game::RESTART_HINT])
            },
            Phase::Running => {},
        }

        Ok(())
    }
}

/// Project a world-pixel rectangle onto terminal cells within `area`,
/// clipped to it. Returns `None` when nothing remains visible.
fn project(area: Rect, x: f32, y: f32, width: f32, height: f32) -> Option<Rect> {
    let left = (x / game::CELL_WIDTH).round() as i32 + area.x as i32;
    let right = ((x + width) / game::CELL_WIDTH).round() as i32 + area.x as i32;
    let top = (y / game::CELL_HEIGHT).round() as i32 + area.y as i32;
    let bottom = ((y + height) / game::CELL_HEIGHT).round() as i32 + area.y as i32;

    let left = left.max(area.left() as i32);
    let right = right.min(area.right() as i32);
    let top = top.max(area.top() as i32);
    let bottom = bottom.min(area.bottom() as i32);

    if left >= right || top >= bottom {
        return None;
    }
    Some(Rect { x: left as u16, y: top as u16, width: (right - left) as u16, height: (bottom - top) as u16 })
}

fn fill_rect(f: &mut Frame<'_>, area: Rect, x: f32, y: f32, width: f32, height: f32, style: Style) {
    if let Some(rect) = project(area, x, y, width, height) {
        f.render_widget(Block::default().style(style), rect);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn project_maps_world_pixels_to_cells() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = project(area, 10.0, 300.0, 30.0, 30.0).unwrap();
        assert_eq!(rect, Rect::new(1, 15, 3, 2));
    }

    #[test]
    fn project_clips_to_the_area() {
        let area = Rect::new(0, 0, 80, 24);
        // Pipe half off the left edge
        let rect = project(area, -25.0, 0.0, 50.0, 480.0).unwrap();
        assert_eq!(rect, Rect::new(0, 0, 3, 24));
    }

    #[test]
    fn project_rejects_fully_offscreen_rects() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(project(area, -60.0, 0.0, 50.0, 480.0), None);
    }

    #[test]
    fn project_respects_the_area_offset() {
        let area = Rect::new(5, 3, 40, 20);
        let rect = project(area, 0.0, 0.0, 10.0, 20.0).unwrap();
        assert_eq!(rect, Rect::new(5, 3, 1, 1));
    }
}
