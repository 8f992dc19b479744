mod game;

use serde::{Deserialize, Serialize};
use strum::Display;

pub use crate::action::game::GameAction;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Display, Deserialize, Default)]
pub enum ActionState {
    #[default]
    Start,
    Repeat,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Display, Deserialize)]
pub enum Command {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    ToggleShowHelp,
    // Page commands
    Game(GameAction),
}

impl Command {
    pub fn string(&self) -> String {
        match self {
            Command::Game(command) => command.to_string(),
            _ => self.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub command: Command,
    pub state: ActionState,
}

#[macro_export]
macro_rules! act {
    ($command:expr) => {
        $crate::action::Action { command: $command, state: $crate::action::ActionState::default() }
    };
    ($command:expr, $state:expr) => {
        $crate::action::Action { command: $command, state: $state }
    };
}

pub use crate::act;
