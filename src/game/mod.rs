mod bird;
mod pipe;

use std::collections::VecDeque;

use rand::Rng;

pub use crate::game::bird::Bird;
pub use crate::game::pipe::Pipe;
use crate::constants::game::{BIRD_SIZE, BIRD_X, SPAWN_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    GameOver,
}

/// The whole mutable state of one play session. All transitions go through
/// `step` and `input`; rendering only reads.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub width: f32,
    pub height: f32,
    pub bird: Bird,
    pub pipes: VecDeque<Pipe>,
    pub score: u32,
    pub phase: Phase,
}

impl GameState {
    /// The world is sized once at mount. The bird starts centered and a
    /// single pipe is seeded at the right edge.
    pub fn new(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        let mut pipes = VecDeque::new();
        pipes.push_back(Pipe::spawn(rng, width, height));
        GameState {
            width,
            height,
            bird: Bird::new(height / 2.0),
            pipes,
            score: 0,
            phase: Phase::NotStarted,
        }
    }

    /// One simulation step, corresponding to one animation frame.
    pub fn step(&mut self, rng: &mut impl Rng) {
        if self.phase != Phase::Running {
            return;
        }

        self.bird.fall(self.height);

        for pipe in self.pipes.iter_mut() {
            pipe.advance();
        }
        self.pipes.retain(|pipe| !pipe.off_screen());

        // An empty list respawns immediately; in worlds narrower than the
        // threshold plus the pipe width, pipes drop off before the trailing
        // one can qualify.
        if self.pipes.back().map_or(true, |last| last.x < self.width - SPAWN_THRESHOLD) {
            self.pipes.push_back(Pipe::spawn(rng, self.width, self.height));
        }

        let top = self.bird.y;
        let bottom = self.bird.y + BIRD_SIZE;
        for pipe in self.pipes.iter_mut() {
            if !pipe.overlaps(BIRD_X, BIRD_X + BIRD_SIZE) {
                continue;
            }
            if pipe.gap_contains(top, bottom) {
                if !pipe.scored {
                    pipe.scored = true;
                    self.score += 1;
                }
            } else {
                self.phase = Phase::GameOver;
            }
        }

        if self.bird.out_of_bounds(self.height) {
            self.phase = Phase::GameOver;
        }
    }

    /// The single input transition: start or restart when the session is not
    /// running, flap otherwise.
    pub fn input(&mut self, rng: &mut impl Rng) {
        match self.phase {
            Phase::NotStarted | Phase::GameOver => self.reset(rng),
            Phase::Running => self.bird.flap(),
        }
    }

    fn reset(&mut self, rng: &mut impl Rng) {
        self.bird = Bird::new(self.height / 2.0);
        self.pipes.clear();
        self.pipes.push_back(Pipe::spawn(rng, self.width, self.height));
        self.score = 0;
        self.phase = Phase::Running;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::constants::game::{GRAVITY, JUMP_IMPULSE, PIPE_GAP, PIPE_SPEED, PIPE_WIDTH};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn running(width: f32, height: f32) -> GameState {
        let mut rng = rng();
        let mut game = GameState::new(&mut rng, width, height);
        game.input(&mut rng);
        game
    }

    #[test]
    fn starts_centered_with_one_seeded_pipe() {
        let mut rng = rng();
        let game = GameState::new(&mut rng, 400.0, 600.0);
        assert_eq!(game.phase, Phase::NotStarted);
        assert_eq!(game.bird.y, 300.0);
        assert_eq!(game.bird.velocity, 0.0);
        assert_eq!(game.score, 0);
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.pipes[0].x, 400.0);
        assert!(game.pipes[0].gap_y >= 0.0 && game.pipes[0].gap_y < 600.0 - PIPE_GAP);
    }

    #[test]
    fn steps_are_ignored_until_the_run_starts() {
        let mut rng = rng();
        let mut game = GameState::new(&mut rng, 400.0, 600.0);
        let before = game.clone();
        game.step(&mut rng);
        assert_eq!(game, before);
    }

    #[test]
    fn first_input_starts_the_run() {
        let game = running(400.0, 600.0);
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.bird.y, 300.0);
        assert_eq!(game.pipes.len(), 1);
    }

    #[test]
    fn flap_sets_the_jump_impulse_and_gravity_decays_it() {
        let mut game = running(400.0, 600.0);
        let mut rng = rng();
        game.input(&mut rng);
        assert_eq!(game.bird.velocity, JUMP_IMPULSE);
        game.step(&mut rng);
        assert_eq!(game.bird.velocity, JUMP_IMPULSE + GRAVITY);
        assert_eq!(game.bird.y, 300.0 + (JUMP_IMPULSE + GRAVITY));
    }

    #[test]
    fn bird_stays_clamped_and_dies_at_the_floor() {
        let mut game = running(400.0, 600.0);
        let mut rng = rng();
        // Park the pipe outside the bird's slot so only the boundary matters.
        game.pipes[0].x = 1000.0;
        for _ in 0..1000 {
            game.step(&mut rng);
            assert!(game.bird.y >= 0.0 && game.bird.y <= 600.0);
            if game.phase == Phase::GameOver {
                break;
            }
        }
        assert_eq!(game.phase, Phase::GameOver);
        assert!(game.bird.y >= 600.0 - BIRD_SIZE);
    }

    #[test]
    fn ceiling_ends_the_run_regardless_of_pipes() {
        let mut game = running(400.0, 600.0);
        let mut rng = rng();
        game.pipes[0].x = 1000.0;
        game.bird.y = 1.0;
        game.bird.velocity = -10.0;
        game.step(&mut rng);
        assert_eq!(game.bird.y, 0.0);
        assert_eq!(game.phase, Phase::GameOver);
    }

    #[test]
    fn spawns_exactly_one_pipe_when_the_trailing_one_crosses_the_threshold() {
        let mut game = running(400.0, 600.0);
        let mut rng = rng();
        game.pipes[0].x = SPAWN_THRESHOLD + PIPE_SPEED / 2.0;
        game.step(&mut rng);
        assert_eq!(game.pipes.len(), 2);
        assert_eq!(game.pipes[1].x, 400.0);
        // The fresh pipe is now the trailing one, so no further spawn happens
        // until it crosses the threshold itself.
        game.step(&mut rng);
        assert_eq!(game.pipes.len(), 2);
    }

    #[test]
    fn pipes_scroll_left_and_drop_off_the_left_edge() {
        let mut game = running(400.0, 600.0);
        let mut rng = rng();
        game.pipes[0].x = -PIPE_WIDTH + PIPE_SPEED;
        game.pipes[0].gap_y = 100.0;
        game.step(&mut rng);
        // The old pipe is gone and a fresh one takes its place at the edge.
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.pipes[0].x, 400.0);
        assert!(!game.pipes[0].scored);
    }

    #[test]
    fn narrow_worlds_never_run_out_of_pipes() {
        // Too narrow for the trailing pipe to cross the spawn threshold
        // before it drops off, so the respawn must come from the empty list.
        let mut game = running(140.0, 600.0);
        let mut rng = rng();
        game.pipes[0].x = -PIPE_WIDTH + PIPE_SPEED;
        game.pipes[0].gap_y = 100.0;
        game.bird.velocity = -GRAVITY;
        game.step(&mut rng);
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.pipes[0].x, 140.0);
        assert_eq!(game.phase, Phase::Running);
    }

    #[test]
    fn passing_through_the_gap_scores_once() {
        let mut game = running(400.0, 600.0);
        let mut rng = rng();
        game.pipes[0].x = BIRD_X + BIRD_SIZE + 1.0;
        game.pipes[0].gap_y = 250.0;
        game.bird.y = 300.0;
        game.bird.velocity = 0.0;
        game.step(&mut rng);
        assert_eq!(game.score, 1);
        assert_eq!(game.phase, Phase::Running);
        // Still inside the band on the next step, but already counted.
        game.step(&mut rng);
        assert_eq!(game.score, 1);
        assert_eq!(game.phase, Phase::Running);
    }

    #[test]
    fn hitting_a_pipe_ends_the_run() {
        let mut game = running(400.0, 600.0);
        let mut rng = rng();
        game.pipes[0].x = BIRD_X + BIRD_SIZE / 2.0;
        game.pipes[0].gap_y = 250.0;
        game.bird.y = 100.0;
        game.bird.velocity = 0.0;
        game.step(&mut rng);
        assert_eq!(game.phase, Phase::GameOver);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn restart_resets_score_pipes_and_bird() {
        let mut game = running(400.0, 600.0);
        let mut rng = rng();
        game.score = 7;
        game.bird.y = 12.0;
        game.bird.velocity = 3.5;
        game.phase = Phase::GameOver;
        game.pipes.push_back(Pipe { x: 100.0, gap_y: 50.0, scored: true });
        game.input(&mut rng);
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.score, 0);
        assert_eq!(game.bird.y, 300.0);
        assert_eq!(game.bird.velocity, 0.0);
        assert_eq!(game.pipes.len(), 1);
        assert_eq!(game.pipes[0].x, 400.0);
        assert!(!game.pipes[0].scored);
    }
}
