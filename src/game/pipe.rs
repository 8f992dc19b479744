use rand::Rng;

use crate::constants::game::{PIPE_GAP, PIPE_SPEED, PIPE_WIDTH};

/// One obstacle: a pipe pair with a passable gap band
/// `[gap_y, gap_y + PIPE_GAP)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f32,
    pub gap_y: f32,
    /// Set once the bird has been counted for this pipe, so a crossing that
    /// spans several steps still scores a single point.
    pub scored: bool,
}

impl Pipe {
    /// Spawn at the right edge with a uniformly random gap offset.
    pub fn spawn(rng: &mut impl Rng, width: f32, height: f32) -> Self {
        Pipe { x: width, gap_y: rng.gen_range(0.0..height - PIPE_GAP), scored: false }
    }

    pub fn advance(&mut self) {
        self.x -= PIPE_SPEED;
    }

    /// The right edge has scrolled past the left boundary.
    pub fn off_screen(&self) -> bool {
        self.x + PIPE_WIDTH <= 0.0
    }

    /// Horizontal overlap with the bird's fixed slot `[left, right)`.
    pub fn overlaps(&self, left: f32, right: f32) -> bool {
        right > self.x && left < self.x + PIPE_WIDTH
    }

    /// The vertical extent `[top, bottom)` lies fully inside the gap band.
    pub fn gap_contains(&self, top: f32, bottom: f32) -> bool {
        top >= self.gap_y && bottom <= self.gap_y + PIPE_GAP
    }
}
