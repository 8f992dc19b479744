use crate::constants::game::{BIRD_SIZE, GRAVITY, JUMP_IMPULSE};

/// Vertical state of the player. The horizontal position is fixed at
/// `BIRD_X`; only gravity and flap impulses move the bird.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub y: f32,
    pub velocity: f32,
}

impl Bird {
    pub fn new(y: f32) -> Self {
        Bird { y, velocity: 0.0 }
    }

    /// One gravity step: accelerate, then translate, clamped to the world.
    pub fn fall(&mut self, height: f32) {
        self.velocity += GRAVITY;
        self.y = (self.y + self.velocity).clamp(0.0, height);
    }

    pub fn flap(&mut self) {
        self.velocity = JUMP_IMPULSE;
    }

    /// The bird touched the ceiling or the floor.
    pub fn out_of_bounds(&self, height: f32) -> bool {
        self.y <= 0.0 || self.y >= height - BIRD_SIZE
    }
}
