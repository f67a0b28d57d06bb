use crate::constants::game;
use crate::pages::game::hitbox::Hitbox;

/// The player-controlled body. Horizontal position never changes; gravity
/// and flap impulses only move it vertically.
#[derive(Debug, Clone)]
pub struct Bird {
    x: f32,
    y: f32,
    velocity: f32,
}

impl Bird {
    pub fn new(x: f32, y: f32) -> Self {
        Bird { x, y, velocity: 0.0 }
    }

    /// Sets the vertical velocity to `impulse` outright. Mashing the key does
    /// not stack.
    pub fn flap(&mut self, impulse: f32) {
        self.velocity = impulse;
    }

    /// One step of symplectic Euler integration.
    pub fn tick(&mut self, gravity: f32) {
        self.velocity += gravity;
        self.y += self.velocity;
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn hitbox(&self) -> Hitbox {
        Hitbox::new(self.x, self.y, game::BIRD_WIDTH, game::BIRD_HEIGHT)
    }
}
