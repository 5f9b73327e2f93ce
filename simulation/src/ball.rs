use crate::config::BallConfig;
use crate::events::Wall;
use crate::geometry::{intersects, Rect};
use crate::paddle::Paddle;
use cgmath::Vector2;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Ball {
    pub position: Vector2<f32>,
    pub velocity: Vector2<f32>,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
}

impl Ball {
    pub fn new(config: &BallConfig) -> Self {
        Ball {
            position: Vector2::new(config.x, config.y),
            velocity: Vector2::new(0.0, 0.0),
            speed: config.speed,
            width: config.width,
            height: config.height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.position, self.width, self.height)
    }

    /// Bounding box after the pending velocity is applied.
    pub fn projected_rect(&self) -> Rect {
        self.rect().translated(self.velocity)
    }

    pub fn center_x(&self) -> f32 {
        self.position.x + self.width / 2.0
    }

    pub fn move_by_velocity(&mut self) {
        self.position += self.velocity;
    }

    /// Sends the ball upward with a random whole-number horizontal component in
    /// `[-speed, speed]`.
    pub fn launch<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let limit = self.speed.floor() as i32;
        let dx = rng.gen_range(-limit..=limit);

        self.velocity = Vector2::new(dx as f32, -self.speed);
        debug!("ball launched with velocity ({}, {})", dx, -self.speed);
    }

    pub fn collide(&self, rect: &Rect) -> bool {
        intersects(&self.projected_rect(), rect)
    }

    pub fn bounce_off_block(&mut self) {
        self.velocity.y = -self.velocity.y;
    }

    pub fn bounce_off_paddle(&mut self, paddle: &Paddle) {
        if paddle.velocity != 0.0 {
            self.position.x += paddle.velocity;
        }

        if self.velocity.y > 0.0 {
            self.velocity.y = -self.speed;
            // A ball clipping a corner has its centre past the paddle's edge.
            let offset = paddle.touch_offset(self.center_x()).clamp(-1.0, 1.0);
            self.velocity.x = self.speed * offset;
        }
    }

    /// Resolves at most one world edge per call, checked left, right, top, bottom.
    ///
    /// Side walls and the ceiling clamp the ball back inside and send it away at full
    /// speed. The floor is not clamped: hitting it loses the game.
    pub fn collide_world_bounds(&mut self, world_width: f32, world_height: f32) -> Option<Wall> {
        let projected = self.projected_rect();

        if projected.left() < 0.0 {
            self.position.x = 0.0;
            self.velocity.x = self.speed;
            Some(Wall::Left)
        } else if projected.right() > world_width {
            self.position.x = world_width - self.width;
            self.velocity.x = -self.speed;
            Some(Wall::Right)
        } else if projected.top() < 0.0 {
            self.position.y = 0.0;
            self.velocity.y = self.speed;
            Some(Wall::Top)
        } else if projected.bottom() > world_height {
            Some(Wall::Bottom)
        } else {
            None
        }
    }
}
