use crate::ball::Ball;
use crate::config::PaddleConfig;
use crate::geometry::Rect;
use crate::input::Key;
use cgmath::Vector2;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallHold {
    Held,
    Released,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Paddle {
    pub position: Vector2<f32>,
    /// Horizontal velocity; the paddle never moves vertically.
    pub velocity: f32,
    pub speed: f32,
    pub width: f32,
    pub height: f32,
    pub hold: BallHold,
}

impl Paddle {
    pub fn new(config: &PaddleConfig) -> Self {
        Paddle {
            position: Vector2::new(config.x, config.y),
            velocity: 0.0,
            speed: config.speed,
            width: config.width,
            height: config.height,
            hold: BallHold::Held,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::at(self.position, self.width, self.height)
    }

    pub fn is_holding_ball(&self) -> bool {
        self.hold == BallHold::Held
    }

    pub fn move_by_velocity(&mut self, ball: &mut Ball) {
        if self.velocity != 0.0 {
            self.position.x += self.velocity;

            if self.is_holding_ball() {
                ball.position.x += self.velocity;
            }
        }
    }

    pub fn start_moving(&mut self, key: Key) {
        match key {
            Key::Left => self.velocity = -self.speed,
            Key::Right => self.velocity = self.speed,
            _ => {}
        }
    }

    pub fn stop_moving(&mut self) {
        self.velocity = 0.0;
    }

    /// Launches a held ball and lets go of it. Does nothing once the ball is in flight.
    pub fn fire<R: Rng + ?Sized>(&mut self, ball: &mut Ball, rng: &mut R) {
        if self.is_holding_ball() {
            ball.launch(rng);
            self.hold = BallHold::Released;
            debug!("paddle released the ball at x = {}", ball.position.x);
        }
    }

    /// Maps a horizontal strike position to `[-1, 1]`: -1 at the left edge, 0 at the
    /// centre, 1 at the right edge.
    pub fn touch_offset(&self, strike_x: f32) -> f32 {
        let diff = (self.position.x + self.width) - strike_x;
        let offset = self.width - diff;

        2.0 * offset / self.width - 1.0
    }

    /// Stops the paddle if its next step would leave `[0, world_width]`. It is not
    /// clamped to the edge.
    pub fn collide_world_bounds(&mut self, world_width: f32) {
        let left = self.position.x + self.velocity;
        let right = left + self.width;

        if left < 0.0 || right > world_width {
            self.velocity = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BallConfig;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn paddle_and_ball() -> (Paddle, Ball) {
        (
            Paddle::new(&PaddleConfig::default()),
            Ball::new(&BallConfig::default()),
        )
    }

    #[test]
    fn touch_offset_at_edges_and_centre() {
        let paddle = Paddle::new(&PaddleConfig::default());
        assert_eq!(paddle.touch_offset(245.0), -1.0);
        assert_eq!(paddle.touch_offset(395.0), 1.0);
        assert_eq!(paddle.touch_offset(320.0), 0.0);
    }

    #[test]
    fn start_moving_follows_direction_keys() {
        let mut paddle = Paddle::new(&PaddleConfig::default());

        paddle.start_moving(Key::Left);
        assert_eq!(paddle.velocity, -6.0);

        paddle.start_moving(Key::Right);
        assert_eq!(paddle.velocity, 6.0);

        paddle.start_moving(Key::Fire);
        assert_eq!(paddle.velocity, 6.0);
        paddle.start_moving(Key::Other);
        assert_eq!(paddle.velocity, 6.0);
    }

    #[test]
    fn stop_moving_is_idempotent() {
        let mut paddle = Paddle::new(&PaddleConfig::default());
        paddle.start_moving(Key::Right);

        paddle.stop_moving();
        assert_eq!(paddle.velocity, 0.0);
        paddle.stop_moving();
        assert_eq!(paddle.velocity, 0.0);
    }

    #[test]
    fn held_ball_travels_with_paddle() {
        let (mut paddle, mut ball) = paddle_and_ball();
        paddle.start_moving(Key::Left);
        paddle.move_by_velocity(&mut ball);

        assert_eq!(paddle.position.x, 239.0);
        assert_eq!(ball.position.x, 304.0);
    }

    #[test]
    fn released_ball_stays_put_when_paddle_moves() {
        let (mut paddle, mut ball) = paddle_and_ball();
        let mut rng = StdRng::seed_from_u64(1);
        paddle.fire(&mut ball, &mut rng);

        paddle.start_moving(Key::Right);
        paddle.move_by_velocity(&mut ball);

        assert_eq!(paddle.position.x, 251.0);
        assert_eq!(ball.position.x, 310.0);
    }

    #[test]
    fn fire_releases_ball_once() {
        let (mut paddle, mut ball) = paddle_and_ball();
        let mut rng = StdRng::seed_from_u64(3);

        paddle.fire(&mut ball, &mut rng);
        assert_eq!(paddle.hold, BallHold::Released);
        assert_eq!(ball.velocity.y, -3.0);

        let velocity = Vector2::new(2.0, 3.0);
        ball.velocity = velocity;
        paddle.fire(&mut ball, &mut rng);
        assert_eq!(ball.velocity, velocity);
    }

    #[test]
    fn wall_stops_paddle_without_clamping() {
        let mut paddle = Paddle::new(&PaddleConfig::default());
        paddle.position.x = 3.0;
        paddle.start_moving(Key::Left);

        paddle.collide_world_bounds(640.0);
        assert_eq!(paddle.velocity, 0.0);
        assert_eq!(paddle.position.x, 3.0);

        paddle.position.x = 488.0;
        paddle.start_moving(Key::Right);
        paddle.collide_world_bounds(640.0);
        assert_eq!(paddle.velocity, 0.0);
    }

    #[test]
    fn paddle_moves_freely_inside_world() {
        let mut paddle = Paddle::new(&PaddleConfig::default());
        paddle.start_moving(Key::Right);
        paddle.collide_world_bounds(640.0);
        assert_eq!(paddle.velocity, 6.0);
    }

    proptest! {
        #[test]
        fn touch_offset_stays_in_unit_range(strike in 245.0f32..=395.0) {
            let paddle = Paddle::new(&PaddleConfig::default());
            let offset = paddle.touch_offset(strike);
            prop_assert!((-1.0 - 1e-5..=1.0 + 1e-5).contains(&offset));
        }

        #[test]
        fn paddle_never_leaves_world(moves in proptest::collection::vec(any::<bool>(), 0..400)) {
            let (mut paddle, mut ball) = paddle_and_ball();

            for right in moves {
                paddle.start_moving(if right { Key::Right } else { Key::Left });
                paddle.collide_world_bounds(640.0);
                paddle.move_by_velocity(&mut ball);

                prop_assert!(paddle.position.x >= 0.0);
                prop_assert!(paddle.position.x + paddle.width <= 640.0);
            }
        }
    }
}
