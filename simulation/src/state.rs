use crate::ball::Ball;
use crate::blocks::{create_blocks, Block};
use crate::config::{GameConfig, WorldConfig};
use crate::events::{GameEvent, Wall};
use crate::input::{InputEvent, Key};
use crate::paddle::Paddle;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Playing,
    /// Terminal; a new session needs a fresh `GameState`.
    Ended(Outcome),
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub world: WorldConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: Vec<Block>,
    phase: Phase,
    score: usize,
    rng: StdRng,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Same as [`GameState::new`] but with reproducible ball launches.
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, rng: StdRng) -> Self {
        GameState {
            world: config.world,
            ball: Ball::new(&config.ball),
            paddle: Paddle::new(&config.paddle),
            blocks: create_blocks(&config.grid),
            phase: Phase::Loading,
            score: 0,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn active_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|block| block.active)
    }

    /// Called once every resource has signalled ready.
    pub fn start(&mut self) {
        if self.phase == Phase::Loading {
            self.phase = Phase::Playing;
            info!("game started with {} blocks", self.blocks.len());
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        if !self.is_running() {
            return;
        }

        match event {
            InputEvent::KeyDown(Key::Fire) => self.paddle.fire(&mut self.ball, &mut self.rng),
            InputEvent::KeyDown(key) => self.paddle.start_moving(key),
            InputEvent::KeyUp(_) => self.paddle.stop_moving(),
        }
    }

    /// Advances one frame.
    ///
    /// Collisions are all resolved against the pending velocities before anything moves:
    /// blocks, paddle, ball against the world, paddle against the world, then paddle and
    /// ball movement.
    pub fn update(&mut self) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if !self.is_running() {
            return events;
        }

        self.collide_blocks(&mut events);

        if self.ball.collide(&self.paddle.rect()) {
            self.ball.bounce_off_paddle(&self.paddle);
            events.push(GameEvent::PaddleHit);
        }

        if let Some(wall) = self
            .ball
            .collide_world_bounds(self.world.width, self.world.height)
        {
            events.push(GameEvent::WallHit(wall));

            if wall == Wall::Bottom {
                self.end(Outcome::Lost, &mut events);
            }
        }

        self.paddle.collide_world_bounds(self.world.width);
        self.paddle.move_by_velocity(&mut self.ball);
        self.ball.move_by_velocity();

        events
    }

    fn collide_blocks(&mut self, events: &mut Vec<GameEvent>) {
        for index in 0..self.blocks.len() {
            let block = &mut self.blocks[index];
            if !block.active || !self.ball.collide(&block.rect()) {
                continue;
            }

            block.deactivate();
            self.ball.bounce_off_block();
            self.score += 1;
            debug!("block {} destroyed, score {}", index, self.score);
            events.push(GameEvent::BlockDestroyed {
                index,
                score: self.score,
            });

            if self.score >= self.blocks.len() {
                self.end(Outcome::Won, events);
            }
        }
    }

    fn end(&mut self, outcome: Outcome, events: &mut Vec<GameEvent>) {
        if self.phase != Phase::Playing {
            return;
        }

        self.phase = Phase::Ended(outcome);
        info!("game ended: {:?} with score {}", outcome, self.score);
        events.push(GameEvent::Ended(outcome));
    }
}
