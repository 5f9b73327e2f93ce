//! Brick breaker simulation.
//!
//! Everything that decides what happens in a frame lives here: geometry, the ball, the
//! paddle, the block grid and the state machine that ties them together. Rendering, audio
//! playback and keyboard polling are supplied by the host through [`game_loop::Frontend`]
//! and [`game_loop::FrameScheduler`].

pub mod assets;
pub mod ball;
pub mod blocks;
pub mod config;
pub mod constants;
pub mod events;
pub mod game_loop;
pub mod geometry;
pub mod input;
pub mod paddle;
pub mod state;

pub use assets::{preload, AssetError, AssetKey, LoadedAsset, LoadedAssets, SoundCue, SpriteId};
pub use ball::Ball;
pub use blocks::{create_blocks, Block};
pub use config::{ConfigError, GameConfig};
pub use events::{GameEvent, Wall};
pub use game_loop::{run, FrameScheduler, Frontend};
pub use geometry::{intersects, Rect};
pub use input::{InputEvent, Key};
pub use paddle::{BallHold, Paddle};
pub use state::{GameState, Outcome, Phase};
