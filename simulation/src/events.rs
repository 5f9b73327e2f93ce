use crate::assets::SoundCue;
use crate::state::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

/// Something that happened during a frame which the host may want to react to.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    BlockDestroyed { index: usize, score: usize },
    PaddleHit,
    WallHit(Wall),
    Ended(Outcome),
}

impl GameEvent {
    pub fn cue(&self) -> Option<SoundCue> {
        match self {
            GameEvent::BlockDestroyed { .. } | GameEvent::PaddleHit => Some(SoundCue::Bump),
            GameEvent::WallHit(Wall::Bottom) => None,
            GameEvent::WallHit(_) => Some(SoundCue::Bump),
            GameEvent::Ended(Outcome::Won) => Some(SoundCue::Win),
            GameEvent::Ended(Outcome::Lost) => Some(SoundCue::ToLose),
        }
    }
}
