use serde::{Deserialize, Serialize};

/// Keys the game reacts to; anything else arrives as `Other`.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Fire,
    Left,
    Right,
    Other,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    KeyDown(Key),
    /// Any released key halts the paddle, not just the direction key that started it.
    KeyUp(Key),
}
