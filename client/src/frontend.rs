use crate::media::{Sounds, Sprites};
use cgmath::Vector2;
use raylib::prelude::{
    Color, KeyboardKey, RaylibDraw, RaylibHandle, RaylibThread, Rectangle, Texture2D,
};
use simulation::config::WorldConfig;
use simulation::constants::{SCORE_FONT_SIZE, SCORE_TEXT_X, SCORE_TEXT_Y};
use simulation::{FrameScheduler, Frontend, GameState, InputEvent, Key, Outcome, SoundCue};
use tracing::{debug, info};

const BACKGROUND_COLOR: Color = Color::new(255, 244, 234, 255);
const TEXT_COLOR: Color = Color::new(201, 104, 104, 255);

pub struct RaylibFrontend<'aud> {
    // Textures and sounds must be released before the window and audio device close.
    sprites: Sprites,
    sounds: Sounds<'aud>,
    world: WorldConfig,
    held_keys: Vec<KeyboardKey>,
    rl: RaylibHandle,
    thread: RaylibThread,
}

impl<'aud> RaylibFrontend<'aud> {
    pub fn new(
        rl: RaylibHandle,
        thread: RaylibThread,
        sprites: Sprites,
        sounds: Sounds<'aud>,
        world: WorldConfig,
    ) -> Self {
        RaylibFrontend {
            sprites,
            sounds,
            world,
            held_keys: Vec::new(),
            rl,
            thread,
        }
    }

    /// Blocks on an end-of-game screen. Returns `true` when the player asks for a new game,
    /// `false` when the window is closed instead.
    pub fn announce(&mut self, outcome: Outcome, score: usize) -> bool {
        let headline = match outcome {
            Outcome::Won => "You won!",
            Outcome::Lost => "You lost!",
        };
        let details = format!("Score: {}. Press ENTER to play again", score);
        info!("{} Final score: {}", headline, score);

        while !self.rl.window_should_close() {
            if self.rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
                self.held_keys.clear();
                return true;
            }

            let mut d = self.rl.begin_drawing(&self.thread);
            d.clear_background(BACKGROUND_COLOR);
            d.draw_text(headline, 40, 120, 48, TEXT_COLOR);
            d.draw_text(&details, 40, 190, 20, TEXT_COLOR);
        }

        false
    }
}

impl FrameScheduler for RaylibFrontend<'_> {
    fn next_frame(&mut self) -> bool {
        !self.rl.window_should_close()
    }
}

impl Frontend for RaylibFrontend<'_> {
    fn poll_input(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        while let Some(key) = self.rl.get_key_pressed() {
            if !self.held_keys.contains(&key) {
                self.held_keys.push(key);
            }
            events.push(InputEvent::KeyDown(map_key(key)));
        }

        let rl = &self.rl;
        self.held_keys.retain(|key| {
            if rl.is_key_released(*key) {
                events.push(InputEvent::KeyUp(map_key(*key)));
                false
            } else {
                true
            }
        });

        events
    }

    fn play(&mut self, cue: SoundCue) {
        debug!("playing {:?}", cue);
        self.sounds.get(cue).play();
    }

    fn render(&mut self, state: &GameState) {
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(BACKGROUND_COLOR);

        draw_sprite(
            &mut d,
            &self.sprites.background,
            Vector2::new(0.0, 0.0),
            self.world.width,
            self.world.height,
        );

        for block in state.active_blocks() {
            draw_sprite(
                &mut d,
                &self.sprites.block,
                block.position,
                block.width,
                block.height,
            );
        }

        let ball = &state.ball;
        draw_sprite(&mut d, &self.sprites.ball, ball.position, ball.width, ball.height);

        let paddle = &state.paddle;
        draw_sprite(
            &mut d,
            &self.sprites.platform,
            paddle.position,
            paddle.width,
            paddle.height,
        );

        d.draw_text(
            &format!("Score: {}", state.score()),
            SCORE_TEXT_X,
            SCORE_TEXT_Y,
            SCORE_FONT_SIZE,
            TEXT_COLOR,
        );
    }
}

fn map_key(key: KeyboardKey) -> Key {
    match key {
        KeyboardKey::KEY_SPACE => Key::Fire,
        KeyboardKey::KEY_LEFT => Key::Left,
        KeyboardKey::KEY_RIGHT => Key::Right,
        _ => Key::Other,
    }
}

/// Stretches the whole texture over the given screen rectangle.
fn draw_sprite(
    d: &mut impl RaylibDraw,
    texture: &Texture2D,
    position: Vector2<f32>,
    width: f32,
    height: f32,
) {
    let source = Rectangle::new(0.0, 0.0, texture.width as f32, texture.height as f32);
    let dest = Rectangle::new(position.x, position.y, width, height);

    d.draw_texture_pro(
        texture,
        source,
        dest,
        raylib::math::Vector2::zero(),
        0.0,
        Color::WHITE,
    );
}
