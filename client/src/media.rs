use anyhow::{anyhow, Result};
use raylib::prelude::*;
use simulation::{LoadedAsset, LoadedAssets, SoundCue, SpriteId};

pub struct Sprites {
    pub background: Texture2D,
    pub ball: Texture2D,
    pub platform: Texture2D,
    pub block: Texture2D,
}

impl Sprites {
    pub fn decode(
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        assets: &LoadedAssets,
    ) -> Result<Self> {
        Ok(Sprites {
            background: load_texture(rl, thread, assets.sprite(SpriteId::Background))?,
            ball: load_texture(rl, thread, assets.sprite(SpriteId::Ball))?,
            platform: load_texture(rl, thread, assets.sprite(SpriteId::Platform))?,
            block: load_texture(rl, thread, assets.sprite(SpriteId::Block))?,
        })
    }
}

pub struct Sounds<'aud> {
    bump: Sound<'aud>,
    to_lose: Sound<'aud>,
    win: Sound<'aud>,
}

impl<'aud> Sounds<'aud> {
    pub fn decode(audio: &'aud RaylibAudio, assets: &LoadedAssets) -> Result<Self> {
        Ok(Sounds {
            bump: load_sound(audio, assets.sound(SoundCue::Bump))?,
            to_lose: load_sound(audio, assets.sound(SoundCue::ToLose))?,
            win: load_sound(audio, assets.sound(SoundCue::Win))?,
        })
    }

    pub fn get(&self, cue: SoundCue) -> &Sound<'aud> {
        match cue {
            SoundCue::Bump => &self.bump,
            SoundCue::ToLose => &self.to_lose,
            SoundCue::Win => &self.win,
        }
    }
}

fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    asset: &LoadedAsset,
) -> Result<Texture2D> {
    let image = Image::load_image_from_mem(asset.key.extension(), &asset.bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", asset.path.display()))?;

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow!("failed to upload {}: {e}", asset.path.display()))
}

fn load_sound<'aud>(audio: &'aud RaylibAudio, asset: &LoadedAsset) -> Result<Sound<'aud>> {
    let wave = audio
        .new_wave_from_memory(asset.key.extension(), &asset.bytes)
        .map_err(|e| anyhow!("failed to decode {}: {e}", asset.path.display()))?;

    audio
        .new_sound_from_wave(&wave)
        .map_err(|e| anyhow!("failed to create sound from {}: {e}", asset.path.display()))
}
