//! Resource manifest and the preload barrier that gates the start of a game.
//!
//! Each sprite and sound is read by its own task. The game only starts once every task has
//! finished; the first failure aborts the rest and is reported instead of stalling.

use log::{info, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tokio::task::{JoinError, JoinSet};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Ball,
    Platform,
    Block,
}

impl SpriteId {
    pub const ALL: [SpriteId; 4] = [
        SpriteId::Background,
        SpriteId::Ball,
        SpriteId::Platform,
        SpriteId::Block,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SpriteId::Background => "background",
            SpriteId::Ball => "ball",
            SpriteId::Platform => "platform",
            SpriteId::Block => "block",
        }
    }
}

/// Sound effects the game triggers.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Bump,
    ToLose,
    Win,
}

impl SoundCue {
    pub const ALL: [SoundCue; 3] = [SoundCue::Bump, SoundCue::ToLose, SoundCue::Win];

    pub fn name(&self) -> &'static str {
        match self {
            SoundCue::Bump => "bump",
            SoundCue::ToLose => "toLose",
            SoundCue::Win => "win",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Sprite(SpriteId),
    Sound(SoundCue),
}

impl AssetKey {
    /// Every resource the game needs before it can start.
    pub fn manifest() -> impl Iterator<Item = AssetKey> {
        SpriteId::ALL
            .into_iter()
            .map(AssetKey::Sprite)
            .chain(SoundCue::ALL.into_iter().map(AssetKey::Sound))
    }

    /// File extension including the leading dot, as decoders expect it.
    pub fn extension(&self) -> &'static str {
        match self {
            AssetKey::Sprite(_) => ".png",
            AssetKey::Sound(_) => ".mp3",
        }
    }

    /// `img/<name>.png` for sprites, `sounds/<name>.mp3` for sounds.
    pub fn relative_path(&self) -> PathBuf {
        let (dir, name) = match self {
            AssetKey::Sprite(sprite) => ("img", sprite.name()),
            AssetKey::Sound(cue) => ("sounds", cue.name()),
        };

        Path::new(dir).join(format!("{}{}", name, self.extension()))
    }
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to read {key:?} from {path}: {source}")]
    Read {
        key: AssetKey,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("asset loading did not finish within {0:?}")]
    TimedOut(Duration),
    #[error("asset loading task failed: {0}")]
    Task(#[from] JoinError),
    #[error("{0:?} was never loaded")]
    Missing(AssetKey),
}

#[derive(Debug, Clone)]
pub struct LoadedAsset {
    pub key: AssetKey,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Raw bytes of every manifest entry. Only built once all of them are present.
#[derive(Debug, Clone)]
pub struct LoadedAssets {
    assets: HashMap<AssetKey, LoadedAsset>,
}

impl LoadedAssets {
    pub fn sprite(&self, id: SpriteId) -> &LoadedAsset {
        &self.assets[&AssetKey::Sprite(id)]
    }

    pub fn sound(&self, cue: SoundCue) -> &LoadedAsset {
        &self.assets[&AssetKey::Sound(cue)]
    }
}

/// Loads the whole manifest from `root`, optionally giving up after `timeout`.
pub async fn preload(root: &Path, timeout: Option<Duration>) -> Result<LoadedAssets, AssetError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, load_all(root))
            .await
            .map_err(|_| AssetError::TimedOut(limit))?,
        None => load_all(root).await,
    }
}

async fn load_all(root: &Path) -> Result<LoadedAssets, AssetError> {
    let mut tasks = JoinSet::new();

    for key in AssetKey::manifest() {
        let path = root.join(key.relative_path());
        tasks.spawn(load_one(key, path));
    }

    let required = tasks.len();
    let mut assets = HashMap::with_capacity(required);

    while let Some(joined) = tasks.join_next().await {
        let asset = joined??;
        trace!(
            "{} ready ({}/{})",
            asset.path.display(),
            assets.len() + 1,
            required
        );
        assets.insert(asset.key, asset);
    }

    if let Some(key) = AssetKey::manifest().find(|key| !assets.contains_key(key)) {
        return Err(AssetError::Missing(key));
    }

    info!("all {} assets loaded from {}", required, root.display());
    Ok(LoadedAssets { assets })
}

async fn load_one(key: AssetKey, path: PathBuf) -> Result<LoadedAsset, AssetError> {
    match tokio::fs::read(&path).await {
        Ok(bytes) => Ok(LoadedAsset { key, path, bytes }),
        Err(source) => Err(AssetError::Read { key, path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_manifest(root: &Path) {
        for key in AssetKey::manifest() {
            let path = root.join(key.relative_path());
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, format!("{:?}", key)).unwrap();
        }
    }

    #[test]
    fn naming_convention() {
        assert_eq!(
            AssetKey::Sprite(SpriteId::Platform).relative_path(),
            Path::new("img").join("platform.png")
        );
        assert_eq!(
            AssetKey::Sound(SoundCue::ToLose).relative_path(),
            Path::new("sounds").join("toLose.mp3")
        );
        assert_eq!(AssetKey::manifest().count(), 7);
    }

    #[tokio::test]
    async fn preload_waits_for_every_entry() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path());

        let assets = preload(dir.path(), None).await.unwrap();

        for id in SpriteId::ALL {
            let asset = assets.sprite(id);
            assert_eq!(asset.key, AssetKey::Sprite(id));
            assert_eq!(asset.bytes, format!("{:?}", AssetKey::Sprite(id)).into_bytes());
        }
        for cue in SoundCue::ALL {
            assert_eq!(assets.sound(cue).key, AssetKey::Sound(cue));
        }
    }

    #[tokio::test]
    async fn missing_file_fails_the_barrier() {
        let dir = tempfile::tempdir().unwrap();
        write_manifest(dir.path());
        std::fs::remove_file(dir.path().join("sounds").join("win.mp3")).unwrap();

        let err = preload(dir.path(), Some(Duration::from_secs(5)))
            .await
            .unwrap_err();

        match err {
            AssetError::Read { key, .. } => assert_eq!(key, AssetKey::Sound(SoundCue::Win)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
