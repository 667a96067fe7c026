//! Sprite table
//!
//! Sprites are loaded once at startup and only ever looked up afterwards.
//! Entities hold a `SpriteId`, never the texture itself.

use macroquad::math::Vec2;
use macroquad::texture::{load_texture, FilterMode, Texture2D};
use std::path::Path;

/// Index into the sprite table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SpriteId {
    #[default]
    Nil = 0,
    Player = 1,
    Goblin = 2,
    Troll = 3,
    CardFireball = 4,
}

impl SpriteId {
    pub const COUNT: usize = 5;

    pub const ALL: [SpriteId; Self::COUNT] = [
        SpriteId::Nil,
        SpriteId::Player,
        SpriteId::Goblin,
        SpriteId::Troll,
        SpriteId::CardFireball,
    ];

    /// Unknown indices map to `Nil` so stale ids still draw something.
    pub fn from_index(index: usize) -> SpriteId {
        Self::ALL.get(index).copied().unwrap_or(SpriteId::Nil)
    }
}

/// A loaded image plus the logical size it is drawn and hit-tested at
#[derive(Clone, Default)]
pub struct Sprite {
    /// None when the image failed to load (or the kind has no art)
    pub image: Option<Texture2D>,
    pub size: Vec2,
}

impl Sprite {
    pub fn sized(size: Vec2) -> Self {
        Self { image: None, size }
    }
}

/// Image files and logical sizes for every sprite kind that has art
const SPRITE_SOURCES: [(SpriteId, &str, Vec2); 3] = [
    (SpriteId::Player, "player.png", Vec2::new(10.0, 19.0)),
    (SpriteId::Troll, "troll.png", Vec2::new(8.0, 14.0)),
    (SpriteId::Goblin, "goblin.png", Vec2::new(8.0, 14.0)),
];

pub struct SpriteTable {
    sprites: [Sprite; SpriteId::COUNT],
}

impl SpriteTable {
    /// Table with logical sizes filled in and no images.
    pub fn without_images() -> Self {
        let mut table = Self {
            sprites: std::array::from_fn(|_| Sprite::default()),
        };
        for (id, _, size) in SPRITE_SOURCES {
            table.sprites[id as usize] = Sprite::sized(size);
        }
        table
    }

    /// Load every sprite image from `dir`. A missing image is logged and the
    /// sprite keeps its logical size so the renderer can draw a stand-in.
    pub async fn load(dir: &Path) -> Self {
        let mut table = Self::without_images();
        for (id, file, _) in SPRITE_SOURCES {
            let path = dir.join(file);
            let path_str = path.to_string_lossy();
            match load_texture(&path_str).await {
                Ok(tex) => {
                    tex.set_filter(FilterMode::Nearest);
                    log::info!("Loaded sprite {:?} from {}", id, path_str);
                    table.sprites[id as usize].image = Some(tex);
                }
                Err(e) => {
                    log::warn!("Failed to load sprite {:?} from {}: {}", id, path_str, e);
                }
            }
        }
        table
    }

    /// Every `SpriteId` has a slot, so lookup cannot miss. Raw indices go
    /// through `SpriteId::from_index` first.
    pub fn get(&self, id: SpriteId) -> &Sprite {
        &self.sprites[id as usize]
    }

    pub fn loaded_count(&self) -> usize {
        self.sprites.iter().filter(|s| s.image.is_some()).count()
    }
}

impl Default for SpriteTable {
    fn default() -> Self {
        Self::without_images()
    }
}
