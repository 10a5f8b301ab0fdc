//! World domain: asset lookup with placeholder fallback.
//!
//! The loader never fails because a texture is missing. Every lookup goes
//! through an [`AssetProvider`]; an absent file resolves to
//! [`Appearance::Placeholder`] and a warning is logged.

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::entities::PowerUpKind;

pub const WALL_TEXTURE: &str = "textures/obstacles/wall.png";
pub const ENTRY_TEXTURE: &str = "textures/tiles/entry.png";
pub const EXIT_TEXTURE: &str = "textures/tiles/exit.png";
pub const TRAP_TEXTURE: &str = "textures/obstacles/trap_spike.png";
pub const PATROL_ENEMY_TEXTURE: &str = "textures/obstacles/enemy_patrol.png";
pub const KEY_TEXTURE: &str = "textures/items/key.png";
pub const HEART_TEXTURE: &str = "textures/items/heart.png";
pub const LASER_TEXTURE: &str = "textures/obstacles/laser_grid.png";
pub const SHIELD_TEXTURE: &str = "textures/items/shield.png";
pub const SPEED_BOOST_TEXTURE: &str = "textures/items/speed_boost.png";
pub const GHOST_MODE_TEXTURE: &str = "textures/items/ghost_mode.png";

/// Opaque display handle carried by every game object.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Appearance {
    Texture(Handle<Image>),
    /// Neutral stand-in used when the texture could not be found.
    #[default]
    Placeholder,
}

impl Appearance {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Appearance::Placeholder)
    }
}

/// Something that can turn an asset path into a drawable handle.
pub trait AssetProvider {
    /// Returns `None` when the asset does not exist.
    fn texture(&mut self, path: &str) -> Option<Handle<Image>>;
}

/// Resolve a texture, substituting the placeholder when it is absent.
pub fn resolve_texture<P: AssetProvider + ?Sized>(provider: &mut P, path: &str) -> Appearance {
    match provider.texture(path) {
        Some(handle) => Appearance::Texture(handle),
        None => {
            warn!("Texture not found: {} - using placeholder", path);
            Appearance::Placeholder
        }
    }
}

/// Provider backed by Bevy's asset server, checking the file on disk first.
pub struct DiskAssets<'a> {
    server: &'a AssetServer,
    root: PathBuf,
}

impl<'a> DiskAssets<'a> {
    pub fn new(server: &'a AssetServer, root: impl Into<PathBuf>) -> Self {
        Self {
            server,
            root: root.into(),
        }
    }
}

impl AssetProvider for DiskAssets<'_> {
    fn texture(&mut self, path: &str) -> Option<Handle<Image>> {
        if !self.root.join(Path::new(path)).exists() {
            return None;
        }
        Some(self.server.load(path.to_owned()))
    }
}

/// Provider that never finds anything. Every object gets the placeholder.
#[derive(Debug, Default)]
pub struct NoAssets;

impl AssetProvider for NoAssets {
    fn texture(&mut self, _path: &str) -> Option<Handle<Image>> {
        None
    }
}

/// Texture path for a power-up pickup.
pub fn power_up_texture(kind: PowerUpKind) -> &'static str {
    match kind {
        PowerUpKind::Shield => SHIELD_TEXTURE,
        PowerUpKind::SpeedBoost => SPEED_BOOST_TEXTURE,
        PowerUpKind::GhostMode => GHOST_MODE_TEXTURE,
    }
}

/// Textures acquired once per level load and shared by the placed objects.
///
/// Dropping the set releases every handle it still owns, so a load that
/// fails validation gives its textures back on the way out.
#[derive(Debug, Clone, Default)]
pub struct TileTextures {
    pub wall: Appearance,
    pub entry: Appearance,
    pub exit: Appearance,
    pub trap: Appearance,
    pub patrol_enemy: Appearance,
    pub key: Appearance,
    pub heart: Appearance,
    pub laser: Appearance,
}

impl TileTextures {
    pub fn acquire<P: AssetProvider + ?Sized>(provider: &mut P) -> Self {
        Self {
            wall: resolve_texture(provider, WALL_TEXTURE),
            entry: resolve_texture(provider, ENTRY_TEXTURE),
            exit: resolve_texture(provider, EXIT_TEXTURE),
            trap: resolve_texture(provider, TRAP_TEXTURE),
            patrol_enemy: resolve_texture(provider, PATROL_ENEMY_TEXTURE),
            key: resolve_texture(provider, KEY_TEXTURE),
            heart: resolve_texture(provider, HEART_TEXTURE),
            laser: resolve_texture(provider, LASER_TEXTURE),
        }
    }
}
