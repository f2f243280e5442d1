//! Texture registry
//!
//! Maps material texture keys to texture handles created by a
//! [`GraphicsContext`]. The render path uses [`TextureCache::get`] and binds
//! nothing for unknown keys; [`TextureCache::require`] is the strict variant
//! for setup code.

use std::collections::HashMap;

use crate::gfx::{
    error::{GfxError, Result},
    rendering::context::{GraphicsContext, TextureHandle},
};

#[derive(Debug, Default)]
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an existing texture, returning the one it replaced
    pub fn insert(&mut self, key: &str, texture: TextureHandle) -> Option<TextureHandle> {
        self.textures.insert(key.to_string(), texture)
    }

    /// Creates an RGBA8 texture through `ctx` and registers it under `key`
    ///
    /// # Errors
    /// [`GfxError::TextureSizeMismatch`] if `pixels` is not exactly
    /// `width * height * 4` bytes; backend errors are passed through.
    pub fn load_rgba8<C>(
        &mut self,
        ctx: &mut C,
        key: &str,
        width: u32,
        height: u32,
        pixels: &[u8],
    ) -> Result<TextureHandle>
    where
        C: GraphicsContext + ?Sized,
    {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(GfxError::TextureSizeMismatch {
                name: key.to_string(),
                expected,
                actual: pixels.len(),
            });
        }

        let texture = ctx.create_texture_rgba8(width, height, pixels)?;
        log::debug!("loaded texture '{}' ({}x{}) as {:?}", key, width, height, texture);
        self.insert(key, texture);
        Ok(texture)
    }

    pub fn get(&self, key: &str) -> Option<TextureHandle> {
        self.textures.get(key).copied()
    }

    /// Like [`get`](Self::get), but an unknown key is an error
    pub fn require(&self, key: &str) -> Result<TextureHandle> {
        self.get(key)
            .ok_or_else(|| GfxError::UnknownTexture(key.to_string()))
    }

    pub fn remove(&mut self, key: &str) -> Option<TextureHandle> {
        self.textures.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::rendering::recording::{GlCommand, RecordingContext};

    #[test]
    fn test_load_registers_texture() {
        let mut ctx = RecordingContext::new();
        let mut cache = TextureCache::new();

        let texture = cache.load_rgba8(&mut ctx, "checker", 2, 2, &[255; 16]).unwrap();

        assert_eq!(cache.get("checker"), Some(texture));
        assert_eq!(cache.len(), 1);
        assert_eq!(
            ctx.commands(),
            &[GlCommand::CreateTexture {
                texture,
                width: 2,
                height: 2
            }]
        );
    }

    #[test]
    fn test_load_rejects_wrong_pixel_count() {
        let mut ctx = RecordingContext::new();
        let mut cache = TextureCache::new();

        let err = cache.load_rgba8(&mut ctx, "bad", 2, 2, &[0; 15]).unwrap_err();

        assert!(matches!(
            err,
            GfxError::TextureSizeMismatch { expected: 16, actual: 15, .. }
        ));
        assert!(cache.is_empty());
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_load_passes_backend_errors_through() {
        let mut ctx = RecordingContext::new().with_max_texture_size(2);
        let mut cache = TextureCache::new();

        let err = cache.load_rgba8(&mut ctx, "huge", 4, 4, &[0; 64]).unwrap_err();

        assert!(matches!(err, GfxError::Backend(_)));
        assert!(!cache.contains("huge"));
    }

    #[test]
    fn test_require_unknown_key() {
        let mut cache = TextureCache::new();
        cache.insert("grass", TextureHandle(4));

        assert_eq!(cache.require("grass").unwrap(), TextureHandle(4));
        assert!(matches!(cache.require("stone"), Err(GfxError::UnknownTexture(k)) if k == "stone"));
        assert_eq!(cache.remove("grass"), Some(TextureHandle(4)));
        assert!(!cache.contains("grass"));
    }
}
