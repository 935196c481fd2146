//! Popup renderer
//!
//! Draws a [`DamagePopup`] centred on its anchor with the popup's current
//! scale, rotation and opacity. The text is drawn once into an offscreen
//! texture at full size, then copied to the screen scaled and rotated, since
//! SDL2 rectangles can't be rotated directly.
//!
//! Prerendered textures are keyed by text, color and pixel scale and kept
//! for as long as some popup on screen uses them. All animation state still
//! comes from the popup.

use super::text::{draw_simple_text, measure, scale_for_font_size};
use super::to_sdl_color;
use crate::config::{DisplayConfig, Rgb};
use crate::popup::DamagePopup;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

/// Appearance of popup text that isn't user-configurable
#[derive(Debug, Clone)]
pub struct PopupStyle {
    /// Outline/shadow offset in text pixels
    pub outline_offset: i32,
    pub outline_color: Color,
}

impl Default for PopupStyle {
    fn default() -> Self {
        PopupStyle {
            outline_offset: 1,
            outline_color: Color::RGB(0, 0, 0),
        }
    }
}

/// Values kept across frames, dropped once a frame goes by without using them
#[derive(Debug)]
pub(crate) struct FrameCache<K, V> {
    entries: HashMap<K, (V, bool)>,
}

impl<K: Eq + Hash, V> FrameCache<K, V> {
    pub(crate) fn new() -> Self {
        FrameCache {
            entries: HashMap::new(),
        }
    }

    /// Cached value for `key`, building it on first use, marked as used
    pub(crate) fn get_or_try_insert_with<E>(
        &mut self,
        key: K,
        build: impl FnOnce() -> Result<V, E>,
    ) -> Result<&mut V, E> {
        let slot = match self.entries.entry(key) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => e.insert((build()?, false)),
        };
        slot.1 = true;
        Ok(&mut slot.0)
    }

    /// Drop entries not used since the last call and reset the rest
    pub(crate) fn evict_unused(&mut self) {
        self.entries.retain(|_, (_, used)| std::mem::take(used));
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TextKey {
    text: String,
    color: Rgb,
    scale: u32,
}

struct PrerenderedText<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

pub struct PopupRenderer<'a> {
    style: PopupStyle,
    texture_creator: &'a TextureCreator<WindowContext>,
    cache: FrameCache<TextKey, PrerenderedText<'a>>,
}

impl<'a> PopupRenderer<'a> {
    pub fn new(texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        Self::with_style(PopupStyle::default(), texture_creator)
    }

    pub fn with_style(style: PopupStyle, texture_creator: &'a TextureCreator<WindowContext>) -> Self {
        PopupRenderer {
            style,
            texture_creator,
            cache: FrameCache::new(),
        }
    }

    pub fn style(&self) -> &PopupStyle {
        &self.style
    }

    /// Draw one popup
    ///
    /// Text size comes from the live config so a size change in the
    /// settings screen affects popups already on screen.
    pub fn render(
        &mut self,
        canvas: &mut Canvas<Window>,
        config: &DisplayConfig,
        popup: &DamagePopup,
    ) -> Result<(), String> {
        let alpha = popup.state.alpha();
        if alpha == 0 || popup.text.is_empty() {
            return Ok(());
        }

        let scale = scale_for_font_size(config.font_size);
        let key = TextKey {
            text: popup.text.clone(),
            color: popup.color,
            scale,
        };
        let style = &self.style;
        let texture_creator = self.texture_creator;
        let prerendered = self.cache.get_or_try_insert_with(key, || {
            prerender(canvas, texture_creator, style, &popup.text, popup.color, scale)
        })?;

        prerendered.texture.set_alpha_mod(alpha);

        let dst_w = ((prerendered.width as f32) * popup.state.scale).round().max(1.0) as u32;
        let dst_h = ((prerendered.height as f32) * popup.state.scale).round().max(1.0) as u32;
        let dst = Rect::new(
            popup.x as i32 - (dst_w / 2) as i32,
            popup.y as i32 - (dst_h / 2) as i32,
            dst_w,
            dst_h,
        );

        canvas.copy_ex(
            &prerendered.texture,
            None,
            Some(dst),
            popup.state.rotation_degrees(),
            None,
            false,
            false,
        )
    }

    /// Draw every popup, then release textures no popup used this frame
    pub fn render_all<'p>(
        &mut self,
        canvas: &mut Canvas<Window>,
        config: &DisplayConfig,
        popups: impl IntoIterator<Item = &'p DamagePopup>,
    ) -> Result<(), String> {
        for popup in popups {
            self.render(canvas, config, popup)?;
        }
        self.cache.evict_unused();
        Ok(())
    }
}

/// Draw outlined text into a fresh transparent target texture
fn prerender<'a>(
    canvas: &mut Canvas<Window>,
    texture_creator: &'a TextureCreator<WindowContext>,
    style: &PopupStyle,
    text: &str,
    color: Rgb,
    scale: u32,
) -> Result<PrerenderedText<'a>, String> {
    let (text_w, text_h) = measure(text, scale);
    let pad = style.outline_offset.unsigned_abs() * scale;
    let width = text_w + pad;
    let height = text_h + pad;

    let mut texture = texture_creator
        .create_texture_target(PixelFormatEnum::RGBA8888, width, height)
        .map_err(|e| e.to_string())?;
    texture.set_blend_mode(BlendMode::Blend);

    let offset = style.outline_offset * scale as i32;
    let mut draw_result = Ok(());

    canvas
        .with_texture_canvas(&mut texture, |tc| {
            tc.set_draw_color(Color::RGBA(0, 0, 0, 0));
            tc.clear();
            draw_result = draw_simple_text(tc, text, offset, offset, style.outline_color, scale)
                .and_then(|_| draw_simple_text(tc, text, 0, 0, to_sdl_color(color), scale));
        })
        .map_err(|e| e.to_string())?;
    draw_result?;

    Ok(PrerenderedText {
        texture,
        width,
        height,
    })
}
