//! Settings screen renderer
//!
//! Draws the settings menu as a centred overlay: darkened backdrop, double
//! bordered box, title, and one row per command with the selected row
//! highlighted. Color rows get a swatch of the current color.

use super::text::draw_simple_text;
use super::to_sdl_color;
use crate::config::DisplayConfig;
use crate::settings::{SettingsCommand, SettingsMenu};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

/// Configuration for menu appearance
#[derive(Debug, Clone)]
pub struct MenuStyle {
    pub width: u32,
    pub height: u32,
    pub background_color: Color,
    pub border_color: Color,
    /// Draws a double border if > 1
    pub border_thickness: u32,
    /// Overlay darkness (0-255, higher = darker)
    pub overlay_alpha: u8,
    pub title_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,
    pub highlight_color: Color,
    pub text_scale: u32,
    pub row_height: u32,
}

impl Default for MenuStyle {
    fn default() -> Self {
        MenuStyle {
            width: 420,
            height: 300,
            background_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            border_thickness: 2,
            overlay_alpha: 180,
            title_color: Color::RGB(220, 220, 240),
            item_color: Color::RGB(160, 160, 170),
            selected_item_color: Color::RGB(255, 255, 255),
            highlight_color: Color::RGB(80, 100, 140),
            text_scale: 2,
            row_height: 32,
        }
    }
}

pub struct MenuRenderer {
    title: String,
    style: MenuStyle,
}

impl MenuRenderer {
    pub fn new(title: &str) -> Self {
        MenuRenderer {
            title: title.to_string(),
            style: MenuStyle::default(),
        }
    }

    pub fn with_style(title: &str, style: MenuStyle) -> Self {
        MenuRenderer {
            title: title.to_string(),
            style,
        }
    }

    pub fn style(&self) -> &MenuStyle {
        &self.style
    }

    /// Render the menu at screen center
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        menu: &SettingsMenu,
        config: &DisplayConfig,
    ) -> Result<(), String> {
        let style = &self.style;

        canvas.set_blend_mode(BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, style.overlay_alpha));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(BlendMode::None);

        // Centre using logical size, not the physical window size
        let (screen_width, screen_height) = canvas.logical_size();
        let menu_x = screen_width.saturating_sub(style.width) as i32 / 2;
        let menu_y = screen_height.saturating_sub(style.height) as i32 / 2;
        let frame = Rect::new(menu_x, menu_y, style.width, style.height);

        canvas.set_draw_color(style.background_color);
        canvas.fill_rect(frame)?;

        canvas.set_draw_color(style.border_color);
        canvas.draw_rect(frame)?;
        if style.border_thickness > 1 {
            canvas.draw_rect(Rect::new(menu_x + 2, menu_y + 2, style.width - 4, style.height - 4))?;
        }

        let title_scale = style.text_scale + 1;
        let (title_width, _) = super::text::measure(&self.title, title_scale);
        draw_simple_text(
            canvas,
            &self.title,
            menu_x + (style.width.saturating_sub(title_width) / 2) as i32,
            menu_y + 16,
            style.title_color,
            title_scale,
        )?;

        let row_start_y = menu_y + 60;
        for (i, row) in menu.rows(config).iter().enumerate() {
            let row_y = row_start_y + (i as u32 * style.row_height) as i32;
            let is_selected = i == menu.selected_index();

            if is_selected {
                canvas.set_draw_color(style.highlight_color);
                canvas.fill_rect(Rect::new(
                    menu_x + 12,
                    row_y - 4,
                    style.width - 24,
                    style.row_height - 6,
                ))?;
            }

            let text_color = if is_selected {
                style.selected_item_color
            } else {
                style.item_color
            };
            draw_simple_text(canvas, &row.text, menu_x + 24, row_y, text_color, style.text_scale)?;

            let swatch = match row.command {
                SettingsCommand::DamageColor => Some(config.damage_color),
                SettingsCommand::HealingColor => Some(config.healing_color),
                _ => None,
            };
            if let Some(color) = swatch {
                let size = 7 * style.text_scale;
                let swatch_rect = Rect::new(menu_x + style.width as i32 - 24 - size as i32, row_y, size, size);
                canvas.set_draw_color(to_sdl_color(color));
                canvas.fill_rect(swatch_rect)?;
                canvas.set_draw_color(style.border_color);
                canvas.draw_rect(swatch_rect)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_style_fits_all_rows() {
        let style = MenuStyle::default();
        let rows = SettingsCommand::all().len() as u32;
        assert!(60 + rows * style.row_height <= style.height);
    }

    #[test]
    fn test_custom_style() {
        let style = MenuStyle {
            width: 500,
            ..Default::default()
        };
        let renderer = MenuRenderer::with_style("SETTINGS", style);
        assert_eq!(renderer.style().width, 500);
        assert_eq!(renderer.style().text_scale, 2);
    }
}
