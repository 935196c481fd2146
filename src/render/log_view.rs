//! Battle log renderer
//!
//! Screen-space panel in the top-left corner. Line height follows the
//! configured font size; damage and healing lines use their configured
//! colors.

use super::text::{draw_simple_text, measure};
use super::to_sdl_color;
use crate::battle::BattleLog;
use crate::config::DisplayConfig;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{BlendMode, Canvas};
use sdl2::video::Window;

const PANEL_X: i32 = 8;
const PANEL_Y: i32 = 8;
const PADDING: i32 = 6;

/// Log text scale: half the popup scale, clamped to 1..=3
pub fn log_scale(font_size: u32) -> u32 {
    (font_size / 16).clamp(1, 3)
}

pub fn render_battle_log(
    canvas: &mut Canvas<Window>,
    log: &BattleLog,
    config: &DisplayConfig,
) -> Result<(), String> {
    if log.is_empty() {
        return Ok(());
    }

    let scale = log_scale(config.font_size);
    let (_, line_h) = measure("X", scale);
    let line_step = (line_h + 2 * scale) as i32;

    let widest = log.lines().map(|l| measure(&l.text, scale).0).max().unwrap_or(0);
    let panel = Rect::new(
        PANEL_X,
        PANEL_Y,
        widest + 2 * PADDING as u32,
        (line_step * log.len() as i32 + 2 * PADDING) as u32,
    );

    canvas.set_blend_mode(BlendMode::Blend);
    canvas.set_draw_color(Color::RGBA(0, 0, 0, 150));
    canvas.fill_rect(panel)?;
    canvas.set_blend_mode(BlendMode::None);

    for (i, line) in log.lines().enumerate() {
        let color = line.color.map(to_sdl_color).unwrap_or(Color::RGB(230, 230, 230));
        draw_simple_text(
            canvas,
            &line.text,
            PANEL_X + PADDING,
            PANEL_Y + PADDING + i as i32 * line_step,
            color,
            scale,
        )?;
    }

    Ok(())
}
