//! Damage/heal popup animation
//!
//! A popup is a floating number that pops in at half size, wobbles, and
//! fades out over its last frames. All motion is driven by discrete ticks;
//! there is no wall-clock time here.
//!
//! Per tick, after the lifetime counter is decremented:
//! 1. phase advances by [`PHASE_STEP`]
//! 2. rotation is `sin(phase) * ROTATION_AMPLITUDE`
//! 3. scale grows by [`SCALE_STEP`] until it reaches 1.0
//! 4. in the last [`FADE_FRAMES`] frames opacity drops by [`FADE_STEP`], floored at 0
//!
//! Short lifetimes simply overlap the grow and fade phases.

use crate::config::Rgb;

pub const PHASE_STEP: f32 = 0.1;
pub const ROTATION_AMPLITUDE: f32 = 0.2;
pub const START_SCALE: f32 = 0.5;
pub const SCALE_STEP: f32 = 0.05;
pub const FULL_OPACITY: i32 = 255;
pub const FADE_FRAMES: u32 = 10;
pub const FADE_STEP: i32 = 25;

/// Transform state of one popup
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamagePopupState {
    /// Rotation accumulator, only ever increases
    pub phase: f32,
    pub rotation: f32,
    pub scale: f32,
    pub opacity: i32,
    pub remaining_frames: u32,
}

impl DamagePopupState {
    pub fn new(duration_frames: u32) -> Self {
        DamagePopupState {
            phase: 0.0,
            rotation: 0.0,
            scale: START_SCALE,
            opacity: FULL_OPACITY,
            remaining_frames: duration_frames,
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        self.remaining_frames = self.remaining_frames.saturating_sub(1);

        self.phase += PHASE_STEP;
        self.rotation = self.phase.sin() * ROTATION_AMPLITUDE;

        if self.scale < 1.0 {
            self.scale = (self.scale + SCALE_STEP).min(1.0);
        }

        if self.remaining_frames < FADE_FRAMES {
            self.opacity = (self.opacity - FADE_STEP).max(0);
        }
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_frames == 0
    }

    /// Rotation in degrees, for renderers that want them
    pub fn rotation_degrees(&self) -> f64 {
        f64::from(self.rotation).to_degrees()
    }

    /// Opacity as an alpha byte
    pub fn alpha(&self) -> u8 {
        self.opacity.clamp(0, 255) as u8
    }
}

/// Whether a popup shows damage taken or HP recovered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupKind {
    Damage,
    Healing,
}

/// A spawned popup: its text, where it sits, and its animation state
#[derive(Debug, Clone)]
pub struct DamagePopup {
    pub kind: PopupKind,
    pub text: String,
    pub color: Rgb,
    pub x: f32,
    pub y: f32,
    pub state: DamagePopupState,
}

impl DamagePopup {
    pub fn new(kind: PopupKind, text: String, color: Rgb, x: f32, y: f32, duration_frames: u32) -> Self {
        DamagePopup {
            kind,
            text,
            color,
            x,
            y,
            state: DamagePopupState::new(duration_frames),
        }
    }

    pub fn tick(&mut self) {
        self.state.tick();
    }

    pub fn is_expired(&self) -> bool {
        self.state.is_expired()
    }
}
