//! Battle display hooks
//!
//! `BattleDisplay` is what the game loop talks to during a fight. It has two
//! entry points:
//! - [`BattleDisplay::on_display_damage`] when an action resolves
//! - [`BattleDisplay::on_tick`] once per frame
//!
//! The display config is passed in on every call rather than stored, so a
//! change made in the settings screen shows up on the next popup.

use crate::combat::{CombatOutcome, CombatResult};
use crate::config::{DisplayConfig, Rgb};
use crate::popup::{DamagePopup, PopupKind};
use std::collections::VecDeque;
use tracing::trace;

pub const MAX_LOG_LINES: usize = 8;

/// One line in the battle log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub text: String,
    /// `None` draws with the log's default text color
    pub color: Option<Rgb>,
}

/// Rolling battle log, newest line last
#[derive(Debug, Clone, Default)]
pub struct BattleLog {
    lines: VecDeque<LogLine>,
}

impl BattleLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: LogLine) {
        if self.lines.len() == MAX_LOG_LINES {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Describe a combat result in one line
    pub fn push_result(&mut self, config: &DisplayConfig, result: &CombatResult) {
        let line = match result.outcome {
            CombatOutcome::Miss => LogLine {
                text: format!("Miss! {} took no damage.", result.target),
                color: None,
            },
            CombatOutcome::Evade => LogLine {
                text: format!("{} evaded the attack!", result.target),
                color: None,
            },
            CombatOutcome::Hit if result.hp_delta < 0 => LogLine {
                text: format!(
                    "{}{} takes {} damage!",
                    if result.critical { "Critical! " } else { "" },
                    result.target,
                    result.hp_delta.unsigned_abs()
                ),
                color: Some(config.damage_color),
            },
            CombatOutcome::Hit if result.hp_delta > 0 => LogLine {
                text: format!("{} recovers {} HP!", result.target, result.hp_delta),
                color: Some(config.healing_color),
            },
            CombatOutcome::Hit => LogLine {
                text: format!("{} took no damage.", result.target),
                color: None,
            },
        };
        self.push(line);
    }

    pub fn lines(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Live popups and the battle log
#[derive(Debug, Default)]
pub struct BattleDisplay {
    popups: Vec<DamagePopup>,
    log: BattleLog,
}

impl BattleDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a combat result
    ///
    /// Every result gets a log line. A hit that changed HP also spawns a
    /// popup at `(x, y)` using the configured color and lifetime.
    pub fn on_display_damage(&mut self, config: &DisplayConfig, result: &CombatResult, x: f32, y: f32) {
        self.log.push_result(config, result);

        if !result.shows_popup() {
            return;
        }

        let (kind, color) = if result.is_healing() {
            (PopupKind::Healing, config.healing_color)
        } else {
            (PopupKind::Damage, config.damage_color)
        };

        let mut text = result.hp_delta.unsigned_abs().to_string();
        if result.critical {
            text.push('!');
        }

        trace!(target_name = %result.target, %text, "spawning popup");
        self.popups.push(DamagePopup::new(
            kind,
            text,
            color,
            x,
            y,
            config.animation_duration_frames,
        ));
    }

    /// Advance every popup one frame and drop the expired ones
    pub fn on_tick(&mut self) {
        for popup in self.popups.iter_mut() {
            popup.tick();
        }
        self.popups.retain(|popup| !popup.is_expired());
    }

    pub fn popups(&self) -> &[DamagePopup] {
        &self.popups
    }

    pub fn log(&self) -> &BattleLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_spawns_popup_with_damage_color() {
        let config = DisplayConfig::default();
        let mut display = BattleDisplay::new();

        display.on_display_damage(&config, &CombatResult::damage("Slime", 12), 100.0, 50.0);

        let popup = &display.popups()[0];
        assert_eq!(popup.kind, PopupKind::Damage);
        assert_eq!(popup.text, "12");
        assert_eq!(popup.color, config.damage_color);
        assert_eq!(popup.state.remaining_frames, config.animation_duration_frames);
        assert_eq!((popup.x, popup.y), (100.0, 50.0));
    }

    #[test]
    fn test_healing_uses_healing_color() {
        let config = DisplayConfig::default();
        let mut display = BattleDisplay::new();

        display.on_display_damage(&config, &CombatResult::healing("Hero", 7), 0.0, 0.0);

        let popup = &display.popups()[0];
        assert_eq!(popup.kind, PopupKind::Healing);
        assert_eq!(popup.color, config.healing_color);
        assert_eq!(display.log().lines().last().unwrap().text, "Hero recovers 7 HP!");
    }

    #[test]
    fn test_miss_and_evade_only_log() {
        let config = DisplayConfig::default();
        let mut display = BattleDisplay::new();

        display.on_display_damage(&config, &CombatResult::miss("Slime"), 0.0, 0.0);
        display.on_display_damage(&config, &CombatResult::evade("Slime"), 0.0, 0.0);
        display.on_display_damage(&config, &CombatResult::damage("Slime", 0), 0.0, 0.0);

        assert!(display.popups().is_empty());
        assert_eq!(display.log().len(), 3);
    }

    #[test]
    fn test_critical_popup_text() {
        let config = DisplayConfig::default();
        let mut display = BattleDisplay::new();

        display.on_display_damage(&config, &CombatResult::damage("Slime", 40).critical(), 0.0, 0.0);

        assert_eq!(display.popups()[0].text, "40!");
        assert_eq!(display.log().lines().last().unwrap().text, "Critical! Slime takes 40 damage!");
    }

    #[test]
    fn test_popups_expire_after_configured_duration() {
        let config = DisplayConfig {
            animation_duration_frames: 12,
            ..Default::default()
        };
        let mut display = BattleDisplay::new();
        display.on_display_damage(&config, &CombatResult::damage("Slime", 1), 0.0, 0.0);

        for _ in 0..11 {
            display.on_tick();
        }
        assert_eq!(display.popups().len(), 1);

        display.on_tick();
        assert!(display.popups().is_empty());
    }

    #[test]
    fn test_config_change_applies_to_next_popup() {
        let mut config = DisplayConfig::default();
        let mut display = BattleDisplay::new();

        display.on_display_damage(&config, &CombatResult::damage("Slime", 1), 0.0, 0.0);
        config.damage_color = Rgb::new(0, 0, 255);
        display.on_display_damage(&config, &CombatResult::damage("Slime", 1), 0.0, 0.0);

        assert_eq!(display.popups()[0].color, Rgb::new(255, 0, 0));
        assert_eq!(display.popups()[1].color, Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_minimum_hp_delta_is_displayed() {
        let config = DisplayConfig::default();
        let mut display = BattleDisplay::new();
        let result = CombatResult {
            target: "Slime".to_string(),
            outcome: CombatOutcome::Hit,
            hp_delta: i32::MIN,
            critical: false,
        };

        display.on_display_damage(&config, &result, 0.0, 0.0);

        assert_eq!(display.popups()[0].text, "2147483648");
        assert_eq!(display.popups()[0].kind, PopupKind::Damage);
        assert_eq!(
            display.log().lines().last().unwrap().text,
            "Slime takes 2147483648 damage!"
        );
    }

    #[test]
    fn test_log_keeps_most_recent_lines() {
        let config = DisplayConfig::default();
        let mut log = BattleLog::new();
        for i in 0..(MAX_LOG_LINES + 3) {
            log.push_result(&config, &CombatResult::damage("Slime", i as i32 + 1));
        }

        assert_eq!(log.len(), MAX_LOG_LINES);
        assert_eq!(log.lines().next().unwrap().text, "Slime takes 4 damage!");
    }
}
