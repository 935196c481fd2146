//! Combat results as seen by the battle display
//!
//! The battle display never computes damage. It receives the outcome of an
//! action after the fact and only decides how to show it.

fn magnitude(amount: i32) -> i32 {
    amount.checked_abs().unwrap_or(i32::MAX)
}

/// How an action landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    /// The action connected; `hp_delta` says what it did
    Hit,
    /// The action missed outright
    Miss,
    /// The target dodged
    Evade,
}

/// The outcome of one action against one target
///
/// `hp_delta` is the change to the target's HP: negative for damage,
/// positive for healing, zero when nothing changed.
///
/// # Example
///
/// ```rust
/// use battle_display::combat::CombatResult;
///
/// let hit = CombatResult::damage("Slime", 12);
/// assert_eq!(hit.hp_delta, -12);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatResult {
    pub target: String,
    pub outcome: CombatOutcome,
    pub hp_delta: i32,
    pub critical: bool,
}

impl CombatResult {
    /// A hit that removed `amount` HP
    ///
    /// Only the magnitude of `amount` is used, saturating at `i32::MAX`.
    pub fn damage(target: &str, amount: i32) -> Self {
        CombatResult {
            target: target.to_string(),
            outcome: CombatOutcome::Hit,
            hp_delta: -magnitude(amount),
            critical: false,
        }
    }

    /// A hit that restored `amount` HP
    pub fn healing(target: &str, amount: i32) -> Self {
        CombatResult {
            target: target.to_string(),
            outcome: CombatOutcome::Hit,
            hp_delta: magnitude(amount),
            critical: false,
        }
    }

    pub fn miss(target: &str) -> Self {
        CombatResult {
            target: target.to_string(),
            outcome: CombatOutcome::Miss,
            hp_delta: 0,
            critical: false,
        }
    }

    pub fn evade(target: &str) -> Self {
        CombatResult {
            target: target.to_string(),
            outcome: CombatOutcome::Evade,
            hp_delta: 0,
            critical: false,
        }
    }

    /// Mark this result as a critical hit
    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    /// True when the result should spawn a floating number
    pub fn shows_popup(&self) -> bool {
        self.outcome == CombatOutcome::Hit && self.hp_delta != 0
    }

    pub fn is_healing(&self) -> bool {
        self.hp_delta > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let dmg = CombatResult::damage("Slime", 12);
        assert_eq!(dmg.outcome, CombatOutcome::Hit);
        assert_eq!(dmg.hp_delta, -12);
        assert!(!dmg.is_healing());

        // Sign of the argument doesn't matter
        assert_eq!(CombatResult::damage("Slime", -12).hp_delta, -12);

        let heal = CombatResult::healing("Hero", 5);
        assert_eq!(heal.hp_delta, 5);
        assert!(heal.is_healing());
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        assert_eq!(CombatResult::damage("Slime", i32::MIN).hp_delta, -i32::MAX);
        assert_eq!(CombatResult::damage("Slime", i32::MAX).hp_delta, -i32::MAX);
        assert_eq!(CombatResult::healing("Hero", i32::MIN).hp_delta, i32::MAX);
    }

    #[test]
    fn test_popup_only_for_nonzero_hits() {
        assert!(CombatResult::damage("Slime", 3).shows_popup());
        assert!(CombatResult::healing("Hero", 3).shows_popup());
        assert!(!CombatResult::damage("Slime", 0).shows_popup());
        assert!(!CombatResult::miss("Slime").shows_popup());
        assert!(!CombatResult::evade("Slime").shows_popup());
    }

    #[test]
    fn test_critical_flag() {
        let crit = CombatResult::damage("Slime", 30).critical();
        assert!(crit.critical);
        assert_eq!(crit.outcome, CombatOutcome::Hit);
    }
}
